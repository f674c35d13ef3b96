//! campus360 - Role-based campus dashboard.
//!
//! Usage:
//!   campus360                          # all pages, sample data
//!   campus360 --role placement         # only the placement officer's pages
//!   campus360 --page logs --delay-ms 0 # start on the logs tab, no loading delay
//!   campus360 --data campus.json       # load records from a JSON file
//!   campus360 --print --page users --sort lastLogin --desc

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

use campus360::fixtures::Dataset;
use campus360::models::Role;
use campus360::pages::{Page, select_pages};
use campus360::report::{PrintOptions, print_page};
use campus360::tui::{App, AppState};

use tikv_jemallocator::Jemalloc;
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Role-based campus dashboard with sortable tables.
#[derive(Parser)]
#[command(name = "campus360", version, about = "Campus management dashboard")]
struct Args {
    /// Page to open first (for example users, placements, at-risk).
    #[arg(short = 'p', long, value_name = "NAME")]
    page: Option<Page>,

    /// Show only the pages of this role (student, faculty, placement, admin).
    #[arg(short = 'r', long, value_name = "ROLE")]
    role: Option<Role>,

    /// JSON data file. Built-in sample data is used when omitted.
    #[arg(short = 'd', long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Simulated loading delay before a page is first shown.
    #[arg(long, value_name = "MS", default_value_t = 500)]
    delay_ms: u64,

    /// Print one page as plain text instead of starting the TUI.
    #[arg(long)]
    print: bool,

    /// Column key to sort by (print mode).
    #[arg(long, value_name = "KEY", requires = "print")]
    sort: Option<String>,

    /// Sort descending (print mode).
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Case-insensitive row filter (print mode).
    #[arg(long, value_name = "TEXT", requires = "print")]
    filter: Option<String>,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Write logs to this file (TUI mode discards logs otherwise).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let data = match &args.data {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::sample(),
    };
    let (pages, start) = select_pages(args.role, args.page)?;

    if args.print {
        let opts = PrintOptions {
            sort: args.sort,
            descending: args.desc,
            filter: args.filter,
        };
        let output = print_page(pages[start], &data, &opts)?;
        print!("{}", output);
        return Ok(());
    }

    info!(
        records = data.record_count(),
        pages = pages.len(),
        delay_ms = args.delay_ms,
        "starting TUI"
    );
    let mut state = AppState::new(&pages, &data, Duration::from_millis(args.delay_ms));
    state.switch_page(start);
    App::new(state).run(TICK_RATE)?;
    Ok(())
}

/// Initializes logging with the configured verbosity.
///
/// Print mode logs to stderr; the TUI owns the terminal, so it logs to
/// `--log-file` or nowhere.
fn init_logging(args: &Args) -> io::Result<()> {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let directive = format!("campus360={}", level)
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    let filter = EnvFilter::from_default_env().add_directive(directive);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match (&args.log_file, args.print) {
        (Some(path), _) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, true) => builder.with_writer(io::stderr).init(),
        (None, false) => builder.with_writer(io::sink).init(),
    }
    Ok(())
}
