//! TUI widgets for campus360.

mod footer;
mod header;
mod help;
mod quit_confirm;
mod table;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use table::render_table;
