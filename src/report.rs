//! Non-interactive output: one page rendered as plain text.

use tracing::debug;

use crate::error::CliError;
use crate::fixtures::Dataset;
use crate::pages::Page;
use crate::view::render_plain;

/// Sort and filter applied before printing.
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    pub sort: Option<String>,
    pub descending: bool,
    pub filter: Option<String>,
}

/// Renders `page` over `data` as a plain-text table.
pub fn print_page(page: Page, data: &Dataset, opts: &PrintOptions) -> Result<String, CliError> {
    let mut table = page.build(data);

    if let Some(key) = &opts.sort {
        if !table.set_sort(key) {
            let sortable = table
                .column_keys()
                .into_iter()
                .enumerate()
                .filter(|&(i, _)| table.is_sortable(i))
                .map(|(_, k)| k)
                .collect();
            return Err(CliError::SortKey {
                page: page.slug(),
                key: key.clone(),
                sortable,
            });
        }
        if opts.descending {
            table.set_sort(key);
        }
    }
    table.set_filter(opts.filter.clone());

    debug!(
        page = page.slug(),
        rows = table.len(),
        total = table.total_len(),
        "printing page"
    );
    Ok(render_plain(&table.view_model(page.title())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(out: &str) -> Vec<String> {
        out.lines()
            .skip(3)
            .map(|l| l.split("  ").next().unwrap_or("").to_string())
            .collect()
    }

    #[test]
    fn test_print_sorted_descending() {
        let opts = PrintOptions {
            sort: Some("name".to_string()),
            descending: true,
            filter: None,
        };
        let out = print_page(Page::Users, &Dataset::sample(), &opts).unwrap();
        assert!(out.starts_with("System Users\n"));
        assert!(out.contains("Name▼"));
        assert_eq!(
            names(&out),
            vec!["Sarah Davis", "Michael Brown", "John Smith", "Emma Wilson"]
        );
    }

    #[test]
    fn test_print_filtered() {
        let opts = PrintOptions {
            filter: Some("tbd".to_string()),
            ..PrintOptions::default()
        };
        let out = print_page(Page::Placements, &Dataset::sample(), &opts).unwrap();
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("TBD"));
    }

    #[test]
    fn test_print_rejects_unsortable_key() {
        let opts = PrintOptions {
            sort: Some("email".to_string()),
            ..PrintOptions::default()
        };
        let err = print_page(Page::Users, &Dataset::sample(), &opts).unwrap_err();
        match err {
            CliError::SortKey { sortable, .. } => assert_eq!(sortable, vec!["name", "lastLogin"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_print_no_matches() {
        let opts = PrintOptions {
            filter: Some("no such row".to_string()),
            ..PrintOptions::default()
        };
        let out = print_page(Page::Classes, &Dataset::sample(), &opts).unwrap();
        assert!(out.ends_with("(no rows)\n"));
    }
}
