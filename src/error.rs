//! Error types for data loading and name parsing.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to load a data set from disk.
#[derive(Debug)]
pub enum DataError {
    /// File could not be read.
    Io { path: PathBuf, source: io::Error },
    /// File contents are not a valid data set.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            DataError::Json { path, source } => {
                write!(f, "invalid data in '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io { source, .. } => Some(source),
            DataError::Json { source, .. } => Some(source),
        }
    }
}

/// Unknown page or role name on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    pub kind: &'static str,
    pub input: String,
    pub expected: &'static [&'static str],
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}', expected one of: {}",
            self.kind,
            self.input,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for ParseNameError {}

/// Command-line failure reported before exiting with status 1.
#[derive(Debug)]
pub enum CliError {
    Data(DataError),
    Name(ParseNameError),
    /// `--sort` names no sortable column of the page.
    SortKey {
        page: &'static str,
        key: String,
        sortable: Vec<&'static str>,
    },
    /// No page is visible for the selected role.
    NoPages { role: &'static str },
    /// `--page` is not one of the role's pages.
    PageNotVisible {
        page: &'static str,
        role: &'static str,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Data(e) => write!(f, "{}", e),
            CliError::Name(e) => write!(f, "{}", e),
            CliError::SortKey {
                page,
                key,
                sortable,
            } => write!(
                f,
                "cannot sort {} by '{}', sortable columns: {}",
                page,
                key,
                sortable.join(", ")
            ),
            CliError::NoPages { role } => write!(f, "role '{}' has no table pages", role),
            CliError::PageNotVisible { page, role } => {
                write!(f, "page '{}' is not available to role '{}'", page, role)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Data(e) => Some(e),
            CliError::Name(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DataError> for CliError {
    fn from(e: DataError) -> Self {
        CliError::Data(e)
    }
}

impl From<ParseNameError> for CliError {
    fn from(e: ParseNameError) -> Self {
        CliError::Name(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_error_lists_choices() {
        let err = ParseNameError {
            kind: "role",
            input: "dean".to_string(),
            expected: &["student", "admin"],
        };
        assert_eq!(
            err.to_string(),
            "unknown role 'dean', expected one of: student, admin"
        );
    }

    #[test]
    fn test_cli_error_wraps_sources() {
        let err: CliError = DataError::Io {
            path: PathBuf::from("/nope.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        }
        .into();
        assert!(err.to_string().contains("/nope.json"));
        assert!(std::error::Error::source(&err).is_some());

        let err = CliError::SortKey {
            page: "users",
            key: "email".to_string(),
            sortable: vec!["name", "lastLogin"],
        };
        assert_eq!(
            err.to_string(),
            "cannot sort users by 'email', sortable columns: name, lastLogin"
        );
    }
}
