// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

/// Specific error types for locale catalog construction.
/// These only surface while loading embedded locale data; translation
/// resolution itself never returns an error (missing keys fall back to the
/// key string instead).
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// Embedded resource is not valid UTF-8
    InvalidEncoding(String),

    /// Locale file stem is not a parseable language identifier
    InvalidLocaleTag(String),

    /// Locale file content is not valid JSON
    MalformedTable(String),

    /// The locale file parsed, but its root is not an object
    NonTableRoot(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidEncoding(file) => {
                write!(f, "Locale file is not valid UTF-8: {}", file)
            }
            CatalogError::InvalidLocaleTag(tag) => {
                write!(f, "Invalid locale identifier: {}", tag)
            }
            CatalogError::MalformedTable(file) => {
                write!(f, "Malformed translation table: {}", file)
            }
            CatalogError::NonTableRoot(file) => {
                write!(f, "Translation table root is not an object: {}", file)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_wraps_into_error() {
        let err: Error = CatalogError::MalformedTable("xx.json".to_string()).into();
        match err {
            Error::Catalog(CatalogError::MalformedTable(file)) => assert_eq!(file, "xx.json"),
            _ => panic!("expected Catalog variant"),
        }
    }

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::InvalidLocaleTag("not a tag".to_string());
        assert!(format!("{}", err).contains("not a tag"));
    }
}
