//! Error taxonomy for menu construction, rendering and I/O.

use std::io;
use thiserror::Error;

/// Everything that can stop a menu from resolving.
///
/// None of these are retried internally: they describe a caller contract
/// violation or a failing collaborator and propagate unchanged.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The entry list was empty.
    #[error("usage error: {0}")]
    Usage(String),

    /// The selected glyph design could not be resolved.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The entry list contains only separators.
    #[error("menu has no selectable item")]
    EmptyMenu,

    /// The output sink or the key source failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// The key source stopped delivering events before the menu resolved.
    #[error("key input closed before a selection was made")]
    InputClosed,
}

/// Glyph design resolution failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("design id {id} is out of range, there are {available} designs available")]
    DesignOutOfRange { id: usize, available: usize },

    #[error("design string must be exactly {expected} characters long, got {actual}")]
    DesignLength { expected: usize, actual: usize },
}

/// Result alias for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_convert_into_menu_errors() {
        let err: MenuError = ConfigurationError::DesignOutOfRange {
            id: 42,
            available: 20,
        }
        .into();
        assert!(matches!(err, MenuError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "design id 42 is out of range, there are 20 designs available"
        );
    }

    #[test]
    fn io_errors_keep_their_message() {
        let err: MenuError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(err.to_string(), "terminal I/O error: gone");
    }
}
