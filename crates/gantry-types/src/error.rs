//! Error types for Gantry.

/// Errors produced by the Gantry crates.
///
/// Layout anomalies are never errors; they are reported as diagnostics.
/// Only resource loading and toolkit failures surface here, with the file
/// or widget they concern already in the message.
#[derive(Debug, thiserror::Error)]
pub enum GantryError {
    #[error("markup error: {0}")]
    Markup(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("toolkit error: {0}")]
    Toolkit(String),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GantryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_error_display() {
        let e = GantryError::Markup("unknown widget type `slider`".into());
        assert_eq!(format!("{e}"), "markup error: unknown widget type `slider`");
    }

    #[test]
    fn config_error_display() {
        let e = GantryError::Config("gantry.toml: bad value".into());
        assert_eq!(format!("{e}"), "config error: gantry.toml: bad value");
    }

    #[test]
    fn toolkit_error_display() {
        let e = GantryError::Toolkit("out of element ids".into());
        assert_eq!(format!("{e}"), "toolkit error: out of element ids");
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(GantryError::Toolkit("oops".into()));
        assert!(r.is_err());
    }
}
