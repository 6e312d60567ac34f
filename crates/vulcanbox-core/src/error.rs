//! The VulcanBox error taxonomy.
//!
//! Exactly two error variants exist: [`VulcanBoxError::Input`] for
//! user-correctable mistakes and [`VulcanBoxError::Runtime`] for
//! environment- or system-level failures. Every domain failure in this
//! workspace is one of the two; there is no third kind.
//!
//! Each variant carries a fixed process exit code (see [`exit_code`]) and an
//! optional help string shown to the user at the CLI boundary. The boundary
//! catches the error exactly once, logs it, prints the help text, and exits
//! with the variant's code — errors are never retried or silently swallowed.

use thiserror::Error;

/// The closed set of process exit codes.
///
/// | Code | Meaning       |
/// |------|---------------|
/// |  0   | Success       |
/// |  1   | Runtime error |
/// |  2   | Input error   |
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const RUNTIME_ERROR: u8 = 1;
    pub const INPUT_ERROR: u8 = 2;
}

/// Help string used when an error does not supply its own.
pub const DEFAULT_HELP: &str =
    "Help is available with --help. Use the -v flag to increase output verbosity.";

/// Root error type for VulcanBox operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VulcanBoxError {
    /// The user supplied something invalid (bad name, bad range, double
    /// build). Exit code 2.
    #[error("{message}")]
    Input {
        message: String,
        help_text: Option<String>,
    },

    /// The environment failed us (I/O, external engine, HTTP). Exit code 1.
    #[error("{message}")]
    Runtime {
        message: String,
        help_text: Option<String>,
    },
}

impl VulcanBoxError {
    /// An input error with the default help text.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help_text: None,
        }
    }

    /// An input error with a custom help string.
    pub fn input_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
            help_text: Some(help.into()),
        }
    }

    /// A runtime error with the default help text.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
            help_text: None,
        }
    }

    /// A runtime error with a custom help string.
    pub fn runtime_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
            help_text: Some(help.into()),
        }
    }

    /// Exit code fixed per variant.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input { .. } => exit_code::INPUT_ERROR,
            Self::Runtime { .. } => exit_code::RUNTIME_ERROR,
        }
    }

    /// The help string for the user, falling back to [`DEFAULT_HELP`].
    pub fn help_text(&self) -> &str {
        match self {
            Self::Input { help_text, .. } | Self::Runtime { help_text, .. } => {
                help_text.as_deref().unwrap_or(DEFAULT_HELP)
            }
        }
    }

    /// `true` for the user-correctable variant.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }
}

/// Convenient result type alias.
pub type VulcanBoxResult<T> = Result<T, VulcanBoxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_exit_code_is_two() {
        assert_eq!(VulcanBoxError::input("bad name").exit_code(), 2);
    }

    #[test]
    fn runtime_exit_code_is_one() {
        assert_eq!(VulcanBoxError::runtime("disk on fire").exit_code(), 1);
    }

    #[test]
    fn default_help_when_none_supplied() {
        let err = VulcanBoxError::input("x");
        assert_eq!(err.help_text(), DEFAULT_HELP);
    }

    #[test]
    fn custom_help_is_kept() {
        let err = VulcanBoxError::runtime_with_help("x", "try turning it off and on");
        assert_eq!(err.help_text(), "try turning it off and on");
    }

    #[test]
    fn message_is_display() {
        let err = VulcanBoxError::input("Replica count must be at least 1");
        assert_eq!(err.to_string(), "Replica count must be at least 1");
    }

    #[test]
    fn variants_classify() {
        assert!(VulcanBoxError::input("x").is_input());
        assert!(!VulcanBoxError::runtime("x").is_input());
    }
}
