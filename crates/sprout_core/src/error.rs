use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::id::HabitId;

pub type Result<T> = std::result::Result<T, SproutError>;

#[derive(Error, Diagnostic, Debug)]
pub enum SproutError {
    #[error("History source failure")]
    #[diagnostic(
        code(sprout_core::source_failure),
        help("The history source could not answer a {operation} lookup; retry policy belongs to the caller")
    )]
    SourceFailure {
        habit_id: HabitId,
        operation: &'static str,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Could not read configuration from {path}")]
    #[diagnostic(
        code(sprout_core::config_io),
        help("Check that the file exists and is readable")
    )]
    ConfigIo {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Invalid configuration in {path}")]
    #[diagnostic(
        code(sprout_core::config_parse),
        help("Check the TOML syntax and field names against the documented schema")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        cause: toml::de::Error,
    },

    #[error("Could not write configuration to {path}")]
    #[diagnostic(code(sprout_core::config_write))]
    ConfigWrite {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("Could not serialize configuration")]
    #[diagnostic(code(sprout_core::config_serialize))]
    ConfigSerialize {
        #[source]
        cause: toml::ser::Error,
    },
}

impl SproutError {
    /// Wrap an arbitrary source-side error in a `SourceFailure` for `habit_id`.
    pub fn source_failure(
        habit_id: HabitId,
        operation: &'static str,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SourceFailure {
            habit_id,
            operation,
            cause: Box::new(cause),
        }
    }
}
