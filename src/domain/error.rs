//! Crate error type and exit-code mapping.
//!
//! The engines themselves never fail on structurally valid input; errors
//! occur only at the adapter/CLI boundary (I/O, malformed holdings input,
//! unrecognized scenario/preset/rubric names).

/// Top-level error type for foliostat.
#[derive(Debug, thiserror::Error)]
pub enum FoliostatError {
    #[error("holdings parse error: {reason}")]
    HoldingsParse { reason: String },

    #[error("unknown rubric '{name}' (expected: strict, lenient)")]
    UnknownRubric { name: String },

    #[error("unknown scenario '{name}' (expected one of: {available})")]
    UnknownScenario { name: String, available: String },

    #[error("unknown preset '{name}' (expected one of: {available})")]
    UnknownPreset { name: String, available: String },

    #[error("report render error: {reason}")]
    Render { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FoliostatError> for std::process::ExitCode {
    fn from(err: &FoliostatError) -> Self {
        let code: u8 = match err {
            FoliostatError::Io(_) | FoliostatError::Render { .. } => 1,
            FoliostatError::HoldingsParse { .. } => 2,
            FoliostatError::UnknownRubric { .. }
            | FoliostatError::UnknownScenario { .. }
            | FoliostatError::UnknownPreset { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
