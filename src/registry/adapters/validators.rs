//! Builtin argument validators bound to catalog entries.

use crate::registry::domain::{ArgMap, ArgumentRejection, ArgumentValidator, ValidationOutcome};
use serde_json::Value;

/// Argument key checked by [`OptimizeModeValidator`].
const OPTIMIZE_MODE_KEY: &str = "optimize_mode";

/// Validates the `optimize_mode` class argument shared by most builtin
/// tuners and advisors.
///
/// Accepts `maximize` or `minimize` in any letter case, normalising the
/// value to lowercase; rejects any other value or a non-string. A mapping
/// without an `optimize_mode` key passes unchanged; the entry's default
/// arguments supply one where the algorithm needs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizeModeValidator;

impl OptimizeModeValidator {
    /// Creates the validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ArgumentValidator for OptimizeModeValidator {
    fn validate(&self, args: &ArgMap) -> Result<ValidationOutcome, ArgumentRejection> {
        let Some(raw) = args.get(OPTIMIZE_MODE_KEY) else {
            return Ok(ValidationOutcome::Unchanged);
        };

        let Some(mode) = raw.as_str() else {
            return Err(ArgumentRejection::new(format!(
                "optimize_mode must be a string, got {raw}"
            )));
        };

        let lowered = mode.to_ascii_lowercase();
        if lowered != "maximize" && lowered != "minimize" {
            return Err(ArgumentRejection::new(format!(
                "optimize_mode must be 'maximize' or 'minimize', got '{mode}'"
            )));
        }

        if lowered == mode {
            return Ok(ValidationOutcome::Unchanged);
        }

        let mut normalized = args.clone();
        normalized.insert(OPTIMIZE_MODE_KEY.to_owned(), Value::String(lowered));
        Ok(ValidationOutcome::Normalized(normalized))
    }
}
