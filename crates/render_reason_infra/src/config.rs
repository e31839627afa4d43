//! Diagnostics configuration with defaults.
//!
//! Explicit values take precedence. Missing values fall back to the defaults
//! below. Values that would produce unreadable output are rejected.

use std::fmt;

use render_reason_core::EXPLANATION_PREFIX;

pub const DEFAULT_EXPLANATION_PREFIX: &str = EXPLANATION_PREFIX;
pub const DEFAULT_INCLUDE_EXPLANATION: bool = true;

/// Controls how fallback reports render their user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Text placed before the reason description. Trimmed when used; a blank
    /// prefix leaves the bare description.
    pub explanation_prefix: String,
    /// Whether reports carry the full sentence at all.
    pub include_explanation: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            explanation_prefix: DEFAULT_EXPLANATION_PREFIX.to_string(),
            include_explanation: DEFAULT_INCLUDE_EXPLANATION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid diagnostics config '{}': {}",
            self.param_name, self.reason
        )
    }
}

impl std::error::Error for ConfigError {}

/// Resolve diagnostics settings from optional overrides.
///
/// - `None` applies the default.
/// - A prefix that is empty or whitespace-only is an error.
/// - A prefix with surrounding whitespace is trimmed.
pub fn resolve_diagnostics_config(
    explanation_prefix: Option<&str>,
    include_explanation: Option<bool>,
) -> Result<DiagnosticsConfig, ConfigError> {
    let prefix = match explanation_prefix {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigError {
                    param_name: "explanation_prefix",
                    reason: "value is blank",
                });
            }
            trimmed.to_string()
        }
        None => DEFAULT_EXPLANATION_PREFIX.to_string(),
    };
    Ok(DiagnosticsConfig {
        explanation_prefix: prefix,
        include_explanation: include_explanation.unwrap_or(DEFAULT_INCLUDE_EXPLANATION),
    })
}
