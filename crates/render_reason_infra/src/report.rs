//! Serializable fallback report for diagnostics panels and bug reports.
//!
//! A report is built from either a typed reason or a raw code. Raw codes that
//! do not name a reason still produce a report, carrying the unknown token.
//! Reports read back from JSON must be self-consistent: `code`, `token` and
//! `gpu_available` have to describe the same registry entry.

use std::fmt;

use render_reason_core::{UnavailableReason, describe_raw, explanation_with_prefix};
use serde::{Deserialize, Serialize};

use crate::config::DiagnosticsConfig;

/// Token written for raw codes outside the registry.
pub const UNKNOWN_TOKEN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FallbackReport {
    pub code: u32,
    pub token: String,
    pub description: String,
    pub gpu_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl FallbackReport {
    pub fn for_reason(reason: UnavailableReason, config: &DiagnosticsConfig) -> Self {
        let gpu_available = reason.is_gpu_available();
        Self {
            code: reason.raw(),
            token: reason.as_str().to_string(),
            description: reason.description().to_string(),
            gpu_available,
            explanation: explanation(reason.description(), gpu_available, config),
        }
    }

    /// Build a report from a stored integer. Never fails.
    pub fn for_raw(raw: u32, config: &DiagnosticsConfig) -> Self {
        match UnavailableReason::from_raw(raw) {
            Some(reason) => Self::for_reason(reason, config),
            None => {
                let text = describe_raw(raw);
                tracing::debug!("FallbackReport built for unknown reason code raw={}", raw);
                Self {
                    code: raw,
                    token: UNKNOWN_TOKEN.to_string(),
                    description: text.to_string(),
                    gpu_available: false,
                    explanation: explanation(text, false, config),
                }
            }
        }
    }

    /// Re-resolve the typed reason. `None` for unknown tokens.
    pub fn reason(&self) -> Option<UnavailableReason> {
        self.token.parse().ok()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(ReportError::Json)
    }

    pub fn from_json(input: &str) -> Result<Self, ReportError> {
        let report: Self = serde_json::from_str(input).map_err(ReportError::Json)?;
        report.check_consistent()?;
        Ok(report)
    }

    fn check_consistent(&self) -> Result<(), ReportError> {
        let inconsistent = |reason: &'static str| ReportError::Inconsistent {
            code: self.code,
            token: self.token.clone(),
            reason,
        };
        if self.token == UNKNOWN_TOKEN {
            if UnavailableReason::from_raw(self.code).is_some() {
                return Err(inconsistent("unknown token carries a registered code"));
            }
            if self.gpu_available {
                return Err(inconsistent("unknown reason cannot mean gpu available"));
            }
            return Ok(());
        }
        let reason: UnavailableReason = self
            .token
            .parse()
            .map_err(|_| inconsistent("token is not a registered reason"))?;
        if reason.raw() != self.code {
            return Err(inconsistent("code and token name different reasons"));
        }
        if reason.is_gpu_available() != self.gpu_available {
            return Err(inconsistent("gpu_available disagrees with token"));
        }
        Ok(())
    }
}

fn explanation(
    description: &str,
    gpu_available: bool,
    config: &DiagnosticsConfig,
) -> Option<String> {
    if gpu_available || !config.include_explanation {
        return None;
    }
    Some(explanation_with_prefix(&config.explanation_prefix, description))
}

#[derive(Debug)]
pub enum ReportError {
    Json(serde_json::Error),
    /// Fields that should describe one reason describe different ones.
    Inconsistent {
        code: u32,
        token: String,
        reason: &'static str,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Json(err) => write!(f, "fallback report json error: {err}"),
            ReportError::Inconsistent {
                code,
                token,
                reason,
            } => write!(
                f,
                "inconsistent fallback report (code={code}, token='{token}'): {reason}"
            ),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Json(err) => Some(err),
            ReportError::Inconsistent { .. } => None,
        }
    }
}
