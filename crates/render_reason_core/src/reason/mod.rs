//! Reasons the GPU renderer is unavailable for a session's view, and their
//! human-readable descriptions.

pub mod code;
pub mod describe;

pub use code::{
    ALL_REASONS, EXPECTED_REASON_COUNT, UnavailableReason, UnknownReasonError, reason_registry,
};
pub use describe::{
    EXPLANATION_PREFIX, UNKNOWN_REASON_DESCRIPTION, describe_raw, description,
    explanation_with_prefix, fallback_explanation, unknown_reason_lookup_total,
};
