#![forbid(unsafe_code)]

pub mod reason;

pub use reason::{
    ALL_REASONS, EXPECTED_REASON_COUNT, EXPLANATION_PREFIX, UNKNOWN_REASON_DESCRIPTION,
    UnavailableReason, UnknownReasonError, describe_raw, description, explanation_with_prefix,
    fallback_explanation, reason_registry, unknown_reason_lookup_total,
};
