//! Tests for renderer unavailable reason descriptions.
//!
//! Covers totality, determinism, distinctness, and the raw-code fallback.

use render_reason_core::{
    ALL_REASONS, EXPECTED_REASON_COUNT, EXPLANATION_PREFIX, UNKNOWN_REASON_DESCRIPTION,
    UnavailableReason, describe_raw, description, fallback_explanation, reason_registry,
};

// ─── Totality & determinism ──────────────────────────────────────────────

#[test]
fn test_every_reason_has_a_description() {
    assert_eq!(reason_registry().len(), EXPECTED_REASON_COUNT);
    for &reason in reason_registry() {
        assert!(
            !description(reason).is_empty(),
            "UnavailableReason::{reason:?} has no description"
        );
    }
}

#[test]
fn test_lookup_is_deterministic() {
    for &reason in ALL_REASONS {
        let first = description(reason);
        let second = description(reason);
        assert_eq!(
            first, second,
            "UnavailableReason::{reason:?} returned different text on repeat lookup"
        );
    }
}

#[test]
fn test_descriptions_do_not_collide() {
    let mut texts: Vec<&str> = ALL_REASONS.iter().map(|&r| description(r)).collect();
    texts.sort();
    texts.dedup();
    assert_eq!(texts.len(), ALL_REASONS.len(), "two reasons share a description");
}

#[test]
fn test_no_reason_uses_the_unknown_fallback_text() {
    for &reason in ALL_REASONS {
        assert_ne!(description(reason), UNKNOWN_REASON_DESCRIPTION);
    }
}

// ─── Example scenarios ───────────────────────────────────────────────────

#[test]
fn test_no_gpu_mentions_missing_gpu() {
    let text = description(UnavailableReason::NoGpu);
    assert!(text.contains("no usable GPU"), "got: {text}");
}

#[test]
fn test_low_power_mode_mentions_power() {
    let text = description(UnavailableReason::LowPowerMode);
    assert!(text.contains("low power"), "got: {text}");
}

#[test]
fn test_window_resizing_mentions_resize() {
    let text = description(UnavailableReason::WindowResizing);
    assert!(text.contains("resized"), "got: {text}");
}

#[test]
fn test_out_of_set_code_uses_fallback() {
    assert_eq!(
        describe_raw(EXPECTED_REASON_COUNT as u32),
        UNKNOWN_REASON_DESCRIPTION
    );
    assert_eq!(describe_raw(u32::MAX), UNKNOWN_REASON_DESCRIPTION);
}

// ─── Raw codes ───────────────────────────────────────────────────────────

#[test]
fn test_raw_codes_match_declaration_order() {
    assert_eq!(UnavailableReason::None.raw(), 0);
    assert_eq!(UnavailableReason::NoGpu.raw(), 1);
    assert_eq!(UnavailableReason::WindowResizing.raw(), 15);
    assert_eq!(UnavailableReason::LowPowerMode.raw(), 31);
}

#[test]
fn test_describe_raw_agrees_with_typed_lookup() {
    for &reason in ALL_REASONS {
        assert_eq!(describe_raw(reason.raw()), description(reason));
    }
}

// ─── Explanation ─────────────────────────────────────────────────────────

#[test]
fn test_explanation_wraps_description() {
    let text = fallback_explanation(UnavailableReason::Ligatures);
    assert_eq!(
        text.as_deref(),
        Some("GPU rendering is disabled because font ligatures are enabled")
    );
}

#[test]
fn test_every_unavailable_reason_has_an_explanation() {
    for &reason in ALL_REASONS.iter().filter(|r| !r.is_gpu_available()) {
        let text = fallback_explanation(reason)
            .unwrap_or_else(|| panic!("UnavailableReason::{reason:?} has no explanation"));
        assert!(
            text.starts_with(EXPLANATION_PREFIX),
            "UnavailableReason::{reason:?} explanation lacks the prefix: {text}"
        );
        assert!(
            text.ends_with(description(reason)),
            "UnavailableReason::{reason:?} explanation lacks its description: {text}"
        );
    }
}
