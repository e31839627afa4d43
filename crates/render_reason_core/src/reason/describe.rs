//! Human-readable descriptions for renderer unavailable reasons.
//!
//! Descriptions are lowercase clauses so they read naturally after
//! "GPU rendering is disabled because".

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::code::UnavailableReason;

/// Returned for raw codes that do not name a reason.
pub const UNKNOWN_REASON_DESCRIPTION: &str = "unknown reason";

/// Default lead-in for the sentence built by `fallback_explanation`.
pub const EXPLANATION_PREFIX: &str = "GPU rendering is disabled because";

static UNKNOWN_REASON_LOOKUP_TOTAL: AtomicU64 = AtomicU64::new(0);

impl UnavailableReason {
    pub fn description(self) -> &'static str {
        match self {
            UnavailableReason::None => "nothing is preventing GPU rendering",
            UnavailableReason::NoGpu => "no usable GPU was found on this machine",
            UnavailableReason::Disabled => "the GPU renderer is disabled in settings",
            UnavailableReason::Ligatures => "font ligatures are enabled",
            UnavailableReason::Initializing => "the GPU renderer is still initializing",
            UnavailableReason::InvalidSize => "the session is too large or too small to draw",
            UnavailableReason::SessionInitializing => "the session is still initializing",
            UnavailableReason::Transparency => "the window is transparent",
            UnavailableReason::VerticalSpacing => {
                "the font's vertical spacing is set below 100%"
            }
            UnavailableReason::MarginSize => "the terminal margins are too small",
            UnavailableReason::Annotations => "annotations are visible",
            UnavailableReason::FindPanel => "the find panel is open",
            UnavailableReason::PasteIndicator => "the paste progress indicator is visible",
            UnavailableReason::Announcement => "a notification bar is visible",
            UnavailableReason::UrlPreview => "a URL preview is visible",
            UnavailableReason::WindowResizing => "the window is being resized",
            UnavailableReason::DisconnectedFromPower => {
                "the computer is not connected to power"
            }
            UnavailableReason::Idle => "the session is idle",
            UnavailableReason::TooManyPanes => "too many split panes are open",
            UnavailableReason::NoFocus => "the window does not have keyboard focus",
            UnavailableReason::TabInactive => "the tab is not active",
            UnavailableReason::TabBarTemporarilyVisible => {
                "the tab bar is temporarily visible"
            }
            UnavailableReason::ScreensChanging => "the screen configuration is changing",
            UnavailableReason::ContextAllocationFailure => {
                "a GPU rendering context could not be allocated"
            }
            UnavailableReason::TabDragInProgress => "a tab is being dragged",
            UnavailableReason::SessionHasNoWindow => "the session is not in a window",
            UnavailableReason::DropTargetsVisible => "drop targets are visible",
            UnavailableReason::SharedBackgroundImage => {
                "a background image is shared across split panes"
            }
            UnavailableReason::SwipingBetweenTabs => "you are swiping between tabs",
            UnavailableReason::SplitPaneBeingDragged => "a split pane is being dragged",
            UnavailableReason::WindowObscured => {
                "the window is completely covered by other windows"
            }
            UnavailableReason::LowPowerMode => "low power mode is enabled",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

pub fn description(reason: UnavailableReason) -> &'static str {
    reason.description()
}

/// Describe a reason stored as a raw code.
///
/// Codes outside the registry fall back to `UNKNOWN_REASON_DESCRIPTION`.
pub fn describe_raw(raw: u32) -> &'static str {
    match UnavailableReason::from_raw(raw) {
        Some(reason) => reason.description(),
        None => {
            UNKNOWN_REASON_LOOKUP_TOTAL.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("UnknownRendererUnavailableReason raw={}", raw);
            UNKNOWN_REASON_DESCRIPTION
        }
    }
}

pub fn unknown_reason_lookup_total() -> u64 {
    UNKNOWN_REASON_LOOKUP_TOTAL.load(Ordering::Relaxed)
}

/// Sentence shown to the user when the software renderer is in use.
///
/// Returns `None` when the GPU renderer is available.
pub fn fallback_explanation(reason: UnavailableReason) -> Option<String> {
    if reason.is_gpu_available() {
        return None;
    }
    Some(explanation_with_prefix(EXPLANATION_PREFIX, reason.description()))
}

/// Join a lead-in and a description into one sentence.
///
/// The prefix is trimmed; a blank prefix yields the bare description.
pub fn explanation_with_prefix(prefix: &str, description: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return description.to_string();
    }
    format!("{prefix} {description}")
}
