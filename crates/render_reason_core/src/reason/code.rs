//! Reason registry for GPU renderer fallback.
//!
//! A session has exactly one current reason. `None` means the GPU renderer
//! is available; every other variant names the condition that forced the
//! software renderer. Raw codes follow declaration order and never change.

use std::fmt;
use std::str::FromStr;

/// Why the GPU renderer is not drawing a session's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnavailableReason {
    None,
    NoGpu,
    Disabled,
    Ligatures,
    Initializing,
    InvalidSize,
    SessionInitializing,
    Transparency,
    VerticalSpacing,
    MarginSize,
    Annotations,
    FindPanel,
    PasteIndicator,
    Announcement,
    UrlPreview,
    WindowResizing,
    DisconnectedFromPower,
    Idle,
    TooManyPanes,
    NoFocus,
    TabInactive,
    TabBarTemporarilyVisible,
    ScreensChanging,
    ContextAllocationFailure,
    TabDragInProgress,
    SessionHasNoWindow,
    DropTargetsVisible,
    SharedBackgroundImage,
    SwipingBetweenTabs,
    SplitPaneBeingDragged,
    WindowObscured,
    LowPowerMode,
}

impl UnavailableReason {
    /// Stable token, used in logs and diagnostics payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            UnavailableReason::None => "None",
            UnavailableReason::NoGpu => "NoGpu",
            UnavailableReason::Disabled => "Disabled",
            UnavailableReason::Ligatures => "Ligatures",
            UnavailableReason::Initializing => "Initializing",
            UnavailableReason::InvalidSize => "InvalidSize",
            UnavailableReason::SessionInitializing => "SessionInitializing",
            UnavailableReason::Transparency => "Transparency",
            UnavailableReason::VerticalSpacing => "VerticalSpacing",
            UnavailableReason::MarginSize => "MarginSize",
            UnavailableReason::Annotations => "Annotations",
            UnavailableReason::FindPanel => "FindPanel",
            UnavailableReason::PasteIndicator => "PasteIndicator",
            UnavailableReason::Announcement => "Announcement",
            UnavailableReason::UrlPreview => "UrlPreview",
            UnavailableReason::WindowResizing => "WindowResizing",
            UnavailableReason::DisconnectedFromPower => "DisconnectedFromPower",
            UnavailableReason::Idle => "Idle",
            UnavailableReason::TooManyPanes => "TooManyPanes",
            UnavailableReason::NoFocus => "NoFocus",
            UnavailableReason::TabInactive => "TabInactive",
            UnavailableReason::TabBarTemporarilyVisible => "TabBarTemporarilyVisible",
            UnavailableReason::ScreensChanging => "ScreensChanging",
            UnavailableReason::ContextAllocationFailure => "ContextAllocationFailure",
            UnavailableReason::TabDragInProgress => "TabDragInProgress",
            UnavailableReason::SessionHasNoWindow => "SessionHasNoWindow",
            UnavailableReason::DropTargetsVisible => "DropTargetsVisible",
            UnavailableReason::SharedBackgroundImage => "SharedBackgroundImage",
            UnavailableReason::SwipingBetweenTabs => "SwipingBetweenTabs",
            UnavailableReason::SplitPaneBeingDragged => "SplitPaneBeingDragged",
            UnavailableReason::WindowObscured => "WindowObscured",
            UnavailableReason::LowPowerMode => "LowPowerMode",
        }
    }

    /// Raw integer code, for callers that store the reason as a number.
    pub fn raw(self) -> u32 {
        self as u32
    }

    pub fn from_raw(raw: u32) -> Option<Self> {
        usize::try_from(raw)
            .ok()
            .and_then(|idx| ALL_REASONS.get(idx))
            .copied()
    }

    /// True only when nothing is keeping the GPU renderer off.
    pub fn is_gpu_available(self) -> bool {
        self == UnavailableReason::None
    }
}

/// Expected number of `UnavailableReason` variants. Bump when adding one.
pub const EXPECTED_REASON_COUNT: usize = 32;

/// Every variant, indexed by raw code.
pub const ALL_REASONS: &[UnavailableReason] = &[
    UnavailableReason::None,
    UnavailableReason::NoGpu,
    UnavailableReason::Disabled,
    UnavailableReason::Ligatures,
    UnavailableReason::Initializing,
    UnavailableReason::InvalidSize,
    UnavailableReason::SessionInitializing,
    UnavailableReason::Transparency,
    UnavailableReason::VerticalSpacing,
    UnavailableReason::MarginSize,
    UnavailableReason::Annotations,
    UnavailableReason::FindPanel,
    UnavailableReason::PasteIndicator,
    UnavailableReason::Announcement,
    UnavailableReason::UrlPreview,
    UnavailableReason::WindowResizing,
    UnavailableReason::DisconnectedFromPower,
    UnavailableReason::Idle,
    UnavailableReason::TooManyPanes,
    UnavailableReason::NoFocus,
    UnavailableReason::TabInactive,
    UnavailableReason::TabBarTemporarilyVisible,
    UnavailableReason::ScreensChanging,
    UnavailableReason::ContextAllocationFailure,
    UnavailableReason::TabDragInProgress,
    UnavailableReason::SessionHasNoWindow,
    UnavailableReason::DropTargetsVisible,
    UnavailableReason::SharedBackgroundImage,
    UnavailableReason::SwipingBetweenTabs,
    UnavailableReason::SplitPaneBeingDragged,
    UnavailableReason::WindowObscured,
    UnavailableReason::LowPowerMode,
];

pub fn reason_registry() -> &'static [UnavailableReason] {
    ALL_REASONS
}

/// Input that does not name any `UnavailableReason`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownReasonError {
    Code(u32),
    Token(String),
}

impl fmt::Display for UnknownReasonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownReasonError::Code(raw) => {
                write!(f, "unknown renderer unavailable reason code {raw}")
            }
            UnknownReasonError::Token(token) => {
                write!(f, "unknown renderer unavailable reason token '{token}'")
            }
        }
    }
}

impl std::error::Error for UnknownReasonError {}

impl TryFrom<u32> for UnavailableReason {
    type Error = UnknownReasonError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        UnavailableReason::from_raw(raw).ok_or(UnknownReasonError::Code(raw))
    }
}

impl FromStr for UnavailableReason {
    type Err = UnknownReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_REASONS
            .iter()
            .copied()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| UnknownReasonError::Token(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_indexed_by_raw_code() {
        assert_eq!(ALL_REASONS.len(), EXPECTED_REASON_COUNT);
        for (idx, &reason) in ALL_REASONS.iter().enumerate() {
            assert_eq!(
                reason.raw() as usize,
                idx,
                "UnavailableReason::{reason:?} is out of order in ALL_REASONS"
            );
        }
    }

    #[test]
    fn tokens_are_unique() {
        let mut tokens: Vec<&str> = ALL_REASONS.iter().map(|r| r.as_str()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), ALL_REASONS.len(), "duplicate reason tokens");
    }

    #[test]
    fn from_raw_rejects_first_code_past_the_end() {
        assert_eq!(
            UnavailableReason::from_raw(EXPECTED_REASON_COUNT as u32),
            None
        );
        assert_eq!(UnavailableReason::from_raw(u32::MAX), None);
    }

    #[test]
    fn only_none_means_available() {
        let available: Vec<_> = ALL_REASONS
            .iter()
            .filter(|r| r.is_gpu_available())
            .collect();
        assert_eq!(available, vec![&UnavailableReason::None]);
    }
}
