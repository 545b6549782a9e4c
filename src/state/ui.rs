//! UI state for the preview background, copy confirmation, and theme flag.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Default preview canvas color (mid-gray).
pub const DEFAULT_PREVIEW_BG: &str = "#e3e3e3";

/// Presentation flags independent of the editor text pipeline.
#[derive(Clone, Debug)]
pub struct UiState {
    /// Background color behind the rendered SVG preview.
    pub preview_bg: String,
    /// Transient acknowledgement that a clipboard copy succeeded.
    pub copied: bool,
    /// Whether the dark editor theme variant is active. Initialized from the
    /// system color-scheme preference and tracks it for the page's lifetime.
    pub dark_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            preview_bg: DEFAULT_PREVIEW_BG.to_owned(),
            copied: false,
            dark_mode: false,
        }
    }
}

impl UiState {
    /// Set the preview background, falling back to the default when the
    /// color input hands us an empty value.
    pub fn set_preview_bg(&mut self, value: String) {
        self.preview_bg = if value.is_empty() {
            DEFAULT_PREVIEW_BG.to_owned()
        } else {
            value
        };
    }
}

/// Restart-not-stack bookkeeping for the copy-confirmation window.
///
/// Each successful copy takes a fresh token; the delayed clear scheduled for
/// that copy may reset the flag only while its token is still the newest, so
/// a stale timer can never cut a later copy's window short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyConfirmation {
    generation: u64,
}

impl CopyConfirmation {
    /// Record a successful copy and return its clear token.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True when the delayed clear holding `token` is still the newest.
    pub fn should_clear(&self, token: u64) -> bool {
        self.generation == token
    }
}
