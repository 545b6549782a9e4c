//! Editor state: the raw SVG source and its validated renderable copy.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::util::svg;

/// Source text and the derived renderable content.
///
/// `renderable` is recomputed synchronously on every source change: it equals
/// `source` verbatim when the text parses and contains an `<svg>` element,
/// and is empty otherwise. Empty `renderable` is the "invalid or empty"
/// signal.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub source: String,
    pub renderable: String,
}

/// Mutually exclusive preview render states, fully determined by the two
/// text values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewState {
    /// No source text at all.
    AwaitingUpload,
    /// Source text present but not a valid SVG document.
    Invalid,
    /// Source text passed the root-element check.
    Renderable,
}

impl EditorState {
    /// Replace the source wholesale and revalidate.
    ///
    /// Runs on every keystroke and on file-read completion; there is no
    /// debouncing, so the parse must stay cheap for editor-sized inputs.
    pub fn set_source(&mut self, text: String) {
        self.renderable = if svg::has_svg_root(&text) {
            text.clone()
        } else {
            String::new()
        };
        self.source = text;
    }

    /// Derive the current preview render state.
    pub fn preview(&self) -> PreviewState {
        if !self.renderable.is_empty() {
            PreviewState::Renderable
        } else if !self.source.is_empty() {
            PreviewState::Invalid
        } else {
            PreviewState::AwaitingUpload
        }
    }
}
