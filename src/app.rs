//! Root application component providing shared state contexts.

use leptos::prelude::*;

use crate::pages::converter::ConverterPage;
use crate::state::editor::EditorState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the editor and UI state contexts and renders the single
/// converter page. There is no routing; the whole app is one page.
#[component]
pub fn App() -> impl IntoView {
    let editor = RwSignal::new(EditorState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(editor);
    provide_context(ui);

    view! { <ConverterPage/> }
}
