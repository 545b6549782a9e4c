//! Source editor panel with clipboard copy and transient confirmation.

use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::state::editor::EditorState;
use crate::state::ui::{CopyConfirmation, UiState};

/// How long the "Copied!" confirmation stays visible.
const COPY_CONFIRM_MS: u64 = 2000;

/// Editor panel: a text surface bound to the SVG source plus a copy button.
///
/// Every input event replaces the source wholesale and revalidates it; the
/// theme flag only selects the editor's visual variant.
#[component]
pub fn EditorPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Only the pending clear issued by the newest successful copy may reset
    // the flag.
    let confirm = RwSignal::new(CopyConfirmation::default());

    let on_input = move |ev| {
        editor.update(|e| e.set_source(event_target_value(&ev)));
    };

    let on_copy = move |_| {
        let text = editor.get_untracked().source;
        if text.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            if let Err(err) = JsFuture::from(promise).await {
                log::warn!("clipboard copy failed: {err:?}");
                return;
            }

            let mut window_state = confirm.get_untracked();
            let token = window_state.begin();
            confirm.set(window_state);
            ui.update(|u| u.copied = true);

            gloo_timers::future::sleep(std::time::Duration::from_millis(COPY_CONFIRM_MS)).await;
            if confirm.get_untracked().should_clear(token) {
                ui.update(|u| u.copied = false);
            }
        });
    };

    let editor_class = move || {
        if ui.get().dark_mode {
            "editor-panel__input editor-panel__input--dark"
        } else {
            "editor-panel__input"
        }
    };

    view! {
        <section class="editor-panel">
            <div class="editor-panel__header">
                <h2>"SVG Code"</h2>
                <button
                    class="btn btn--primary"
                    prop:disabled=move || editor.get().source.is_empty()
                    on:click=on_copy
                >
                    {move || if ui.get().copied { "Copied!" } else { "Copy Code" }}
                </button>
            </div>
            <textarea
                class=editor_class
                spellcheck="false"
                placeholder="Paste SVG markup here"
                prop:value=move || editor.get().source
                on:input=on_input
            ></textarea>
        </section>
    }
}
