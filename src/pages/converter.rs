//! Single converter page: upload zone, code editor, and live preview.

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::editor_panel::EditorPanel;
use crate::components::preview_panel::PreviewPanel;
use crate::components::upload_zone::UploadZone;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Converter page composing the upload zone with the editor and preview
/// panels, and keeping the theme flag in sync with the system color scheme.
#[component]
pub fn ConverterPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Seed the theme flag once, then track preference changes for the
    // page's lifetime. The listener is removed on teardown.
    ui.update(|u| u.dark_mode = dark_mode::system_preference());
    if let Some(mq) = dark_mode::media_query() {
        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| {
                ui.update(|u| u.dark_mode = ev.matches());
            },
        );
        let _ = mq.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        // on_cleanup requires Send + Sync; the JS handles are main-thread
        // only, so they cross the bound wrapped.
        let handles = SendWrapper::new((mq, on_change));
        on_cleanup(move || {
            let (mq, on_change) = handles.take();
            let _ =
                mq.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        });
    }

    view! {
        <div class="converter-page">
            <header class="converter-page__header">
                <h1>"SVG2Code"</h1>
                <p>"View, edit, and export SVG markup entirely in your browser"</p>
            </header>

            <UploadZone/>

            <div class="converter-page__panels">
                <EditorPanel/>
                <PreviewPanel/>
            </div>
        </div>
    }
}
