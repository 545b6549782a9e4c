//! Rendered SVG preview with background control and download export.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::state::editor::{EditorState, PreviewState};
use crate::state::ui::UiState;
use crate::util::svg;

/// Serialize the live `<svg>` inside the preview container back to markup.
///
/// Returns `None` when no SVG element is currently rendered. The serialized
/// text reflects the DOM state, which is not guaranteed byte-identical to
/// the source the browser parsed it from.
fn serialize_rendered_svg(container: &web_sys::HtmlDivElement) -> Option<String> {
    let svg_el = container.query_selector("svg").ok().flatten()?;
    let serializer = web_sys::XmlSerializer::new().ok()?;
    serializer.serialize_to_string(&svg_el).ok()
}

/// One-shot synthetic-anchor download of a data URI as `image.svg`.
fn trigger_download(url: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };

    anchor.set_href(url);
    anchor.set_download("image.svg");
    if body.append_child(&anchor).is_ok() {
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

/// Preview panel showing one of three mutually exclusive states: the
/// rendered SVG, an invalid-markup placeholder, or an awaiting-upload
/// placeholder.
#[component]
pub fn PreviewPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let preview_ref = NodeRef::<leptos::html::Div>::new();

    let on_bg_change = move |ev| {
        ui.update(|u| u.set_preview_bg(event_target_value(&ev)));
    };

    let on_download = move |_| {
        let Some(container) = preview_ref.get_untracked() else {
            return;
        };
        let Some(xml) = serialize_rendered_svg(&container) else {
            return;
        };
        trigger_download(&svg::to_data_url(&xml));
    };

    view! {
        <section class="preview-panel">
            <div class="preview-panel__header">
                <h2>"Preview"</h2>
                <label class="preview-panel__bg-label">
                    "BG:"
                    <input
                        type="color"
                        prop:value=move || ui.get().preview_bg
                        on:input=on_bg_change
                    />
                </label>
                <button
                    class="btn btn--accent"
                    prop:disabled=move || editor.get().renderable.is_empty()
                    on:click=on_download
                >
                    "Download"
                </button>
            </div>
            <div class="preview-panel__canvas" style:background=move || ui.get().preview_bg>
                {move || match editor.get().preview() {
                    PreviewState::Renderable => {
                        view! {
                            <div
                                node_ref=preview_ref
                                class="preview-panel__render"
                                inner_html=editor.get().renderable
                            ></div>
                        }
                            .into_any()
                    }
                    PreviewState::Invalid => {
                        view! {
                            <div class="preview-panel__placeholder preview-panel__placeholder--invalid">
                                <p>"Not a valid SVG code"</p>
                            </div>
                        }
                            .into_any()
                    }
                    PreviewState::AwaitingUpload => {
                        view! {
                            <div class="preview-panel__placeholder">
                                <p>"Upload an SVG file to see preview"</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}
