//! Drop target and file picker for loading SVG files into the editor.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::state::editor::EditorState;
use crate::util::svg;

/// Start reading `file`, applying its text to the editor when done.
///
/// Files whose declared media type does not mention `svg` are dropped
/// silently. Each read is tagged with a sequence number; a completion that is
/// no longer the newest issued read is discarded, so a slow early read can
/// never overwrite a later upload.
fn accept_file(file: web_sys::File, editor: RwSignal<EditorState>, read_seq: RwSignal<u64>) {
    if !svg::is_svg_media_type(&file.type_()) {
        return;
    }

    let seq = read_seq.get_untracked() + 1;
    read_seq.set(seq);

    leptos::task::spawn_local(async move {
        let text = match JsFuture::from(file.text()).await {
            Ok(value) => value.as_string().unwrap_or_default(),
            Err(err) => {
                log::warn!("failed to read uploaded file: {err:?}");
                return;
            }
        };
        if read_seq.get_untracked() != seq {
            log::debug!("discarding stale file read #{seq}");
            return;
        }
        editor.update(|e| e.set_source(text));
    });
}

/// Upload area accepting SVG files by drag-and-drop or click-to-pick.
///
/// Drag-over and drag-leave only toggle a visual indicator; nothing changes
/// until a drop or a picker selection completes.
#[component]
pub fn UploadZone() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let dragging = RwSignal::new(false);
    let read_seq = RwSignal::new(0u64);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dragging.set(true);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dragging.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file, editor, read_seq);
        }
    };

    let on_zone_click = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0)) {
            accept_file(file, editor, read_seq);
        }
    };

    let zone_class = move || {
        if dragging.get() {
            "upload-zone upload-zone--dragging"
        } else {
            "upload-zone"
        }
    };

    view! {
        <div
            class=zone_class
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
            on:click=on_zone_click
        >
            <svg class="upload-zone__icon" viewBox="0 0 24 24" aria-hidden="true">
                <path d="M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M15 13l-3-3m0 0l-3 3m3-3v12"></path>
            </svg>
            <p class="upload-zone__hint">
                <strong>"Click to upload"</strong>
                " or drag and drop"
            </p>
            <p class="upload-zone__note">"SVG files only"</p>
            <input
                node_ref=input_ref
                type="file"
                accept=".svg"
                class="upload-zone__input"
                on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
                on:change=on_file_change
            />
        </div>
    }
}
