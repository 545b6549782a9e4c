use super::*;

const MINIMAL_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="10"/></svg>"#;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_awaiting_upload() {
    let state = EditorState::default();
    assert!(state.source.is_empty());
    assert!(state.renderable.is_empty());
    assert_eq!(state.preview(), PreviewState::AwaitingUpload);
}

// =============================================================
// set_source: valid input
// =============================================================

#[test]
fn valid_svg_is_renderable_verbatim() {
    let mut state = EditorState::default();
    state.set_source(MINIMAL_SVG.to_owned());
    assert_eq!(state.source, MINIMAL_SVG);
    assert_eq!(state.renderable, MINIMAL_SVG);
    assert_eq!(state.preview(), PreviewState::Renderable);
}

#[test]
fn revalidation_is_deterministic() {
    let mut a = EditorState::default();
    let mut b = EditorState::default();
    for state in [&mut a, &mut b] {
        state.set_source(MINIMAL_SVG.to_owned());
        state.set_source(MINIMAL_SVG.to_owned());
    }
    assert_eq!(a.renderable, b.renderable);
    assert_eq!(a.preview(), b.preview());
}

// =============================================================
// set_source: invalid input
// =============================================================

#[test]
fn garbage_text_is_invalid_not_awaiting() {
    let mut state = EditorState::default();
    state.set_source("hello world".to_owned());
    assert_eq!(state.source, "hello world");
    assert!(state.renderable.is_empty());
    assert_eq!(state.preview(), PreviewState::Invalid);
}

#[test]
fn non_svg_markup_is_invalid() {
    let mut state = EditorState::default();
    state.set_source("<div>not an svg</div>".to_owned());
    assert!(state.renderable.is_empty());
    assert_eq!(state.preview(), PreviewState::Invalid);
}

#[test]
fn svg_nested_in_wrapper_markup_is_renderable() {
    let mut state = EditorState::default();
    state.set_source("<div><svg/></div>".to_owned());
    assert_eq!(state.renderable, state.source);
    assert_eq!(state.preview(), PreviewState::Renderable);
}

#[test]
fn invalid_replacement_clears_prior_renderable() {
    let mut state = EditorState::default();
    state.set_source(MINIMAL_SVG.to_owned());
    assert_eq!(state.preview(), PreviewState::Renderable);

    state.set_source("<svg".to_owned());
    assert!(state.renderable.is_empty());
    assert_eq!(state.preview(), PreviewState::Invalid);
}

// =============================================================
// Empty-state precedence
// =============================================================

#[test]
fn clearing_source_returns_to_awaiting_upload() {
    let mut state = EditorState::default();
    state.set_source(MINIMAL_SVG.to_owned());
    state.set_source(String::new());
    assert!(state.source.is_empty());
    assert!(state.renderable.is_empty());
    assert_eq!(state.preview(), PreviewState::AwaitingUpload);
}

#[test]
fn whitespace_only_source_counts_as_invalid() {
    let mut state = EditorState::default();
    state.set_source("   ".to_owned());
    assert_eq!(state.preview(), PreviewState::Invalid);
}

// =============================================================
// Invariant: renderable is empty or equals source
// =============================================================

#[test]
fn renderable_is_empty_or_verbatim_source() {
    let inputs = [
        "",
        "hello world",
        "<svg/>",
        MINIMAL_SVG,
        "<rect width=\"1\"/>",
        "<svg><circle r=\"5\"/></svg>",
    ];
    for input in inputs {
        let mut state = EditorState::default();
        state.set_source(input.to_owned());
        assert!(
            state.renderable.is_empty() || state.renderable == state.source,
            "broken invariant for input {input:?}"
        );
    }
}
