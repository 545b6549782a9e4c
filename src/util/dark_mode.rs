//! System color-scheme preference access.
//!
//! Reads `matchMedia("(prefers-color-scheme: dark)")` to seed the theme flag
//! at startup. Nothing is persisted; change tracking is wired up by the page
//! so the listener's lifetime matches the component's.

/// Media query matching when the platform prefers a dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the current system dark-scheme preference.
///
/// Returns `false` outside a browser environment or when the query is
/// unsupported.
pub fn system_preference() -> bool {
    media_query().map_or(false, |mq| mq.matches())
}

/// The dark-scheme `MediaQueryList`, when a browser window is available.
pub fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}
