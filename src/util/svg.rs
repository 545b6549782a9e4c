//! Pure SVG text helpers: validity check, media-type gate, data-URL encoding.
//!
//! DESIGN
//! ======
//! Validation parses with `roxmltree`, a detached XML parser that executes no
//! scripts and fetches no external resources. The check is intentionally
//! shallow: "does the text parse and contain an `svg` element". No schema
//! validation, no namespace enforcement, no sanitization. The live preview
//! binding is the only place validated text touches the page.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

/// Prefix for the download data URI.
pub const DATA_URL_PREFIX: &str = "data:image/svg+xml,";

/// True if `text` parses as an XML document containing an element with local
/// tag name `svg`, at the root or anywhere below it. Pure function of the
/// input; same text always yields the same answer.
///
/// The parse is strict XML, so inputs only a lenient HTML parser would take
/// (e.g. stray text before the first element) count as invalid.
pub fn has_svg_root(text: &str) -> bool {
    roxmltree::Document::parse(text).map_or(false, |doc| {
        doc.descendants()
            .any(|node| node.is_element() && node.tag_name().name() == "svg")
    })
}

/// Acceptance rule for uploaded files: the declared media type must contain
/// the substring `svg` (e.g. `image/svg+xml`). Anything else is silently
/// rejected upstream.
pub fn is_svg_media_type(media_type: &str) -> bool {
    media_type.contains("svg")
}

/// Build a `data:image/svg+xml,...` URI from serialized SVG markup.
///
/// Percent-encodes the UTF-8 bytes with the `encodeURIComponent` unreserved
/// set (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`), so the result matches what the
/// platform encoder would produce for the same string.
pub fn to_data_url(xml: &str) -> String {
    let mut out = String::with_capacity(DATA_URL_PREFIX.len() + xml.len());
    out.push_str(DATA_URL_PREFIX);
    for byte in xml.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(byte)),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
