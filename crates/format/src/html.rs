use crate::palette::{nearest_code, Rgb};

const SPAN_COLOR_PREFIX: &str = "<span style=\"color: #";
const SPAN_CLOSE: &str = "</span>";

/// Converts an HTML MOTD fragment into legacy-coded text.
///
/// The five standard entities (plus `&nbsp;`) are unescaped first. Color
/// span open tags become the legacy code for that color, snapping
/// off-palette values to the nearest of the 16; `</span>` becomes a reset;
/// every other tag is dropped. The result is ready for [`crate::parse`].
pub fn html_to_legacy(html: &str) -> String {
    let unescaped = unescape_entities(html);
    replace_tags(&unescaped)
}

fn unescape_entities(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
}

fn replace_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('>') {
            Some(end) => {
                let tag = &tail[..=end];
                if tag == SPAN_CLOSE {
                    out.push('§');
                    out.push('r');
                } else if let Some(code) = span_color_code(tag) {
                    out.push('§');
                    out.push(code);
                }
                rest = &tail[end + 1..];
            }
            None => {
                // Unterminated '<' is not a tag, keep it as text
                out.push_str(tail);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Legacy code for a `<span style="color: #RRGGBB">` open tag, exact palette
/// hits included (their distance is zero).
fn span_color_code(tag: &str) -> Option<char> {
    let hex = tag
        .strip_prefix(SPAN_COLOR_PREFIX)?
        .strip_suffix("\">")?;
    Rgb::from_hex(hex).map(nearest_code)
}
