mod html;
mod legacy;
mod palette;

pub use html::html_to_legacy;
pub use legacy::{parse, parse_opt, StyledRun, SECTION};
pub use palette::{color_for_code, nearest_code, Rgb};

/// Renders an HTML MOTD fragment into styled runs by bridging it through
/// the legacy code form first.
pub fn parse_html(html: &str, fallback: Rgb) -> Vec<StyledRun> {
    parse(&html_to_legacy(html), fallback)
}
