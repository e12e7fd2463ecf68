use crate::palette::{color_for_code, Rgb};

/// The in-band formatting marker used by legacy Minecraft text.
pub const SECTION: char = '§';

/// A maximal stretch of identically-styled text. A parsed message is an
/// ordered sequence of runs covering the visible input losslessly; the
/// formatting codes themselves never appear in `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Style {
    color: Rgb,
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
}

impl Style {
    fn plain(color: Rgb) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
        }
    }
}

/// Parses legacy-coded text into styled runs.
///
/// A `§` followed by one code character is consumed without emitting text:
/// color codes (`0`-`9`, `a`-`f`, case-insensitive) change the current color
/// and leave the style flags alone; `l`/`m`/`n`/`o` switch bold,
/// strikethrough, underline and italic on cumulatively; `r` reverts to the
/// fallback color and clears all flags; any other code is skipped with no
/// effect. A `§` at the very end of the input has no code and stays literal.
pub fn parse(text: &str, fallback: Rgb) -> Vec<StyledRun> {
    let mut runs: Vec<StyledRun> = Vec::new();
    let mut style = Style::plain(fallback);

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == SECTION && chars.peek().is_some() {
            let code = chars
                .next()
                .map(|c| c.to_ascii_lowercase())
                .unwrap_or_default();
            if let Some(color) = color_for_code(code) {
                style.color = color;
            } else {
                match code {
                    'l' => style.bold = true,
                    'm' => style.strikethrough = true,
                    'n' => style.underline = true,
                    'o' => style.italic = true,
                    'r' => style = Style::plain(fallback),
                    _ => {}
                }
            }
            continue;
        }
        push_char(&mut runs, ch, style);
    }

    runs
}

/// `None` renders nothing: absent MOTD fields yield an empty sequence.
pub fn parse_opt(text: Option<&str>, fallback: Rgb) -> Vec<StyledRun> {
    text.map(|text| parse(text, fallback)).unwrap_or_default()
}

fn push_char(runs: &mut Vec<StyledRun>, ch: char, style: Style) {
    if let Some(last) = runs.last_mut() {
        let same = last.color == style.color
            && last.bold == style.bold
            && last.italic == style.italic
            && last.underline == style.underline
            && last.strikethrough == style.strikethrough;
        if same {
            last.text.push(ch);
            return;
        }
    }
    runs.push(StyledRun {
        text: ch.to_string(),
        color: style.color,
        bold: style.bold,
        italic: style.italic,
        underline: style.underline,
        strikethrough: style.strikethrough,
    });
}
