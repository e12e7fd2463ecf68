/// An opaque RGB triple. The formatter deals in concrete colors only; how
/// they are rendered (ANSI, GUI spans, ...) is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a 6-digit hex color like `55FF55` (no leading `#`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// The 16 legacy colors in code order `0..9, a..f`. Order matters:
/// nearest-color ties resolve to the earliest entry.
pub(crate) const PALETTE: [(char, Rgb); 16] = [
    ('0', Rgb::new(0x00, 0x00, 0x00)), // Black
    ('1', Rgb::new(0x00, 0x00, 0xAA)), // Dark Blue
    ('2', Rgb::new(0x00, 0xAA, 0x00)), // Dark Green
    ('3', Rgb::new(0x00, 0xAA, 0xAA)), // Dark Aqua
    ('4', Rgb::new(0xAA, 0x00, 0x00)), // Dark Red
    ('5', Rgb::new(0xAA, 0x00, 0xAA)), // Dark Purple
    ('6', Rgb::new(0xFF, 0xAA, 0x00)), // Gold
    ('7', Rgb::new(0xAA, 0xAA, 0xAA)), // Gray
    ('8', Rgb::new(0x55, 0x55, 0x55)), // Dark Gray
    ('9', Rgb::new(0x55, 0x55, 0xFF)), // Blue
    ('a', Rgb::new(0x55, 0xFF, 0x55)), // Green
    ('b', Rgb::new(0x55, 0xFF, 0xFF)), // Aqua
    ('c', Rgb::new(0xFF, 0x55, 0x55)), // Red
    ('d', Rgb::new(0xFF, 0x55, 0xFF)), // Light Purple
    ('e', Rgb::new(0xFF, 0xFF, 0x55)), // Yellow
    ('f', Rgb::new(0xFF, 0xFF, 0xFF)), // White
];

/// Color for a legacy color code, case-insensitive. `None` for style and
/// unknown codes.
pub fn color_for_code(code: char) -> Option<Rgb> {
    let code = code.to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, color)| *color)
}

/// The palette code closest to `color` in RGB space. Squared distance orders
/// the same as Euclidean; a strict `<` keeps the first entry on ties.
pub fn nearest_code(color: Rgb) -> char {
    let mut best = PALETTE[0].0;
    let mut best_distance = u32::MAX;
    for (code, candidate) in PALETTE {
        let distance = distance_squared(color, candidate);
        if distance < best_distance {
            best_distance = distance;
            best = code;
        }
    }
    best
}

fn distance_squared(a: Rgb, b: Rgb) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}
