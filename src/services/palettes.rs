//! Static color palettes
//!
//! Four hardcoded five-color palettes keyed by theme name. Unknown themes fall
//! back to `warm`.

pub const DEFAULT_THEME: &str = "warm";

pub type Palette = [&'static str; 5];

const WARM: Palette = ["#D2691E", "#CD853F", "#F4A460", "#DEB887", "#BC8F8F"];
const COOL: Palette = ["#4682B4", "#5F9EA0", "#6495ED", "#87CEEB", "#B0C4DE"];
const VINTAGE: Palette = ["#C65500", "#4B5E2E", "#D4AF37", "#F5E6D0", "#2E4E3F"];
const MODERN: Palette = ["#2C3E50", "#34495E", "#7F8C8D", "#BDC3C7", "#ECF0F1"];

/// Every defined theme name
pub const THEMES: [&str; 4] = ["warm", "cool", "vintage", "modern"];

/// Exact lookup; `None` for unknown themes
pub fn find_palette(theme: &str) -> Option<&'static Palette> {
    match theme {
        "warm" => Some(&WARM),
        "cool" => Some(&COOL),
        "vintage" => Some(&VINTAGE),
        "modern" => Some(&MODERN),
        _ => None,
    }
}

/// Lookup with the warm fallback
pub fn palette_for(theme: Option<&str>) -> &'static Palette {
    theme.and_then(find_palette).unwrap_or(&WARM)
}

/// `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
