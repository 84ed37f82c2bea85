//! Vibe card presets
//!
//! The preset themes offered on the homepage. Each card links into the
//! moodboard editor.

use serde::Serialize;

/// Number of cards shown on the homepage
pub const VISIBLE_VIBE_CARDS: usize = 3;

/// A preset theme preview card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VibeCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub colors: [&'static str; 5],
    pub images: [&'static str; 5],
}

/// All presets, in display order
pub static VIBE_CARDS: [VibeCard; 4] = [
    VibeCard {
        id: "retro",
        title: "Retro Vibe",
        description: "Bold colors, funky fonts, and vintage cool.",
        colors: ["#90EE90", "#2D5A27", "#696969", "#D2B48C", "#8B4513"],
        images: ["🚗", "🏛️", "👗", "📻", "🎬"],
    },
    VibeCard {
        id: "dreamy",
        title: "Soft & Dreamy",
        description: "Pastels, glow, and cloud-like calm.",
        colors: ["#FFB6C1", "#FFDAB9", "#FFFFE0", "#E6E6FA", "#FF69B4"],
        images: ["☁️", "🌸", "💫", "🌈", "🦋"],
    },
    VibeCard {
        id: "earthy",
        title: "Earthy Tones",
        description: "Warm neutrals, natural textures, and calm vibes.",
        colors: ["#2D5A27", "#8B4513", "#D2B48C", "#696969", "#000000"],
        images: ["🌿", "🍄", "🪵", "🌱", "🪨"],
    },
    VibeCard {
        id: "playful",
        title: "Playful Pop",
        description: "Bright colors, bouncy shapes, and good energy.",
        colors: ["#2D5A27", "#8B4513", "#D2B48C", "#696969", "#FFFF00"],
        images: ["🦆", "🎨", "🎈", "🌈", "⭐"],
    },
];

/// Cards shown on the homepage
pub fn visible_vibe_cards() -> &'static [VibeCard] {
    &VIBE_CARDS[..VISIBLE_VIBE_CARDS]
}

/// Look up a preset by id
pub fn find_vibe_card(id: &str) -> Option<&'static VibeCard> {
    VIBE_CARDS.iter().find(|card| card.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_first_three_are_visible() {
        let ids: Vec<_> = visible_vibe_cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["retro", "dreamy", "earthy"]);
    }

    #[test]
    fn test_find_hidden_card() {
        let card = find_vibe_card("playful").unwrap();
        assert_eq!(card.title, "Playful Pop");
        assert!(find_vibe_card("gothic").is_none());
    }
}
