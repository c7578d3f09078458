/// Terminal glyph for a symbol name. Unknown names get a bullet.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "calendar" => "▦",
        "flag" => "⚑",
        "gear" => "⚙",
        "star" => "★",
        "heart" => "♥",
        "book" => "✎",
        "airplane" => "✈",
        "house" => "⌂",
        "figure.run" => "⚡",
        "graduationcap" => "♛",
        "briefcase" => "▣",
        "music.note" => "♪",
        "camera" => "◉",
        "leaf" => "❦",
        "globe" => "◍",
        "dumbbell" => "⚒",
        "paintbrush" => "✐",
        "gift" => "✚",
        "bell" => "♫",
        "checkmark" => "✔",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::symbol_picker::SYMBOLS;

    #[test]
    fn test_every_pickable_symbol_has_a_glyph() {
        for name in SYMBOLS {
            assert_ne!(glyph(name), "•", "{} has no glyph", name);
        }
        assert_eq!(glyph("nope"), "•");
    }
}
