pub const GAMES: [(&str, &str); 2] = [("LOTR", "Lord of the Rings"), ("MECCG", "Middle-earth CCG")];

// Per-game facet labels. Keys not listed fall back to a title-cased key.
const LABELS: &[(&str, &[(&str, &str)])] = &[
    (
        "LOTR",
        &[
            ("type", "Card Type"),
            ("subtype", "Subtype"),
            ("kind", "Culture"),
            ("cost", "Twilight Cost"),
            ("attack", "Strength"),
            ("defence", "Vitality"),
            ("set", "Set"),
            ("rarity", "Rarity"),
        ],
    ),
    (
        "MECCG",
        &[
            ("type", "Type"),
            ("subtype", "Class"),
            ("kind", "Alignment"),
            ("cost", "Marshalling Points"),
            ("attack", "Prowess"),
            ("defence", "Body"),
            ("set", "Set"),
            ("rarity", "Rarity"),
        ],
    ),
];

pub fn facet_label(game: &str, key: &str) -> String {
    LABELS
        .iter()
        .find(|(name, _)| *name == game)
        .and_then(|(_, labels)| labels.iter().find(|(label_key, _)| *label_key == key))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(key))
}

pub fn game_name(game: &str) -> &str {
    GAMES
        .iter()
        .find(|(code, _)| *code == game)
        .map(|(_, name)| *name)
        .unwrap_or(game)
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_game_uses_its_labels() {
        assert_eq!(facet_label("LOTR", "kind"), "Culture");
        assert_eq!(facet_label("MECCG", "kind"), "Alignment");
    }

    #[test]
    fn unknown_key_or_game_falls_back_to_title_case() {
        assert_eq!(facet_label("LOTR", "home_site"), "Home Site");
        assert_eq!(facet_label("POKEMON", "rarity"), "Rarity");
    }
}
