//! Bloom-season lookup table and flower-id normalization.
//!
//! Catalog ids look like `species[-subtype][-colorcode]`, e.g. `rose-pk` or
//! `iris-sanguinea`. The season table is keyed by the id with any trailing
//! color code removed.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Two-letter tokens denoting flower color, only ever the final `-` segment.
const COLOR_CODES: [&str; 12] = [
    "ll", "pk", "rd", "wh", "yl", "pu", "bl", "or", "gr", "cr", "be", "iv",
];

/// Species key -> season label, `"<SeasonName(s)> <MM-MM>"`.
static SEASON_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("marguerite-daisy", "Spring/Summer 03-08"),
        ("bouvardia", "Spring/Summer 03-08"),
        ("alstroemeria-spp", "All Season 01-12"),
        ("rose", "All Season 01-12"),
        ("tulip", "Spring 03-05"),
        ("gerbera-daisy", "All Season 01-12"),
        ("lily", "Summer 06-08"),
        ("carnation", "All Season 01-12"),
        ("dahlia", "Summer/Fall 06-11"),
        ("peony", "Spring 03-05"),
        ("garden-peony", "Spring 03-05"),
        ("iris", "Spring 03-05"),
        ("iris-sanguinea", "Spring 03-05"),
        ("anemone", "Spring 03-05"),
        ("anemone-coronaria", "Spring 03-05"),
        ("ranunculus", "Spring 03-05"),
        ("ranunculus-asiaticus", "Spring 03-05"),
        ("gladiolus", "Summer 06-08"),
        ("gladiolus-hortulanus", "Summer 06-08"),
        ("freesia", "Spring 03-05"),
        ("freesia-refracta", "Spring 03-05"),
        ("lisianthus", "All Season 01-12"),
        ("stock-flower", "Spring/Summer 03-08"),
        ("scabiosa", "Summer/Fall 06-11"),
        ("cockscomb", "Summer/Fall 06-11"),
        ("cotton-plant", "Fall 09-11"),
        ("drumstick-flower", "Summer/Fall 06-11"),
        ("gentiana", "Fall 09-11"),
        ("gentiana-andrewsii", "Fall 09-11"),
        ("zinnia-elegans", "Summer/Fall 06-11"),
        ("tagetes-erecta", "Summer/Fall 06-11"),
        ("veronica-spicata", "Summer/Fall 06-11"),
        ("lathyrus-odoratus", "Spring/Summer 03-08"),
        ("cymbidium-spp", "Winter/Spring 12-05"),
        ("hydrangea", "Summer 06-08"),
        ("astilbe", "Summer 06-08"),
        ("astilbe-japonica", "Summer 06-08"),
        ("anthurium", "All Season 01-12"),
        ("anthurium-andraeanum", "All Season 01-12"),
        ("babys-breath", "Spring/Summer 03-08"),
        ("oxypetalum", "Spring/Summer 03-08"),
        ("oxypetalum-coeruleum", "Spring/Summer 03-08"),
        ("iberis", "Spring 03-05"),
        ("iberis-sempervirens", "Spring 03-05"),
        ("ammi-majus", "Summer 06-08"),
        ("globe-amaranth", "Summer/Fall 06-11"),
        ("dianthus-caryophyllus", "All Season 01-12"),
        ("helianthus-annuus", "Summer/Fall 06-11"),
        ("phalaenopsis-aphrodite", "All Season 01-12"),
        ("eucalyptus-spp", "All Season 01-12"),
        ("callistephus-chinensis", "Summer/Fall 06-11"),
        ("spiraea-prunifolia", "Spring 03-05"),
        ("zantedeschia-aethiopica", "Spring/Summer 03-08"),
        ("campanula-medium", "Spring/Summer 03-08"),
        ("allium-cowanii", "Spring 03-05"),
        ("clematis-florida", "Spring/Summer 03-08"),
    ])
});

/// Reduce a raw flower id to its canonical species key.
///
/// Drops a trailing color-code segment when one is present, then strips a
/// trailing period (botanical ids appear upstream both as `cymbidium-spp`
/// and `cymbidium-spp.`). Never fails; unrecognized shapes pass through
/// unchanged.
pub fn normalize(flower_id: &str) -> String {
    let parts: Vec<&str> = flower_id.split('-').collect();
    let base = match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() && COLOR_CODES.contains(last) => rest.join("-"),
        _ => flower_id.to_string(),
    };
    match base.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => base,
    }
}

/// Season label for a canonical species key, `None` when the species has no
/// season data.
pub fn lookup(key: &str) -> Option<&'static str> {
    SEASON_TABLE.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_suffix_stripped() {
        assert_eq!(normalize("rose-pk"), "rose");
        assert_eq!(normalize("gerbera-daisy-yl"), "gerbera-daisy");
        assert_eq!(normalize("iris-sanguinea-bl"), "iris-sanguinea");
    }

    #[test]
    fn test_non_color_suffix_kept() {
        assert_eq!(normalize("marguerite-daisy"), "marguerite-daisy");
        assert_eq!(normalize("anemone-coronaria"), "anemone-coronaria");
    }

    #[test]
    fn test_single_segment_unchanged() {
        assert_eq!(normalize("rose"), "rose");
        assert_eq!(normalize("tulip"), "tulip");
    }

    #[test]
    fn test_trailing_period_stripped() {
        assert_eq!(normalize("alstroemeria-spp."), "alstroemeria-spp");
        assert_eq!(normalize("cymbidium-spp."), "cymbidium-spp");
    }

    #[test]
    fn test_lookup_known_species() {
        assert_eq!(lookup("tulip"), Some("Spring 03-05"));
        assert_eq!(lookup("rose"), Some("All Season 01-12"));
        assert_eq!(lookup("cotton-plant"), Some("Fall 09-11"));
    }

    #[test]
    fn test_lookup_unknown_species() {
        assert_eq!(lookup("unknown-species"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_normalized_period_variant_resolves() {
        assert_eq!(
            lookup(&normalize("alstroemeria-spp.")),
            Some("All Season 01-12")
        );
    }
}
