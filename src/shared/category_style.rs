//! Feste Zuordnung Kategorie → Marker-Farbe.

use crate::core::LocationCategory;

/// Farbe für Wandbilder.
pub const COLOR_MURAL: &str = "#FF6B6B";
/// Farbe für Musik-Locations.
pub const COLOR_MUSIC_VENUE: &str = "#4ECDC4";
/// Farbe für Museen.
pub const COLOR_MUSEUM: &str = "#45B7D1";
/// Farbe für historische Orte.
pub const COLOR_HISTORIC_PLACE: &str = "#96CEB4";
/// Farbe für Galerien.
pub const COLOR_GALLERY: &str = "#FFEEAD";
/// Farbe für Theater.
pub const COLOR_THEATER: &str = "#D4A5A5";
/// Standardfarbe (Sonstiges / unbekannt).
pub const COLOR_DEFAULT: &str = "#9B9B9B";

/// Marker-Farbe einer Kategorie (CSS-Hex).
pub fn category_color(category: LocationCategory) -> &'static str {
    match category {
        LocationCategory::Mural => COLOR_MURAL,
        LocationCategory::MusicVenue => COLOR_MUSIC_VENUE,
        LocationCategory::Museum => COLOR_MUSEUM,
        LocationCategory::HistoricPlace => COLOR_HISTORIC_PLACE,
        LocationCategory::Gallery => COLOR_GALLERY,
        LocationCategory::Theater => COLOR_THEATER,
        LocationCategory::Other => COLOR_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_color_except_other() {
        let colors: std::collections::HashSet<_> = LocationCategory::ALL
            .into_iter()
            .filter(|c| *c != LocationCategory::Other)
            .map(category_color)
            .collect();
        assert_eq!(colors.len(), 6);
        assert!(!colors.contains(COLOR_DEFAULT));
        assert_eq!(category_color(LocationCategory::Other), COLOR_DEFAULT);
    }
}
