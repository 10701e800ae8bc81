//! Popup-Inhalt eines Markers.

use crate::core::Location;

/// Ein Link im Popup (Ziel + Anzeigetext).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLink {
    pub href: String,
    pub label: String,
}

/// Anzeige-Felder eines Ortes im Karten-Popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub location_id: String,
    pub title: String,
    pub category_label: &'static str,
    pub description: Option<String>,
    pub address: Option<String>,
    pub website: Option<PopupLink>,
    pub phone: Option<PopupLink>,
    /// Routenplaner-Link (nur für platzierbare Orte)
    pub directions_url: Option<String>,
}

impl PopupContent {
    /// Baut den Popup-Inhalt aus einem Ort.
    pub fn from_location(location: &Location) -> Self {
        Self {
            location_id: location.id.clone(),
            title: location.title.clone(),
            category_label: location.category.label(),
            description: non_blank(&location.description),
            address: location.address.as_deref().and_then(non_blank),
            website: location
                .website
                .as_deref()
                .and_then(non_blank)
                .map(|url| PopupLink {
                    href: normalize_website(&url),
                    label: "Visit Website".to_string(),
                }),
            phone: location
                .phone
                .as_deref()
                .and_then(non_blank)
                .and_then(|raw| {
                    phone_href(&raw).map(|href| PopupLink { href, label: raw })
                }),
            directions_url: location
                .position()
                .map(|pos| directions_url(pos.lat, pos.lng)),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Ergänzt `https://`, wenn kein http(s)-Schema angegeben ist.
pub fn normalize_website(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// `tel:`-Link mit US-Vorwahl; `None` wenn keine Ziffern enthalten sind.
pub fn phone_href(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    if digits.starts_with('1') {
        Some(format!("tel:+{digits}"))
    } else {
        Some(format!("tel:+1{digits}"))
    }
}

/// Google-Maps-Routenlink zum Ziel.
pub fn directions_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={lat},{lng}")
}
