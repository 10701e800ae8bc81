//! Einmalige, explizite Initialisierung des Kartenzugangs.

use crate::core::LngLat;
use crate::shared::MapOptions;
use std::fmt;

/// Fehler bei der Karten-Initialisierung.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapInitError {
    #[error("Kein Map-Access-Token konfiguriert (MAPBOX_TOKEN)")]
    MissingToken,
    #[error("Ungültiges Kartenzentrum: [{lng}, {lat}]")]
    InvalidCenter { lng: f64, lat: f64 },
}

/// Validierte Karten-Konfiguration inkl. Access-Token.
///
/// Wird einmal beim Start erzeugt und an den UI-Host übergeben; es gibt keinen
/// globalen, veränderlichen Token-Zustand.
#[derive(Clone)]
pub struct MapAccess {
    token: String,
    style_url: String,
    center: LngLat,
    zoom: f64,
    popup_offset_px: u32,
}

impl MapAccess {
    /// Prüft die Optionen und erzeugt den Kartenzugang.
    pub fn initialize(options: &MapOptions) -> Result<Self, MapInitError> {
        let token = options
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MapInitError::MissingToken)?;

        let [lng, lat] = options.center;
        let center_valid = lng.is_finite()
            && lat.is_finite()
            && (-180.0..=180.0).contains(&lng)
            && (-90.0..=90.0).contains(&lat);
        if !center_valid {
            return Err(MapInitError::InvalidCenter { lng, lat });
        }

        log::info!("Kartenzugang initialisiert (Style: {})", options.style_url);
        Ok(Self {
            token: token.to_string(),
            style_url: options.style_url.clone(),
            center: LngLat { lng, lat },
            zoom: options.initial_zoom,
            popup_offset_px: options.popup_offset_px,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn style_url(&self) -> &str {
        &self.style_url
    }

    pub fn center(&self) -> LngLat {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn popup_offset_px(&self) -> u32 {
        self.popup_offset_px
    }
}

impl fmt::Debug for MapAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapAccess")
            .field("token", &"***")
            .field("style_url", &self.style_url)
            .field("center", &self.center)
            .field("zoom", &self.zoom)
            .finish()
    }
}
