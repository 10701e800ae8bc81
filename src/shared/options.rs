//! Zentrale Konfiguration der Kulturkarte.
//!
//! `AppOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Server ──────────────────────────────────────────────────────────

/// Standard-Bind-Adresse des HTTP-Servers.
pub const SERVER_BIND_ADDRESS: &str = "0.0.0.0";
/// Standard-Port des HTTP-Servers.
pub const SERVER_PORT: u16 = 3000;

// ── Karte ───────────────────────────────────────────────────────────

/// Kartenstil des Providers.
pub const MAP_STYLE_URL: &str = "mapbox://styles/mapbox/streets-v12";
/// Kartenmitte Kansas City (Längengrad, Breitengrad).
pub const MAP_CENTER: [f64; 2] = [-94.5786, 39.0997];
/// Start-Zoomstufe.
pub const MAP_INITIAL_ZOOM: f64 = 12.0;
/// Popup-Versatz zum Marker in Pixeln.
pub const POPUP_OFFSET_PX: u32 = 25;
/// Durchmesser des farbigen Marker-Punkts in Pixeln.
pub const MARKER_DOT_SIZE_PX: u32 = 24;
/// Kantenlänge eines Icon-Markers in Pixeln.
pub const MARKER_ICON_SIZE_PX: u32 = 32;

// ── Store ───────────────────────────────────────────────────────────

/// HTTP-Timeout für Store-Anfragen.
pub const STORE_TIMEOUT_MS: u64 = 10_000;

// ── Zugriffsschutz ──────────────────────────────────────────────────

/// Pfad-Präfix des Admin-Bereichs.
pub const ADMIN_PREFIX: &str = "/admin";
/// Redirect-Ziel ohne Session.
pub const LOGIN_PATH: &str = "/login";
/// Redirect-Ziel ohne Admin-Rolle.
pub const HOME_PATH: &str = "/";
/// Rollenname mit Admin-Rechten.
pub const ADMIN_ROLE: &str = "admin";

// ── Formular ────────────────────────────────────────────────────────

/// Maximale Zeichenanzahl der Beschreibung.
pub const DESCRIPTION_MAX_CHARS: usize = 300;
/// Anzeigedauer der Erfolgsmeldung bevor das Formular geleert wird.
pub const SUCCESS_NOTICE_DELAY_MS: u64 = 3_000;

/// HTTP-Server-Optionen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerOptions {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            bind_address: SERVER_BIND_ADDRESS.to_string(),
            port: SERVER_PORT,
        }
    }
}

/// Karten-Optionen. Ohne `access_token` schlägt die Karten-Initialisierung kontrolliert fehl.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapOptions {
    pub access_token: Option<String>,
    pub style_url: String,
    /// Kartenmitte als [lng, lat]
    pub center: [f64; 2],
    pub initial_zoom: f64,
    pub popup_offset_px: u32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            access_token: None,
            style_url: MAP_STYLE_URL.to_string(),
            center: MAP_CENTER,
            initial_zoom: MAP_INITIAL_ZOOM,
            popup_offset_px: POPUP_OFFSET_PX,
        }
    }
}

/// Zugangsdaten des gehosteten Record-Stores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreOptions {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            timeout_ms: STORE_TIMEOUT_MS,
        }
    }
}

/// Pfade und Rolle des Zugriffsschutzes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccessOptions {
    pub admin_prefix: String,
    pub login_path: String,
    pub home_path: String,
    pub admin_role: String,
}

impl Default for AccessOptions {
    fn default() -> Self {
        Self {
            admin_prefix: ADMIN_PREFIX.to_string(),
            login_path: LOGIN_PATH.to_string(),
            home_path: HOME_PATH.to_string(),
            admin_role: ADMIN_ROLE.to_string(),
        }
    }
}

/// Regeln des Einreichungsformulars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormOptions {
    pub description_max_chars: usize,
    pub success_notice_delay_ms: u64,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            description_max_chars: DESCRIPTION_MAX_CHARS,
            success_notice_delay_ms: SUCCESS_NOTICE_DELAY_MS,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Optionen der Anwendung.
/// Wird als `culture_map.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppOptions {
    pub server: ServerOptions,
    pub map: MapOptions,
    pub store: StoreOptions,
    pub access: AccessOptions,
    pub form: FormOptions,
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("culture_map"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("culture_map.toml")
    }

    /// Überschreibt Secrets und Port aus der Prozess-Umgebung.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Überschreibt Werte aus einer beliebigen Quelle (testbar ohne echte Umgebung).
    ///
    /// Fehlende Secrets werden nur geloggt; der Prozess startet trotzdem.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty("MAPBOX_TOKEN") {
            self.map.access_token = Some(token);
        }
        if let Some(url) = non_empty("SUPABASE_URL") {
            self.store.url = Some(url);
        }
        if let Some(key) = non_empty("SUPABASE_ANON_KEY") {
            self.store.anon_key = Some(key);
        }
        if let Some(port) = non_empty("PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => log::warn!("Ungültiger PORT-Wert {port:?}: {e}"),
            }
        }

        if self.map.access_token.is_none() {
            log::warn!("Karten-Token fehlt (MAPBOX_TOKEN), Karte startet im Fehlerzustand");
        }
        if self.store.url.is_none() || self.store.anon_key.is_none() {
            log::warn!("Store-Zugangsdaten fehlen (SUPABASE_URL / SUPABASE_ANON_KEY)");
        }
    }

    /// Gibt zurück, ob der gehostete Store vollständig konfiguriert ist.
    pub fn has_store_credentials(&self) -> bool {
        self.store.url.is_some() && self.store.anon_key.is_some()
    }
}
