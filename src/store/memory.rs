//! In-Memory-Store für Tests, lokale Entwicklung und den Betrieb ohne
//! konfigurierte Store-Zugangsdaten.

use super::{LocationQuery, RecordStore, StoreError, StoreResult};
use crate::core::{Location, LocationCategory, Profile, Session, SubmissionInput, SubmissionRecord};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    locations: Vec<Location>,
    submissions: Vec<SubmissionRecord>,
    /// Access-Token → Session
    sessions: HashMap<String, Session>,
    profiles: HashMap<String, Profile>,
}

/// Tabellen im Speicher hinter einem async `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    /// Simuliert einen nicht erreichbaren Store
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Leerer Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store mit einigen Orten in Kansas City (lokaler Betrieb ohne Backend).
    pub fn seeded() -> Self {
        let base = Utc::now();
        let demo = [
            (
                "nelson-atkins",
                "Nelson-Atkins Museum of Art",
                LocationCategory::Museum,
                Some((39.0453, -94.5810)),
                "4525 Oak St, Kansas City, MO",
            ),
            (
                "jazz-museum",
                "American Jazz Museum",
                LocationCategory::Museum,
                Some((39.0911, -94.5616)),
                "1616 E 18th St, Kansas City, MO",
            ),
            (
                "blue-room",
                "The Blue Room",
                LocationCategory::MusicVenue,
                Some((39.0912, -94.5619)),
                "1600 E 18th St, Kansas City, MO",
            ),
            (
                "union-station",
                "Union Station",
                LocationCategory::HistoricPlace,
                Some((39.0849, -94.5857)),
                "30 W Pershing Rd, Kansas City, MO",
            ),
            (
                "folly-theater",
                "Folly Theater",
                LocationCategory::Theater,
                Some((39.0992, -94.5809)),
                "300 W 12th St, Kansas City, MO",
            ),
            (
                "crossroads",
                "Crossroads Arts District",
                LocationCategory::Gallery,
                Some((39.0893, -94.5814)),
                "Crossroads, Kansas City, MO",
            ),
            (
                "alley-mural",
                "Crossroads Alley Mural",
                LocationCategory::Mural,
                None,
                "W 19th St, Kansas City, MO",
            ),
        ];

        let locations = demo
            .into_iter()
            .enumerate()
            .map(|(i, (id, title, category, coords, address))| {
                let mut location = Location::new(
                    id,
                    title,
                    category,
                    coords.map(|(lat, _)| lat),
                    coords.map(|(_, lng)| lng),
                );
                location.address = Some(address.to_string());
                location.created_at = base - Duration::days(i as i64);
                location.updated_at = location.created_at;
                location
            })
            .collect();
        Self::new().with_locations(locations)
    }

    /// Ersetzt die Orte-Tabelle.
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.tables.get_mut().locations = locations;
        self
    }

    /// Registriert ein gültiges Access-Token.
    pub fn with_session(mut self, access_token: &str, user_id: &str) -> Self {
        self.tables.get_mut().sessions.insert(
            access_token.to_string(),
            Session {
                user_id: user_id.to_string(),
            },
        );
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.tables
            .get_mut()
            .profiles
            .insert(profile.id.clone(), profile);
        self
    }

    /// Schaltet den simulierten Ausfall ein oder aus.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Alle gespeicherten Einreichungen (Reihenfolge des Eingangs).
    pub async fn submissions(&self) -> Vec<SubmissionRecord> {
        self.tables.read().await.submissions.clone()
    }

    /// Ersetzt die Orte zur Laufzeit.
    pub async fn replace_locations(&self, locations: Vec<Location>) {
        self.tables.write().await.locations = locations;
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("In-Memory-Store deaktiviert".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn select_locations(&self, query: &LocationQuery) -> StoreResult<Vec<Location>> {
        self.check_available()?;
        let tables = self.tables.read().await;
        let mut rows: Vec<Location> = tables
            .locations
            .iter()
            .filter(|l| query.matches(l))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_submission(&self, input: &SubmissionInput) -> StoreResult<SubmissionRecord> {
        self.check_available()?;
        let record =
            SubmissionRecord::from_input(uuid::Uuid::new_v4().to_string(), input, Utc::now());
        self.tables.write().await.submissions.push(record.clone());
        log::debug!("Einreichung '{}' gespeichert ({})", record.name, record.id);
        Ok(record)
    }

    async fn resolve_session(&self, access_token: &str) -> StoreResult<Option<Session>> {
        self.check_available()?;
        Ok(self.tables.read().await.sessions.get(access_token).cloned())
    }

    async fn find_profile(&self, user_id: &str) -> StoreResult<Option<Profile>> {
        self.check_available()?;
        Ok(self.tables.read().await.profiles.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReviewStatus;

    fn input(name: &str) -> SubmissionInput {
        SubmissionInput {
            name: name.to_string(),
            category: LocationCategory::Mural,
            description: "Bunte Wand".to_string(),
            website: None,
            photo_url: None,
            address: None,
            latitude: None,
            longitude: None,
            submitted_by: None,
            contact_email: None,
        }
    }

    #[tokio::test]
    async fn select_filters_by_category_and_sorts_newest_first() {
        let store = MemoryStore::seeded();

        let museums = store
            .select_locations(&LocationQuery::category(LocationCategory::Museum))
            .await
            .unwrap();
        let ids: Vec<_> = museums.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["nelson-atkins", "jazz-museum"]);

        let all = store.select_locations(&LocationQuery::all()).await.unwrap();
        assert_eq!(all.len(), 7);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn insert_creates_pending_record_with_fresh_id() {
        let store = MemoryStore::new();
        let first = store.insert_submission(&input("A")).await.unwrap();
        let second = store.insert_submission(&input("B")).await.unwrap();

        assert_eq!(first.status, ReviewStatus::Pending);
        assert_ne!(first.id, second.id);
        assert_eq!(store.submissions().await.len(), 2);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = MemoryStore::seeded().with_session("tok", "u1");
        store.set_unavailable(true);

        assert!(matches!(
            store.select_locations(&LocationQuery::all()).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.insert_submission(&input("A")).await.is_err());
        assert!(store.resolve_session("tok").await.is_err());
    }

    #[tokio::test]
    async fn sessions_and_profiles_resolve() {
        let store = MemoryStore::new()
            .with_session("tok", "u1")
            .with_profile(Profile::with_role("u1", Some("admin")));

        let session = store.resolve_session("tok").await.unwrap().unwrap();
        assert_eq!(session.user_id, "u1");
        assert!(store.resolve_session("other").await.unwrap().is_none());
        let profile = store.find_profile("u1").await.unwrap().unwrap();
        assert!(profile.has_role("admin"));
    }
}
