use super::DocumentStore;
use crate::core::{
    Garment, GarmentId, Outfit, OutfitId, RecordKind, Result, Usage, UsageId, User, UserId,
    WardrobeError, WardrobeSnapshot,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::{Level, event};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<UserId, User>,
    /// Insertion order is kept so that reads are deterministic
    garments: Vec<Garment>,
    outfits: Vec<Outfit>,
    usages: Vec<Usage>,
}

impl Collections {
    fn garment_mut(&mut self, id: &GarmentId) -> Result<&mut Garment> {
        self.garments
            .iter_mut()
            .find(|garment| &garment.id == id)
            .ok_or_else(|| WardrobeError::not_found(RecordKind::Garment, id.as_str()))
    }

    fn check_wearable(&self, user_id: &UserId, garment_id: &GarmentId) -> Result<()> {
        let garment = self
            .garments
            .iter()
            .find(|garment| &garment.id == garment_id)
            .ok_or_else(|| WardrobeError::not_found(RecordKind::Garment, garment_id.as_str()))?;
        if &garment.user_id != user_id {
            return Err(WardrobeError::invalid_record(
                RecordKind::Garment,
                garment_id.as_str(),
                format!("belongs to user '{}', not '{}'", garment.user_id, user_id),
            ));
        }
        Ok(())
    }

    fn check_outfit_owner(&self, user_id: &UserId, outfit_id: &OutfitId) -> Result<()> {
        let outfit = self
            .outfits
            .iter()
            .find(|outfit| &outfit.id == outfit_id)
            .ok_or_else(|| WardrobeError::not_found(RecordKind::Outfit, outfit_id.as_str()))?;
        if &outfit.user_id != user_id {
            return Err(WardrobeError::invalid_record(
                RecordKind::Outfit,
                outfit_id.as_str(),
                format!("belongs to user '{}', not '{}'", outfit.user_id, user_id),
            ));
        }
        Ok(())
    }

    /// One outfit per user per day, and outfit ids are unique.
    fn check_new_outfit(&self, outfit: &Outfit) -> Result<()> {
        for existing in &self.outfits {
            if existing.id == outfit.id {
                return Err(WardrobeError::invalid_record(
                    RecordKind::Outfit,
                    outfit.id.as_str(),
                    "duplicate id",
                ));
            }
            if existing.user_id == outfit.user_id && existing.date == outfit.date {
                return Err(WardrobeError::invalid_record(
                    RecordKind::Outfit,
                    outfit.id.as_str(),
                    format!("outfit '{}' is already logged on {}", existing.id, outfit.date),
                ));
            }
        }
        Ok(())
    }

    fn record_usage(
        &mut self,
        user_id: &UserId,
        garment_id: &GarmentId,
        outfit_id: Option<&OutfitId>,
        worn_date: NaiveDate,
    ) -> Result<Usage> {
        self.check_wearable(user_id, garment_id)?;
        let garment = self.garment_mut(garment_id)?;
        garment.wear_count = garment.wear_count.saturating_add(1);
        let wear_count = garment.wear_count;

        let usage = Usage {
            id: UsageId::new(Uuid::new_v4().to_string()),
            user_id: user_id.clone(),
            garment_id: garment_id.clone(),
            outfit_id: outfit_id.cloned(),
            worn_date,
        };
        self.usages.push(usage.clone());

        event!(
            Level::DEBUG,
            usage = %usage.id,
            garment = %garment_id,
            wear_count,
            "usage recorded"
        );

        Ok(usage)
    }
}

/// In-memory document store
///
/// All collections sit behind one lock, so recording a usage and bumping
/// the garment's wear count happen together.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an already-loaded snapshot.
    ///
    /// Records are taken as-is; wear counts are not recomputed.
    pub fn from_snapshot(snapshot: WardrobeSnapshot) -> Self {
        let mut collections = Collections::default();
        if let Some(user) = snapshot.user {
            collections.users.insert(user.id.clone(), user);
        }
        collections.garments = snapshot.garments;
        collections.outfits = snapshot.outfits;
        collections.usages = snapshot.usages;

        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Insert or replace a user document
    pub async fn upsert_user(&self, user: User) {
        let mut collections = self.collections.write().await;
        collections.users.insert(user.id.clone(), user);
    }

    pub async fn insert_garment(&self, garment: Garment) -> Result<()> {
        let mut collections = self.collections.write().await;
        if collections.garments.iter().any(|existing| existing.id == garment.id) {
            return Err(WardrobeError::invalid_record(
                RecordKind::Garment,
                garment.id.as_str(),
                "duplicate id",
            ));
        }
        collections.garments.push(garment);
        Ok(())
    }

    pub async fn insert_outfit(&self, outfit: Outfit) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections.check_new_outfit(&outfit)?;
        collections.outfits.push(outfit);
        Ok(())
    }

    pub async fn garment(&self, id: &GarmentId) -> Result<Garment> {
        let collections = self.collections.read().await;
        collections
            .garments
            .iter()
            .find(|garment| &garment.id == id)
            .cloned()
            .ok_or_else(|| WardrobeError::not_found(RecordKind::Garment, id.as_str()))
    }

    /// Record that a garment was worn on `worn_date`.
    ///
    /// This is the only write that increments a garment's `wear_count`.
    pub async fn record_usage(
        &self,
        user_id: &UserId,
        garment_id: &GarmentId,
        outfit_id: Option<&OutfitId>,
        worn_date: NaiveDate,
    ) -> Result<Usage> {
        let mut collections = self.collections.write().await;
        if let Some(outfit_id) = outfit_id {
            collections.check_outfit_owner(user_id, outfit_id)?;
        }
        collections.record_usage(user_id, garment_id, outfit_id, worn_date)
    }

    /// Store an outfit and record a usage for each of its garments.
    ///
    /// Nothing is written unless every garment exists and belongs to the
    /// outfit's user, and the user has no outfit on that day yet. A garment
    /// listed twice is worn once.
    pub async fn log_outfit(&self, outfit: Outfit) -> Result<Vec<Usage>> {
        let mut collections = self.collections.write().await;

        for garment_id in &outfit.garment_ids {
            collections.check_wearable(&outfit.user_id, garment_id)?;
        }
        collections.check_new_outfit(&outfit)?;

        let mut seen = HashSet::new();
        let mut usages = Vec::with_capacity(outfit.garment_ids.len());
        for garment_id in outfit.garment_ids.iter().filter(|id| seen.insert(*id)) {
            usages.push(collections.record_usage(
                &outfit.user_id,
                garment_id,
                Some(&outfit.id),
                outfit.date,
            )?);
        }
        collections.outfits.push(outfit);
        Ok(usages)
    }

    /// Delete an outfit.
    ///
    /// Usages that pointed at it stay (the garments were still worn) but
    /// lose their outfit reference.
    pub async fn delete_outfit(&self, id: &OutfitId) -> Result<Outfit> {
        let mut collections = self.collections.write().await;
        let position = collections
            .outfits
            .iter()
            .position(|outfit| &outfit.id == id)
            .ok_or_else(|| WardrobeError::not_found(RecordKind::Outfit, id.as_str()))?;
        let outfit = collections.outfits.remove(position);

        for usage in collections.usages.iter_mut() {
            if usage.outfit_id.as_ref() == Some(id) {
                usage.outfit_id = None;
            }
        }

        event!(Level::DEBUG, outfit = %id, "outfit deleted");
        Ok(outfit)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn user(&self, id: &UserId) -> Result<Option<User>> {
        let collections = self.collections.read().await;
        Ok(collections.users.get(id).cloned())
    }

    async fn garments(&self, user_id: &UserId) -> Result<Vec<Garment>> {
        let collections = self.collections.read().await;
        Ok(collections
            .garments
            .iter()
            .filter(|garment| &garment.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn outfits(&self, user_id: &UserId) -> Result<Vec<Outfit>> {
        let collections = self.collections.read().await;
        Ok(collections
            .outfits
            .iter()
            .filter(|outfit| &outfit.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn usages(&self, user_id: &UserId) -> Result<Vec<Usage>> {
        let collections = self.collections.read().await;
        Ok(collections
            .usages
            .iter()
            .filter(|usage| &usage.user_id == user_id)
            .cloned()
            .collect())
    }
}
