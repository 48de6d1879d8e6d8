use crate::core::{Garment, GarmentId, Outfit, Usage};
use serde::Serialize;
use std::collections::BTreeMap;

/// Rebuild per-garment wear counts from usage records.
pub fn reconstruct_wear_counts(usages: &[Usage]) -> BTreeMap<GarmentId, u32> {
    let mut counts: BTreeMap<GarmentId, u32> = BTreeMap::new();
    for usage in usages {
        let count = counts.entry(usage.garment_id.clone()).or_default();
        *count = count.saturating_add(1);
    }
    counts
}

/// A garment whose stored `wear_count` disagrees with its usage records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WearCountMismatch {
    pub garment_id: GarmentId,
    pub recorded: u32,
    pub reconstructed: u32,
}

/// Compare every garment's stored wear count against the usage records.
///
/// Usages pointing at garments not in `garments` are ignored.
pub fn audit_wear_counts(garments: &[Garment], usages: &[Usage]) -> Vec<WearCountMismatch> {
    let counts = reconstruct_wear_counts(usages);
    garments
        .iter()
        .filter_map(|garment| {
            let reconstructed = counts.get(&garment.id).copied().unwrap_or(0);
            (reconstructed != garment.wear_count).then(|| WearCountMismatch {
                garment_id: garment.id.clone(),
                recorded: garment.wear_count,
                reconstructed,
            })
        })
        .collect()
}

/// Cost divided by wears, `None` for a garment that was never worn.
pub fn cost_per_wear(garment: &Garment) -> Option<f64> {
    (garment.wear_count > 0).then(|| garment.cost / f64::from(garment.wear_count))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeValue {
    pub total_cost: f64,
    pub total_wears: u64,
    /// `None` until at least one garment has been worn.
    pub average_cost_per_wear: Option<f64>,
}

pub fn wardrobe_value(garments: &[Garment]) -> WardrobeValue {
    let total_cost: f64 = garments.iter().map(|garment| garment.cost).sum();
    let total_wears: u64 = garments.iter().map(|garment| u64::from(garment.wear_count)).sum();

    WardrobeValue {
        total_cost,
        total_wears,
        average_cost_per_wear: (total_wears > 0).then(|| total_cost / total_wears as f64),
    }
}

/// The `limit` most recent outfits, newest first. Outfits on the same date
/// keep their input order.
pub fn recent_outfits(outfits: &[Outfit], limit: usize) -> Vec<Outfit> {
    let mut sorted: Vec<&Outfit> = outfits.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(limit).cloned().collect()
}

/// The `limit` garments with the fewest wears. Equal counts keep input order.
pub fn least_worn_garments(garments: &[Garment], limit: usize) -> Vec<Garment> {
    let mut sorted: Vec<&Garment> = garments.iter().collect();
    sorted.sort_by_key(|garment| garment.wear_count);
    sorted.into_iter().take(limit).cloned().collect()
}
