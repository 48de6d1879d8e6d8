use crate::core::{GarmentId, Outfit};
use chrono::{Datelike, Month};
use serde::Serialize;
use std::collections::HashMap;

/// Outfits of one month sharing the same garment set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostWornGroup {
    pub signature: String,
    pub count: usize,
    pub representative: Outfit,
}

/// Order-independent identifier of a garment set: ids sorted and joined with `,`.
pub fn outfit_signature(garment_ids: &[GarmentId]) -> String {
    let mut ids: Vec<&str> = garment_ids.iter().map(GarmentId::as_str).collect();
    ids.sort_unstable();
    ids.join(",")
}

/// The most repeated garment combination worn in `month` of `year`.
///
/// Each group keeps the first outfit seen as its representative. When two
/// groups tie on count, the group whose representative comes first in the
/// month's outfits (in input order) wins.
pub fn most_worn_this_month(outfits: &[Outfit], year: i32, month: Month) -> Option<MostWornGroup> {
    let mut groups: Vec<MostWornGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let in_month = outfits
        .iter()
        .filter(|outfit| outfit.date.year() == year && outfit.date.month() == month.number_from_month());

    for outfit in in_month {
        let signature = outfit_signature(&outfit.garment_ids);
        match positions.get(&signature) {
            Some(&position) => groups[position].count += 1,
            None => {
                positions.insert(signature.clone(), groups.len());
                groups.push(MostWornGroup {
                    signature,
                    count: 1,
                    representative: outfit.clone(),
                });
            }
        }
    }

    // Groups are in first-appearance order, so only a strictly larger
    // count may displace the current best.
    groups.into_iter().reduce(|best, group| {
        if group.count > best.count { group } else { best }
    })
}
