use crate::error::{GearForgeError, GfResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// One equipment variant as exported by the item database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Stamina")]
    pub stamina: i32,
    #[serde(rename = "Hit Rating")]
    pub hit_rating: i32,
    #[serde(rename = "Expertise Rating")]
    pub expertise_rating: i32,
    #[serde(rename = "DPS")]
    pub dps: f64,
    #[serde(rename = "Cost")]
    pub cost: i32,
    #[serde(rename = "SlotInt")]
    pub slot_id: i64,
    /// Variant tag. Only the last two digits are meaningful for ring matching.
    #[serde(rename = "UUID")]
    pub uuid: i64,
}

pub fn load_items<P: AsRef<Path>>(path: P) -> GfResult<Vec<Item>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        GearForgeError::CatalogUnavailable(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    let items = load_items_from_reader(BufReader::new(file))?;
    info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

pub fn load_items_from_reader<R: Read>(reader: R) -> GfResult<Vec<Item>> {
    serde_json::from_reader(reader)
        .map_err(|e| GearForgeError::CatalogUnavailable(format!("Invalid item JSON: {}", e)))
}

/// Items partitioned by slot. Every slot holds at least one item.
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    slots: Vec<Vec<Item>>,
    slot_base: i64,
}

impl SlotCatalog {
    pub fn new(slots: Vec<Vec<Item>>) -> GfResult<Self> {
        Self::with_base(slots, crate::consts::SLOT_BASE)
    }

    pub fn with_base(slots: Vec<Vec<Item>>, slot_base: i64) -> GfResult<Self> {
        if slots.is_empty() {
            return Err(GearForgeError::CatalogUnavailable(
                "catalog has no slots".to_string(),
            ));
        }
        if let Some(slot) = slots.iter().position(|s| s.is_empty()) {
            return Err(GearForgeError::EmptySlot {
                slot,
                slot_id: slot_base + slot as i64,
            });
        }
        Ok(Self { slots, slot_base })
    }

    /// Groups `items` by `slot_id - slot_base`. Items outside the slot window are dropped.
    pub fn from_items(items: Vec<Item>, slot_base: i64, slot_count: usize) -> GfResult<Self> {
        if items.is_empty() {
            return Err(GearForgeError::CatalogUnavailable(
                "No items loaded.".to_string(),
            ));
        }

        let mut slots: Vec<Vec<Item>> = vec![Vec::new(); slot_count];
        let mut skipped = 0usize;

        for item in items {
            let offset = item.slot_id - slot_base;
            if offset >= 0 && (offset as usize) < slot_count {
                slots[offset as usize].push(item);
            } else {
                skipped += 1;
            }
        }

        if skipped > 0 {
            debug!("Ignored {} items outside slots {}..{}", skipped, slot_base, slot_base + slot_count as i64);
        }

        for (i, slot) in slots.iter().enumerate() {
            info!("Slot {} has {} items.", slot_base + i as i64, slot.len());
        }

        Self::with_base(slots, slot_base)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, i: usize) -> &[Item] {
        &self.slots[i]
    }

    pub fn slots(&self) -> &[Vec<Item>] {
        &self.slots
    }

    pub fn slot_sizes(&self) -> Vec<usize> {
        self.slots.iter().map(Vec::len).collect()
    }

    /// Raw `SlotInt` of catalog slot `i`.
    pub fn slot_id(&self, i: usize) -> i64 {
        self.slot_base + i as i64
    }
}
