//! Gear and equipment slots.
//!
//! Gear only ever adds flat deltas to accuracy, attack and defense. The
//! deltas of all equipped items are summed on demand and never cached, so
//! swapping an item is immediately reflected in the next roll.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Equip slot for a gear item. A combatant holds at most one item per slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GearSlot {
    Mic,
    Hoodie,
    Kicks,
}

/// Stat deltas carried by one gear item (or summed over several).
///
/// Values are typically in `[-1, 1]` but are not constrained.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatMods {
    pub attack: f64,
    pub defense: f64,
    pub accuracy: f64,
}

impl StatMods {
    pub const ZERO: Self = Self {
        attack: 0.0,
        defense: 0.0,
        accuracy: 0.0,
    };

    pub fn new(attack: f64, defense: f64, accuracy: f64) -> Self {
        Self {
            attack,
            defense,
            accuracy,
        }
    }
}

impl core::ops::Add for StatMods {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            attack: self.attack + rhs.attack,
            defense: self.defense + rhs.defense,
            accuracy: self.accuracy + rhs.accuracy,
        }
    }
}

impl core::iter::Sum for StatMods {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, mods| acc + mods)
    }
}

/// Immutable gear definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearItem {
    pub id: String,
    pub slot: GearSlot,
    pub name: String,
    pub mods: StatMods,
}

impl GearItem {
    pub fn new(id: impl Into<String>, slot: GearSlot, name: impl Into<String>, mods: StatMods) -> Self {
        Self {
            id: id.into(),
            slot,
            name: name.into(),
            mods,
        }
    }
}

/// Equipped gear, keyed by slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equipment {
    slots: BTreeMap<GearSlot, Arc<GearItem>>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips an item in its own slot, returning the previously equipped item if any.
    pub fn equip(&mut self, item: Arc<GearItem>) -> Option<Arc<GearItem>> {
        self.slots.insert(item.slot, item)
    }

    pub fn get(&self, slot: GearSlot) -> Option<&Arc<GearItem>> {
        self.slots.get(&slot)
    }

    pub fn is_slot_empty(&self, slot: GearSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    /// Equipped items in slot order.
    pub fn items(&self) -> impl Iterator<Item = &Arc<GearItem>> {
        self.slots.values()
    }

    /// Sum of the stat deltas across all equipped items.
    pub fn bonuses(&self) -> StatMods {
        self.slots.values().map(|item| item.mods).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mic(id: &str, accuracy: f64) -> Arc<GearItem> {
        Arc::new(GearItem::new(
            id,
            GearSlot::Mic,
            id,
            StatMods::new(0.0, 0.0, accuracy),
        ))
    }

    #[test]
    fn one_item_per_slot() {
        let mut equipment = Equipment::empty();
        assert!(equipment.equip(mic("old", 0.1)).is_none());

        let replaced = equipment.equip(mic("new", 0.2));
        assert_eq!(replaced.map(|item| item.id.clone()), Some("old".to_string()));
        assert_eq!(equipment.items().count(), 1);
    }

    #[test]
    fn bonuses_sum_across_slots() {
        let mut equipment = Equipment::empty();
        equipment.equip(mic("mic", 0.1));
        equipment.equip(Arc::new(GearItem::new(
            "hoodie",
            GearSlot::Hoodie,
            "Hoodie",
            StatMods::new(0.0, 0.2, -0.05),
        )));

        let bonuses = equipment.bonuses();
        assert!((bonuses.accuracy - 0.05).abs() < 1e-9);
        assert!((bonuses.defense - 0.2).abs() < 1e-9);
        assert_eq!(bonuses.attack, 0.0);
    }

    #[test]
    fn slot_names_parse() {
        assert_eq!("kicks".parse::<GearSlot>(), Ok(GearSlot::Kicks));
        assert_eq!(GearSlot::Hoodie.to_string(), "hoodie");
        assert!("cape".parse::<GearSlot>().is_err());
    }
}
