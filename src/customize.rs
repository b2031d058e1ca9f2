//! Customization Draft
//!
//! In-progress selection of the customization dialog. Exists while the
//! dialog is open and is turned into a `NewLine` when the customer commits.

use std::collections::{BTreeMap, BTreeSet};

use crate::cart::{Choice, Customization, NewLine};
use crate::catalog::{self, NOTE_ATTRIBUTE, UNSPECIFIED};
use crate::models::{GroupKind, MenuItem, OptionGroup};

#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationDraft {
    item: &'static MenuItem,
    quantity: i32,
    singles: BTreeMap<&'static str, &'static str>,
    multiples: BTreeMap<&'static str, BTreeSet<&'static str>>,
    note: String,
}

impl CustomizationDraft {
    /// Fresh draft: quantity 1, nothing selected, empty note
    pub fn open(item: &'static MenuItem) -> Self {
        Self {
            item,
            quantity: 1,
            singles: BTreeMap::new(),
            multiples: BTreeMap::new(),
            note: String::new(),
        }
    }

    pub fn item(&self) -> &'static MenuItem {
        self.item
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    /// Option groups offered for this item
    pub fn groups(&self) -> &'static [OptionGroup] {
        catalog::option_groups(self.item.category)
    }

    fn group(&self, attribute: &str, kind: GroupKind) -> Option<&'static OptionGroup> {
        self.groups()
            .iter()
            .find(|g| g.attribute == attribute && g.kind == kind)
    }

    /// Choose the value of a radio group. Unknown groups/values are ignored.
    pub fn select(&mut self, attribute: &str, value: &str) {
        if let Some(group) = self.group(attribute, GroupKind::Single) {
            if let Some(option) = group.option(value) {
                self.singles.insert(group.attribute, option.value);
            }
        }
    }

    /// Flip a checkbox option. Unknown groups/values are ignored.
    pub fn toggle(&mut self, attribute: &str, value: &str) {
        if let Some(group) = self.group(attribute, GroupKind::Multiple) {
            if let Some(option) = group.option(value) {
                let selected = self.multiples.entry(group.attribute).or_default();
                if !selected.remove(option.value) {
                    selected.insert(option.value);
                }
            }
        }
    }

    pub fn is_selected(&self, attribute: &str, value: &str) -> bool {
        self.singles.get(attribute) == Some(&value)
            || self
                .multiples
                .get(attribute)
                .map(|set| set.contains(value))
                .unwrap_or(false)
    }

    pub fn set_note(&mut self, note: &str) {
        self.note = note.to_string();
    }

    /// Adjust the quantity, never below 1
    pub fn change_quantity(&mut self, delta: i32) {
        self.quantity = self.quantity.saturating_add(delta).max(1);
    }

    /// Surcharges of every selected option
    pub fn surcharges(&self) -> Vec<f64> {
        let mut out = Vec::new();
        for group in self.groups() {
            for option in group.options {
                if self.is_selected(group.attribute, option.value) {
                    out.push(option.surcharge);
                }
            }
        }
        out
    }

    /// Base price plus selected surcharges
    pub fn unit_price(&self) -> f64 {
        self.item.price + self.surcharges().iter().sum::<f64>()
    }

    /// Unit price times quantity, as shown in the dialog
    pub fn final_price(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    /// Selection as stored on the cart line. Untouched radio groups are
    /// recorded as unspecified, empty checkbox groups are left out.
    pub fn customization(&self) -> Customization {
        let mut custom = Customization::new();
        for group in self.groups() {
            match group.kind {
                GroupKind::Single => {
                    let value = self.singles.get(group.attribute).copied().unwrap_or(UNSPECIFIED);
                    custom.insert(group.attribute, Choice::One(value.to_string()));
                }
                GroupKind::Multiple => {
                    let values: Vec<String> = self
                        .multiples
                        .get(group.attribute)
                        .map(|set| set.iter().map(|v| v.to_string()).collect())
                        .unwrap_or_default();
                    custom.insert(group.attribute, Choice::Many(values));
                }
            }
        }
        custom.insert(NOTE_ATTRIBUTE, Choice::One(self.note.clone()));
        custom
    }

    /// What the dialog adds to the cart on commit
    pub fn to_new_line(&self) -> NewLine {
        NewLine {
            title: self.item.title.to_string(),
            base_price: self.item.price,
            quantity: self.quantity,
            customization: self.customization(),
            surcharges: self.surcharges(),
        }
    }
}
