//! Cart State
//!
//! Cart lines keyed by title + customization, and the derived totals.
//! The total is never cached; it is recomputed from the lines on demand.

mod customization;
mod manager;

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};

pub use customization::{line_key, Choice, Customization};
pub use manager::CartManager;

/// One purchasable configuration of a menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Derived from title + customization, re-derived on load
    #[serde(skip)]
    pub key: String,
    pub title: String,
    pub quantity: i32,
    /// Fixed at add time. Older snapshots stored it as `finalPrice`.
    #[serde(alias = "finalPrice")]
    pub unit_price: f64,
    #[serde(default)]
    pub customization: Customization,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Request to add an item to the cart
#[derive(Debug, Clone, PartialEq)]
pub struct NewLine {
    pub title: String,
    pub base_price: f64,
    pub quantity: i32,
    pub customization: Customization,
    /// Surcharges of the selected options
    pub surcharges: Vec<f64>,
}

impl NewLine {
    pub fn new(title: impl Into<String>, base_price: f64, quantity: i32) -> Self {
        Self {
            title: title.into(),
            base_price,
            quantity,
            customization: Customization::new(),
            surcharges: Vec::new(),
        }
    }

    pub fn customization(mut self, customization: Customization) -> Self {
        self.customization = customization;
        self
    }

    pub fn surcharge(mut self, amount: f64) -> Self {
        self.surcharges.push(amount);
        self
    }

    /// Base price plus surcharges, rejecting anything that is not a
    /// finite non-negative amount
    pub fn unit_price(&self) -> ShopResult<f64> {
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(ShopError::InvalidInput(format!("base price {}", self.base_price)));
        }
        if let Some(bad) = self.surcharges.iter().find(|s| !s.is_finite() || **s < 0.0) {
            return Err(ShopError::InvalidInput(format!("surcharge {}", bad)));
        }
        let unit = self.base_price + self.surcharges.iter().sum::<f64>();
        if !unit.is_finite() {
            return Err(ShopError::InvalidInput("unit price overflow".to_string()));
        }
        Ok(unit)
    }
}

/// Ordered set of cart lines with unique keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<serde_json::Value>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, key: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Add a line, or bump the quantity of the line with the same key.
    /// An existing line keeps the unit price it was added with.
    pub fn add_item(&mut self, new: NewLine) -> ShopResult<&CartLine> {
        if new.quantity < 1 {
            return Err(ShopError::InvalidInput(format!("quantity {}", new.quantity)));
        }
        let unit_price = new.unit_price()?;
        let key = line_key(&new.title, &new.customization);

        let idx = match self.lines.iter().position(|line| line.key == key) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(new.quantity);
                idx
            }
            None => {
                self.lines.push(CartLine {
                    key,
                    title: new.title,
                    quantity: new.quantity,
                    unit_price,
                    customization: new.customization,
                });
                self.lines.len() - 1
            }
        };
        Ok(&self.lines[idx])
    }

    /// Add `delta` to a line's quantity, removing it at zero or below.
    /// Returns whether the cart changed.
    pub fn change_quantity(&mut self, key: &str, delta: i32) -> bool {
        let Some(idx) = self.lines.iter().position(|line| line.key == key) else {
            return false;
        };
        let before = self.lines[idx].quantity;
        let quantity = before.saturating_add(delta);
        if quantity <= 0 {
            self.lines.remove(idx);
            return true;
        }
        self.lines[idx].quantity = quantity;
        quantity != before
    }

    /// Returns whether a line was removed
    pub fn remove_item(&mut self, key: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.key != key);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ unit price × quantity
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Σ quantity, widened so saturated lines cannot overflow the sum
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| i64::from(line.quantity)).sum()
    }
}

impl From<Vec<CartLine>> for Cart {
    /// Rebuild from stored lines: re-derive keys, drop lines that break the
    /// quantity/price invariants, merge lines that collide on key
    fn from(stored: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for mut line in stored {
            if line.quantity < 1 || !line.unit_price.is_finite() || line.unit_price < 0.0 {
                log::debug!("[CART] Dropping stored line {:?} (qty {}, price {})", line.title, line.quantity, line.unit_price);
                continue;
            }
            line.customization = line.customization.normalized();
            line.key = line_key(&line.title, &line.customization);
            match cart.lines.iter_mut().find(|l| l.key == line.key) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => cart.lines.push(line),
            }
        }
        cart
    }
}

impl From<Vec<serde_json::Value>> for Cart {
    /// Parse stored lines one by one so a single unreadable line does not
    /// discard the rest of the snapshot
    fn from(stored: Vec<serde_json::Value>) -> Self {
        let lines = stored
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<CartLine>(raw) {
                Ok(line) => Some(line),
                Err(e) => {
                    log::debug!("[CART] Dropping unreadable stored line: {}", e);
                    None
                }
            })
            .collect::<Vec<_>>();
        Cart::from(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mild() -> Customization {
        Customization::new().with_one("spiciness", "mild")
    }

    fn hot() -> Customization {
        Customization::new().with_one("spiciness", "hot")
    }

    fn recomputed_total(cart: &Cart) -> f64 {
        cart.lines().iter().map(|l| l.unit_price * l.quantity as f64).sum()
    }

    #[test]
    fn test_same_customization_merges() {
        let mut cart = Cart::new();
        cart.add_item(NewLine::new("Pad Thai", 60.0, 1).customization(mild())).unwrap();
        cart.add_item(NewLine::new("Pad Thai", 60.0, 1).customization(mild())).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), 120.0);
    }

    #[test]
    fn test_different_customization_splits() {
        let mut cart = Cart::new();
        cart.add_item(NewLine::new("Pad Thai", 60.0, 1).customization(mild())).unwrap();
        cart.add_item(NewLine::new("Pad Thai", 60.0, 1).customization(hot())).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 120.0);
    }

    #[test]
    fn test_surcharge_added_to_unit_price() {
        let mut cart = Cart::new();
        let added = cart
            .add_item(
                NewLine::new("Kaprao", 50.0, 3)
                    .customization(Customization::new().with_many("addon", ["fried egg"]))
                    .surcharge(10.0),
            )
            .unwrap();

        assert_eq!(added.unit_price, 60.0);
        assert_eq!(added.subtotal(), 180.0);
        assert_eq!(cart.total(), 180.0);
    }

    #[test]
    fn test_merge_keeps_original_unit_price() {
        let mut cart = Cart::new();
        cart.add_item(NewLine::new("Cha Yen", 35.0, 1)).unwrap();
        // Catalog price changed after the first add
        cart.add_item(NewLine::new("Cha Yen", 40.0, 2)).unwrap();

        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 3);
        assert_eq!(line.unit_price, 35.0);
        assert_eq!(cart.total(), 105.0);
    }

    #[test]
    fn test_note_participates_in_identity() {
        let mut cart = Cart::new();
        let no_veg = Customization::new().with_one("note", "no vegetables");
        let extra_lime = Customization::new().with_one("note", "extra lime");
        cart.add_item(NewLine::new("Som Tum", 45.0, 1).customization(no_veg.clone())).unwrap();
        cart.add_item(NewLine::new("Som Tum", 45.0, 1).customization(extra_lime)).unwrap();
        cart.add_item(NewLine::new("Som Tum", 45.0, 1).customization(no_veg)).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut cart = Cart::new();
        assert!(cart.add_item(NewLine::new("Pad Thai", 60.0, 0)).is_err());
        assert!(cart.add_item(NewLine::new("Pad Thai", 60.0, -2)).is_err());
        assert!(cart.add_item(NewLine::new("Pad Thai", f64::NAN, 1)).is_err());
        assert!(cart.add_item(NewLine::new("Pad Thai", f64::INFINITY, 1)).is_err());
        assert!(cart.add_item(NewLine::new("Pad Thai", -1.0, 1)).is_err());
        assert!(cart.add_item(NewLine::new("Pad Thai", 60.0, 1).surcharge(f64::NAN)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_to_zero_removes() {
        let mut cart = Cart::new();
        let key = cart.add_item(NewLine::new("Pad Thai", 60.0, 2)).unwrap().key.clone();

        assert!(cart.change_quantity(&key, 1));
        assert_eq!(cart.get(&key).map(|l| l.quantity), Some(3));

        assert!(cart.change_quantity(&key, -3));
        assert!(cart.get(&key).is_none());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_change_quantity_below_zero_removes() {
        let mut cart = Cart::new();
        let key = cart.add_item(NewLine::new("Pad Thai", 60.0, 2)).unwrap().key.clone();
        cart.add_item(NewLine::new("Cha Yen", 35.0, 1)).unwrap();

        cart.change_quantity(&key, -5);
        assert!(cart.get(&key).is_none());
        assert_eq!(cart.total(), 35.0);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(NewLine::new("Pad Thai", 60.0, 1)).unwrap();

        assert!(!cart.change_quantity("missing", 3));
        assert!(!cart.remove_item("missing"));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let key = cart.add_item(NewLine::new("Pad Thai", 60.0, 4)).unwrap().key.clone();
        assert!(cart.remove_item(&key));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_total_matches_recomputation_over_op_sequence() {
        let titles = ["Pad Thai", "Tom Yum", "Cha Yen"];
        let mut cart = Cart::new();
        let mut seed: u32 = 7;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as i32
        };

        for _ in 0..200 {
            let title = titles[(next() % 3) as usize];
            match next() % 3 {
                0 => {
                    let qty = next() % 4; // 0 is rejected
                    let _ = cart.add_item(NewLine::new(title, 10.0 + (next() % 50) as f64, qty));
                }
                1 => {
                    if let Some(key) = cart.lines().first().map(|l| l.key.clone()) {
                        cart.change_quantity(&key, next() % 7 - 3);
                    }
                }
                _ => {
                    if let Some(key) = cart.lines().last().map(|l| l.key.clone()) {
                        cart.remove_item(&key);
                    }
                }
            }
            assert_eq!(cart.total(), recomputed_total(&cart));
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        }
    }

    #[test]
    fn test_saturated_quantity_stays_put() {
        let mut cart = Cart::new();
        let key = cart.add_item(NewLine::new("Pad Thai", 60.0, i32::MAX)).unwrap().key.clone();
        assert!(!cart.change_quantity(&key, 1));
        assert!(!cart.change_quantity(&key, 0));
        assert_eq!(cart.get(&key).map(|l| l.quantity), Some(i32::MAX));
        assert!(cart.change_quantity(&key, -1));
    }

    #[test]
    fn test_item_count_does_not_overflow() {
        let mut cart = Cart::new();
        cart.add_item(NewLine::new("Pad Thai", 60.0, i32::MAX)).unwrap();
        cart.add_item(NewLine::new("Cha Yen", 35.0, 1)).unwrap();
        assert_eq!(cart.item_count(), i64::from(i32::MAX) + 1);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }
}
