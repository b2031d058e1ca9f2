//! Cart Manager
//!
//! Persists the cart snapshot after every mutation. Storage problems and
//! invalid input are logged here and never reach the caller.

use crate::error::{ShopError, ShopResult};
use crate::storage::{self, KeyValueStore};

use super::{Cart, NewLine};

pub struct CartManager<S> {
    store: S,
    key: String,
}

impl CartManager<Box<dyn KeyValueStore>> {
    /// Manager over `localStorage`. With storage disabled the snapshot goes
    /// to a throwaway store and the cart lives in memory only.
    pub fn browser(key: &str) -> Self {
        Self::new(storage::local_or_memory(), key)
    }
}

impl<S: KeyValueStore> CartManager<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Previously saved cart, or an empty one if nothing usable is stored
    pub fn load(&self) -> Cart {
        match self.try_load() {
            Ok(cart) => {
                log::debug!("[CART] Loaded {} lines", cart.len());
                cart
            }
            Err(e) => {
                log::warn!("[CART] {}; starting with an empty cart", e);
                Cart::new()
            }
        }
    }

    fn try_load(&self) -> ShopResult<Cart> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Cart::new());
        };
        if raw.trim().is_empty() {
            return Ok(Cart::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Persist the snapshot; failures are logged only
    pub fn save(&self, cart: &Cart) {
        if let Err(e) = self.try_save(cart) {
            log::error!("[CART] {}", e);
        }
    }

    fn try_save(&self, cart: &Cart) -> ShopResult<()> {
        let json = serde_json::to_string(cart).map_err(|e| ShopError::StorageWrite(e.to_string()))?;
        self.store.set(&self.key, &json)
    }

    /// Returns whether the cart changed
    pub fn add_item(&self, cart: &mut Cart, new: NewLine) -> bool {
        match cart.add_item(new) {
            Ok(line) => {
                log::debug!("[CART] {} x{} @ {}", line.title, line.quantity, line.unit_price);
            }
            Err(e) => {
                log::debug!("[CART] Ignoring add: {}", e);
                return false;
            }
        }
        self.save(cart);
        true
    }

    pub fn change_quantity(&self, cart: &mut Cart, key: &str, delta: i32) -> bool {
        let changed = cart.change_quantity(key, delta);
        if changed {
            self.save(cart);
        }
        changed
    }

    pub fn remove_item(&self, cart: &mut Cart, key: &str) -> bool {
        let removed = cart.remove_item(key);
        if removed {
            self.save(cart);
        }
        removed
    }

    /// Empty the cart and drop the stored snapshot
    pub fn clear(&self, cart: &mut Cart) {
        cart.clear();
        if let Err(e) = self.store.remove(&self.key) {
            log::error!("[CART] {}", e);
        }
    }
}
