//! Item seeded into the terminal session.

use stockroom_core::ItemId;
use stockroom_inventory::{Item, Price};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemConfig {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub quantity: i32,
}

impl ItemConfig {
    /// Read `STOCKROOM_ITEM_*`, warning on and defaulting anything missing or
    /// malformed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let id = setting(&lookup, "STOCKROOM_ITEM_ID", ItemId::new(1));
        let name = lookup("STOCKROOM_ITEM_NAME").unwrap_or_else(|| {
            tracing::warn!("STOCKROOM_ITEM_NAME not set; using demo item");
            "Demo item".to_string()
        });
        let price = setting(&lookup, "STOCKROOM_ITEM_PRICE", Price::new(100.into()));
        let quantity = setting(&lookup, "STOCKROOM_ITEM_QUANTITY", 10);

        Self {
            id,
            name,
            price,
            quantity,
        }
    }

    pub fn into_item(self) -> Item {
        Item {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            sold_quantity: 0,
        }
    }
}

fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: core::str::FromStr + core::fmt::Debug,
    T::Err: core::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %raw, error = %e, "invalid setting; using {default:?}");
            default
        }),
        None => {
            tracing::warn!(key, "not set; using {default:?}");
            default
        }
    }
}
