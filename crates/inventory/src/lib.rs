//! Inventory domain module.
//!
//! Item records in their typed and UI-facing forms, prices, and the
//! event-sourced `InventoryItem` aggregate that owns stock reduction. Pure
//! domain logic: no IO, no UI toolkit.

pub mod details;
pub mod item;
pub mod price;

pub use details::{ItemDetails, ItemDetailsUiState};
pub use item::{
    InventoryCommand, InventoryEvent, InventoryItem, Item, ItemLoaded, LoadItem, ReduceStock,
    StockReduced,
};
pub use price::Price;
