//! Item records as the UI layer sees them.

use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

use crate::item::Item;
use crate::price::Price;

/// Text-bound form of an [`Item`]: price and quantity are kept as the strings
/// shown in (and typed into) the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub sold_quantity: i32,
}

impl ItemDetails {
    /// Convert to the typed form. Unparsable price or quantity become zero.
    pub fn to_item(&self) -> Item {
        Item {
            id: self.id,
            name: self.name.clone(),
            price: Price::parse_lenient(&self.price),
            quantity: self.quantity.trim().parse().unwrap_or(0),
            sold_quantity: self.sold_quantity,
        }
    }
}

/// Observable state published by the item view-model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetailsUiState {
    pub out_of_stock: bool,
    pub item_details: ItemDetails,
}

impl ItemDetailsUiState {
    pub fn from_item(item: &Item) -> Self {
        Self {
            out_of_stock: item.is_out_of_stock(),
            item_details: item.to_item_details(),
        }
    }

    pub fn item(&self) -> Item {
        self.item_details.to_item()
    }
}
