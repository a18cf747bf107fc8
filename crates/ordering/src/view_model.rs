//! The shared item view-model.

use chrono::Utc;

use stockroom_core::{AggregateRoot, DomainResult, ItemId};
use stockroom_events::{StateHolder, Subscription, execute};
use stockroom_inventory::{
    InventoryCommand, InventoryItem, Item, ItemDetailsUiState, LoadItem, ReduceStock,
};

/// What the order flows need from the item view-model.
pub trait ItemDetailsSource {
    /// Latest committed UI state.
    fn ui_state(&self) -> ItemDetailsUiState;

    /// Stream of committed UI states, starting with the current one.
    fn subscribe(&self) -> Subscription<ItemDetailsUiState>;

    /// Take `ordered` units out of stock and record them as this order's
    /// sold quantity. Callers check availability first.
    fn reduce_quantity_in_stock_by_ordered_quantity(&mut self, ordered: i32) -> DomainResult<()>;
}

/// In-memory view-model over one inventory item.
///
/// Every accepted command republishes the UI state, so subscribers and
/// `ui_state()` readers always see the latest committed item.
#[derive(Debug)]
pub struct ItemDetailsViewModel {
    aggregate: InventoryItem,
    state: StateHolder<ItemDetailsUiState>,
}

impl ItemDetailsViewModel {
    pub fn load(item: Item) -> DomainResult<Self> {
        let mut aggregate = InventoryItem::empty(item.id);
        execute(
            &mut aggregate,
            &InventoryCommand::LoadItem(LoadItem {
                item,
                occurred_at: Utc::now(),
            }),
        )?;

        let state = StateHolder::new(Self::project(&aggregate));
        tracing::debug!(item_id = %aggregate.id(), stock = aggregate.stock(), "item loaded");

        Ok(Self { aggregate, state })
    }

    pub fn item_id(&self) -> ItemId {
        *self.aggregate.id()
    }

    /// Number of committed changes (load included).
    pub fn version(&self) -> u64 {
        self.aggregate.version()
    }

    fn project(aggregate: &InventoryItem) -> ItemDetailsUiState {
        aggregate
            .item()
            .map(ItemDetailsUiState::from_item)
            .unwrap_or_default()
    }
}

impl ItemDetailsSource for ItemDetailsViewModel {
    fn ui_state(&self) -> ItemDetailsUiState {
        self.state.get()
    }

    fn subscribe(&self) -> Subscription<ItemDetailsUiState> {
        self.state.subscribe()
    }

    fn reduce_quantity_in_stock_by_ordered_quantity(&mut self, ordered: i32) -> DomainResult<()> {
        let command = InventoryCommand::ReduceStock(ReduceStock {
            item_id: self.item_id(),
            quantity: ordered,
            occurred_at: Utc::now(),
        });
        execute(&mut self.aggregate, &command)?;

        self.state.set(Self::project(&self.aggregate));
        tracing::debug!(
            item_id = %self.item_id(),
            ordered,
            stock = self.aggregate.stock(),
            version = self.aggregate.version(),
            "stock reduced"
        );
        Ok(())
    }
}
