use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, AggregateRoot, DomainError, Entity, ItemId};
use stockroom_events::Event;

use crate::details::ItemDetails;
use crate::price::Price;

/// A stocked item (typed form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    /// Quantity in stock.
    pub quantity: i32,
    /// Quantity committed by the current order transaction.
    pub sold_quantity: i32,
}

impl Item {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity <= 0
    }

    pub fn to_item_details(&self) -> ItemDetails {
        ItemDetails {
            id: self.id,
            name: self.name.clone(),
            price: self.price.to_string(),
            quantity: self.quantity.to_string(),
            sold_quantity: self.sold_quantity,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Aggregate root: InventoryItem.
///
/// Starts empty; an item is loaded from the store once and afterwards only
/// changes through stock reductions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    id: ItemId,
    item: Option<Item>,
    version: u64,
}

impl InventoryItem {
    /// Create an empty, not-yet-loaded aggregate instance.
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            item: None,
            version: 0,
        }
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn stock(&self) -> i32 {
        self.item.as_ref().map(|item| item.quantity).unwrap_or(0)
    }
}

impl AggregateRoot for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: LoadItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadItem {
    pub item: Item,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReduceStock.
///
/// Availability is the caller's responsibility; the aggregate only rejects
/// amounts that cannot be an order at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceStock {
    pub item_id: ItemId,
    pub quantity: i32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    LoadItem(LoadItem),
    ReduceStock(ReduceStock),
}

/// Event: ItemLoaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLoaded {
    pub item: Item,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockReduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReduced {
    pub item_id: ItemId,
    pub quantity: i32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemLoaded(ItemLoaded),
    StockReduced(StockReduced),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemLoaded(_) => "inventory.item.loaded",
            InventoryEvent::StockReduced(_) => "inventory.item.stock_reduced",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemLoaded(e) => e.occurred_at,
            InventoryEvent::StockReduced(e) => e.occurred_at,
        }
    }
}

impl Aggregate for InventoryItem {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemLoaded(e) => {
                self.id = e.item.id;
                self.item = Some(e.item.clone());
            }
            InventoryEvent::StockReduced(e) => {
                if let Some(item) = self.item.as_mut() {
                    item.quantity -= e.quantity;
                    item.sold_quantity = e.quantity;
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::LoadItem(cmd) => self.handle_load(cmd),
            InventoryCommand::ReduceStock(cmd) => self.handle_reduce(cmd),
        }
    }
}

impl InventoryItem {
    fn handle_load(&self, cmd: &LoadItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.item.is_some() {
            return Err(DomainError::conflict("item already loaded"));
        }
        if cmd.item.id != self.id {
            return Err(DomainError::invariant("item_id mismatch"));
        }
        if cmd.item.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(vec![InventoryEvent::ItemLoaded(ItemLoaded {
            item: cmd.item.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_reduce(&self, cmd: &ReduceStock) -> Result<Vec<InventoryEvent>, DomainError> {
        let Some(item) = self.item.as_ref() else {
            return Err(DomainError::not_found());
        };
        if cmd.item_id != self.id {
            return Err(DomainError::invariant("item_id mismatch"));
        }
        if cmd.quantity < 0 {
            return Err(DomainError::validation("ordered quantity cannot be negative"));
        }
        // `apply` subtracts unchecked; anything that would overflow stops here.
        if item.quantity.checked_sub(cmd.quantity).is_none() {
            return Err(DomainError::validation(format!(
                "ordering {} from a stock of {} overflows",
                cmd.quantity, item.quantity
            )));
        }

        Ok(vec![InventoryEvent::StockReduced(StockReduced {
            item_id: cmd.item_id,
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockroom_events::execute;

    fn test_item(quantity: i32) -> Item {
        Item {
            id: ItemId::new(7),
            name: "Screwdriver".to_string(),
            price: "50.0".parse().unwrap(),
            quantity,
            sold_quantity: 0,
        }
    }

    fn loaded(quantity: i32) -> InventoryItem {
        let mut aggregate = InventoryItem::empty(ItemId::new(7));
        execute(
            &mut aggregate,
            &InventoryCommand::LoadItem(LoadItem {
                item: test_item(quantity),
                occurred_at: Utc::now(),
            }),
        )
        .unwrap();
        aggregate
    }

    fn reduce(quantity: i32) -> InventoryCommand {
        InventoryCommand::ReduceStock(ReduceStock {
            item_id: ItemId::new(7),
            quantity,
            occurred_at: Utc::now(),
        })
    }

    #[test]
    fn load_emits_item_loaded_event() {
        let aggregate = loaded(10);
        assert_eq!(aggregate.version(), 1);
        assert_eq!(aggregate.stock(), 10);
        assert_eq!(aggregate.item().unwrap().name, "Screwdriver");
    }

    #[test]
    fn load_twice_is_a_conflict() {
        let aggregate = loaded(10);
        let err = aggregate
            .handle(&InventoryCommand::LoadItem(LoadItem {
                item: test_item(3),
                occurred_at: Utc::now(),
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn load_rejects_mismatched_id_and_blank_name() {
        let aggregate = InventoryItem::empty(ItemId::new(1));
        let err = aggregate
            .handle(&InventoryCommand::LoadItem(LoadItem {
                item: test_item(3),
                occurred_at: Utc::now(),
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        let aggregate = InventoryItem::empty(ItemId::new(7));
        let mut blank = test_item(3);
        blank.name = "  ".to_string();
        let err = aggregate
            .handle(&InventoryCommand::LoadItem(LoadItem {
                item: blank,
                occurred_at: Utc::now(),
            }))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn reduce_before_load_is_not_found() {
        let aggregate = InventoryItem::empty(ItemId::new(7));
        assert_eq!(aggregate.handle(&reduce(1)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn reduce_records_sold_quantity_of_this_order() {
        let mut aggregate = loaded(10);

        let events = execute(&mut aggregate, &reduce(4)).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "inventory.item.stock_reduced");

        let item = aggregate.item().unwrap();
        assert_eq!(item.quantity, 6);
        assert_eq!(item.sold_quantity, 4);

        execute(&mut aggregate, &reduce(2)).unwrap();
        let item = aggregate.item().unwrap();
        assert_eq!(item.quantity, 4);
        assert_eq!(item.sold_quantity, 2);
        assert_eq!(aggregate.version(), 3);
    }

    #[test]
    fn negative_reduction_is_rejected_without_mutation() {
        let mut aggregate = loaded(10);
        let before = aggregate.clone();

        let err = execute(&mut aggregate, &reduce(-1)).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(aggregate, before);
    }

    #[test]
    fn overflowing_reduction_is_rejected_without_mutation() {
        let mut aggregate = loaded(-2);
        let before = aggregate.clone();

        let err = execute(&mut aggregate, &reduce(i32::MAX)).unwrap_err();

        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("overflows")));
        assert_eq!(aggregate, before);

        // The largest amount that still fits goes through.
        execute(&mut aggregate, &reduce(i32::MAX - 1)).unwrap();
        assert_eq!(aggregate.stock(), i32::MIN);
    }

    #[test]
    fn item_details_round_trip_through_text_form() {
        let item = test_item(10);
        let details = item.to_item_details();
        assert_eq!(Entity::id(&item), &details.id);
        assert_eq!(details.price, "50.0");
        assert_eq!(details.quantity, "10");
        assert_eq!(details.to_item(), item);
    }

    #[test]
    fn events_serialize_with_item_payload() {
        let event = InventoryEvent::StockReduced(StockReduced {
            item_id: ItemId::new(7),
            quantity: 4,
            occurred_at: Utc::now(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["StockReduced"]["item_id"], 7);
        assert_eq!(json["StockReduced"]["quantity"], 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a reduction subtracts exactly the ordered amount.
        #[test]
        fn reduction_subtracts_ordered_amount(stock in 0i32..10_000, ordered in 0i32..10_000) {
            let mut aggregate = loaded(stock);
            execute(&mut aggregate, &reduce(ordered)).unwrap();

            let item = aggregate.item().unwrap();
            prop_assert_eq!(item.quantity, stock - ordered);
            prop_assert_eq!(item.sold_quantity, ordered);
        }

        /// Property: handle is deterministic and never mutates state.
        #[test]
        fn handle_is_pure(stock in 0i32..1_000, ordered in -10i32..1_000) {
            let aggregate = loaded(stock);
            let before = aggregate.clone();
            let cmd = reduce(ordered);

            let first = aggregate.handle(&cmd);
            let second = aggregate.handle(&cmd);

            prop_assert_eq!(first, second);
            prop_assert_eq!(aggregate, before);
        }
    }
}
