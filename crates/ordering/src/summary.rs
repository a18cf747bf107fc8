//! Order-summary confirmation screen.

use serde::Serialize;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemDetailsUiState, Price};

use crate::navigation::{Destination, Navigator};

/// Figures derived from the item as it stands after the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub item: Item,
    pub quantity_ordered: i32,
    pub total_price: Price,
}

impl OrderSummary {
    pub fn from_ui_state(ui_state: &ItemDetailsUiState) -> Self {
        let item = ui_state.item();
        let quantity_ordered = item.sold_quantity;
        let total_price = item.price.times(quantity_ordered);
        Self {
            item,
            quantity_ordered,
            total_price,
        }
    }
}

/// Summary-screen handler. Terminal: the only way out is home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummaryFlow {
    item_id: ItemId,
}

impl OrderSummaryFlow {
    pub fn new(item_id: ItemId) -> Self {
        Self { item_id }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn view(&self, ui_state: &ItemDetailsUiState) -> OrderSummaryView {
        if ui_state.item_details.id != self.item_id {
            tracing::warn!(
                expected = %self.item_id,
                actual = %ui_state.item_details.id,
                "summary rendered against a different item"
            );
        }
        let summary = OrderSummary::from_ui_state(ui_state);
        OrderSummaryView {
            title: Destination::ITEM_ORDER_SUMMARY.title,
            can_navigate_back: false,
            quantity_ordered: summary.quantity_ordered.to_string(),
            total_price: summary.total_price.to_string(),
            item: summary.item,
        }
    }

    pub fn go_home<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate_home();
    }
}

/// What the summary screen draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummaryView {
    pub title: &'static str,
    pub can_navigate_back: bool,
    pub item: Item,
    pub quantity_ordered: String,
    pub total_price: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavigationRecorder, NavigationRequest};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn state(price: &str, quantity: i32, sold_quantity: i32) -> ItemDetailsUiState {
        ItemDetailsUiState::from_item(&Item {
            id: ItemId::new(7),
            name: "Screwdriver".to_string(),
            price: price.parse().unwrap(),
            quantity,
            sold_quantity,
        })
    }

    #[test]
    fn total_is_price_times_sold_quantity() {
        let summary = OrderSummary::from_ui_state(&state("100.0", 5, 5));
        assert_eq!(summary.quantity_ordered, 5);
        assert_eq!(summary.total_price.to_string(), "500.0");
    }

    #[test]
    fn view_formats_figures() {
        let view = OrderSummaryFlow::new(ItemId::new(7)).view(&state("19.99", 7, 3));

        assert_eq!(view.title, "Order Summary");
        assert!(!view.can_navigate_back);
        assert_eq!(view.quantity_ordered, "3");
        assert_eq!(view.total_price, "59.97");
        assert_eq!(view.item.quantity, 7);
    }

    #[test]
    fn nothing_sold_totals_zero() {
        let view = OrderSummaryFlow::new(ItemId::new(7)).view(&state("50.0", 10, 0));
        assert_eq!(view.quantity_ordered, "0");
        assert_eq!(view.total_price, "0.0");
    }

    #[test]
    fn home_navigates_without_touching_state() {
        let mut nav = NavigationRecorder::new();
        OrderSummaryFlow::new(ItemId::new(7)).go_home(&mut nav);
        assert_eq!(nav.requests(), &[NavigationRequest::Home]);
    }

    #[test]
    fn view_serializes_for_renderers() {
        let view = OrderSummaryFlow::new(ItemId::new(7)).view(&state("100.0", 0, 5));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["total_price"], "500.0");
        assert_eq!(json["quantity_ordered"], "5");
        assert_eq!(json["item"]["id"], 7);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the total is the exact product of price and sold quantity.
        #[test]
        fn total_is_exact_product(
            mantissa in 0i64..100_000_000_000,
            scale in 0u32..=6,
            sold in 0i32..100_000
        ) {
            let price = Decimal::new(mantissa, scale);
            let ui_state = ItemDetailsUiState::from_item(&Item {
                id: ItemId::new(7),
                name: "Screwdriver".to_string(),
                price: Price::new(price),
                quantity: 0,
                sold_quantity: sold,
            });

            let summary = OrderSummary::from_ui_state(&ui_state);
            let expected = price.checked_mul(Decimal::from(sold)).unwrap();

            prop_assert_eq!(summary.quantity_ordered, sold);
            prop_assert_eq!(summary.total_price.amount(), expected);
        }
    }
}
