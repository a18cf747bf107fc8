//! Order-quantity entry screen.

use serde::Serialize;

use stockroom_core::ItemId;
use stockroom_inventory::{Item, ItemDetailsUiState};

use crate::error::{OrderError, OrderResult};
use crate::navigation::{Destination, Navigator};
use crate::quantity::QuantityField;
use crate::view_model::ItemDetailsSource;

pub const INVALID_QUANTITY_MESSAGE: &str = "Input Quantity was greater than quantity in stock";

/// The authoritative availability check.
pub fn validate_order_quantity(requested: i32, in_stock: i32) -> OrderResult<()> {
    if requested > in_stock {
        return Err(OrderError::InvalidOrderQuantity {
            requested,
            in_stock,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stock was reduced and the summary requested.
    Placed { item_id: ItemId, quantity: i32 },
    /// More than in stock; the error banner is now showing.
    Rejected { requested: i32, in_stock: i32 },
    /// Nothing orderable was entered (or the button was disabled).
    Ignored,
}

/// Entry-screen state. One instance per visit to the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderEntryFlow {
    field: QuantityField,
    invalid_order: bool,
}

impl OrderEntryFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self) -> &QuantityField {
        &self.field
    }

    pub fn is_invalid_order(&self) -> bool {
        self.invalid_order
    }

    pub fn on_quantity_change(&mut self, text: impl Into<String>) {
        self.field.set_text(text);
    }

    pub fn on_focus_changed(&mut self, is_focused: bool) {
        self.field.on_focus_changed(is_focused);
    }

    /// Whether the place-order button is enabled. A UI affordance only;
    /// [`submit`](Self::submit) re-checks against stock.
    pub fn is_place_order_enabled(&self, ui_state: &ItemDetailsUiState) -> bool {
        self.field.input().affordance_value() > 0 && !ui_state.out_of_stock
    }

    /// Validate the entered quantity and, if it fits in stock, place the order.
    pub fn submit<V, N>(&mut self, view_model: &mut V, navigator: &mut N) -> OrderResult<SubmitOutcome>
    where
        V: ItemDetailsSource + ?Sized,
        N: Navigator + ?Sized,
    {
        let Some(requested) = self.field.input().ordered_quantity() else {
            tracing::debug!(text = self.field.input().raw(), "submit ignored: no orderable quantity");
            return Ok(SubmitOutcome::Ignored);
        };

        let item = view_model.ui_state().item();
        match validate_order_quantity(requested, item.quantity) {
            Ok(()) => {}
            Err(OrderError::InvalidOrderQuantity {
                requested,
                in_stock,
            }) => {
                self.invalid_order = true;
                tracing::info!(item_id = %item.id, requested, in_stock, "order rejected: quantity exceeds stock");
                return Ok(SubmitOutcome::Rejected {
                    requested,
                    in_stock,
                });
            }
            Err(e) => return Err(e),
        }

        view_model.reduce_quantity_in_stock_by_ordered_quantity(requested)?;
        navigator.navigate_to_order_summary(item.id);
        tracing::info!(item_id = %item.id, quantity = requested, "order placed");

        Ok(SubmitOutcome::Placed {
            item_id: item.id,
            quantity: requested,
        })
    }

    /// Place-order button handler: a disabled button does nothing.
    pub fn press_place_order<V, N>(
        &mut self,
        view_model: &mut V,
        navigator: &mut N,
    ) -> OrderResult<SubmitOutcome>
    where
        V: ItemDetailsSource + ?Sized,
        N: Navigator + ?Sized,
    {
        if !self.is_place_order_enabled(&view_model.ui_state()) {
            tracing::debug!(text = self.field.input().raw(), "place order pressed while disabled");
            return Ok(SubmitOutcome::Ignored);
        }
        self.submit(view_model, navigator)
    }

    pub fn cancel<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.navigate_back();
    }

    pub fn dismiss_error(&mut self) {
        self.invalid_order = false;
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.invalid_order.then_some(INVALID_QUANTITY_MESSAGE)
    }

    pub fn view(&self, ui_state: &ItemDetailsUiState) -> OrderEntryView {
        OrderEntryView {
            title: Destination::ITEM_ORDER.title,
            can_navigate_back: true,
            item: ui_state.item(),
            quantity_to_order: self.field.input().raw().to_string(),
            place_order_enabled: self.is_place_order_enabled(ui_state),
            error_message: self.error_message(),
        }
    }
}

/// What the entry screen draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEntryView {
    pub title: &'static str,
    pub can_navigate_back: bool,
    pub item: Item,
    pub quantity_to_order: String,
    pub place_order_enabled: bool,
    pub error_message: Option<&'static str>,
}
