//! Navigation destinations and the navigator seam.

use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, ItemId};

/// Name of the route argument carrying the item id.
pub const ITEM_ID_ARG: &str = "itemId";

/// A screen reachable by route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub route: &'static str,
    pub title: &'static str,
}

impl Destination {
    pub const ITEM_ORDER: Destination = Destination {
        route: "item_order",
        title: "Order Item",
    };

    pub const ITEM_ORDER_SUMMARY: Destination = Destination {
        route: "item_order_summary",
        title: "Order Summary",
    };

    /// Route pattern, e.g. `item_order/{itemId}`.
    pub fn route_with_args(&self) -> String {
        format!("{}/{{{}}}", self.route, ITEM_ID_ARG)
    }

    /// Concrete route for one item, e.g. `item_order/7`.
    pub fn route_for(&self, item_id: ItemId) -> String {
        format!("{}/{}", self.route, item_id)
    }

    /// Extract the item id from a concrete route of this destination.
    pub fn parse_item_id(&self, path: &str) -> DomainResult<ItemId> {
        let arg = path
            .strip_prefix(self.route)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| {
                DomainError::invalid_id(format!("{path:?} is not a {} route", self.route))
            })?;
        arg.parse()
    }
}

/// Navigation requested by the order flows.
pub trait Navigator {
    fn navigate_to_order_summary(&mut self, item_id: ItemId);

    fn navigate_back(&mut self);

    fn navigate_home(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "to", rename_all = "snake_case")]
pub enum NavigationRequest {
    OrderSummary { item_id: ItemId },
    Back,
    Home,
}

impl NavigationRequest {
    /// Concrete route, for requests that target a destination.
    pub fn route(&self) -> Option<String> {
        match self {
            NavigationRequest::OrderSummary { item_id } => {
                Some(Destination::ITEM_ORDER_SUMMARY.route_for(*item_id))
            }
            NavigationRequest::Back | NavigationRequest::Home => None,
        }
    }
}

/// Navigator that records requests for a host to act on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationRecorder {
    requests: Vec<NavigationRequest>,
}

impl NavigationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }

    pub fn last(&self) -> Option<&NavigationRequest> {
        self.requests.last()
    }

    /// Hand over everything recorded so far.
    pub fn take(&mut self) -> Vec<NavigationRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl Navigator for NavigationRecorder {
    fn navigate_to_order_summary(&mut self, item_id: ItemId) {
        self.requests.push(NavigationRequest::OrderSummary { item_id });
    }

    fn navigate_back(&mut self) {
        self.requests.push(NavigationRequest::Back);
    }

    fn navigate_home(&mut self) {
        self.requests.push(NavigationRequest::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_carry_the_item_id() {
        assert_eq!(Destination::ITEM_ORDER.route_with_args(), "item_order/{itemId}");
        assert_eq!(
            Destination::ITEM_ORDER_SUMMARY.route_for(ItemId::new(7)),
            "item_order_summary/7"
        );
    }

    #[test]
    fn parses_item_id_back_out_of_route() {
        let dest = Destination::ITEM_ORDER_SUMMARY;
        assert_eq!(dest.parse_item_id("item_order_summary/7").unwrap(), ItemId::new(7));
        assert!(matches!(
            dest.parse_item_id("item_order/7"),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            dest.parse_item_id("item_order_summary/x"),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn recorder_keeps_requests_in_order() {
        let mut nav = NavigationRecorder::new();
        nav.navigate_to_order_summary(ItemId::new(7));
        nav.navigate_home();

        assert_eq!(
            nav.requests(),
            &[
                NavigationRequest::OrderSummary { item_id: ItemId::new(7) },
                NavigationRequest::Home
            ]
        );
        assert_eq!(
            nav.requests()[0].route().as_deref(),
            Some("item_order_summary/7")
        );

        let taken = nav.take();
        assert_eq!(taken.len(), 2);
        assert!(nav.requests().is_empty());
    }
}
