//! Order placement flows.
//!
//! Two screens share one item view-model for the lifetime of an order
//! transaction:
//!
//! ```text
//! Entry --[valid submit]--> Summary --[home]--> (caller)
//!   |--[invalid submit]--> Entry (error shown)
//!   `--[cancel]----------> (caller)
//! ```
//!
//! Everything here is toolkit-agnostic: a renderer feeds [`UiEvent`]s into an
//! [`OrderSession`] and draws the [`ScreenView`] it hands back.

pub mod entry;
pub mod error;
pub mod navigation;
pub mod quantity;
pub mod session;
pub mod summary;
pub mod view_model;

pub use entry::{
    INVALID_QUANTITY_MESSAGE, OrderEntryFlow, OrderEntryView, SubmitOutcome,
    validate_order_quantity,
};
pub use error::{OrderError, OrderResult};
pub use navigation::{Destination, NavigationRecorder, NavigationRequest, Navigator};
pub use quantity::{FocusTracker, QuantityField, QuantityInput};
pub use session::{OrderSession, Screen, ScreenView, UiEvent};
pub use summary::{OrderSummary, OrderSummaryFlow, OrderSummaryView};
pub use view_model::{ItemDetailsSource, ItemDetailsViewModel};
