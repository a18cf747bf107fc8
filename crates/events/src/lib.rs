//! Domain events and the in-process publish/subscribe plumbing behind
//! observable state.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod state;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use state::StateHolder;
