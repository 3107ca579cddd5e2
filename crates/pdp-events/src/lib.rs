//! Synchronous publish/subscribe bus for page components.
//!
//! Components that must not reference each other directly share an
//! [`EventBus`] handed to their constructors. Delivery is synchronous and
//! single-threaded: `publish` runs every matching handler to completion, in
//! subscription order, before it returns.

mod bus;
mod error;

pub use bus::{Event, EventBus, Subscription};
pub use error::{BusError, HandlerError};
