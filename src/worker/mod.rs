//! Background workers for fetching and debouncing.
//!
//! The fetch worker runs gateway calls off the event loop; the debouncer
//! spaces out text-driven searches. Both report back over mpsc channels the
//! event loop selects on.

pub mod debounce;
pub mod handler;
pub mod messages;

pub use debounce::{DebounceFired, Debouncer};
pub use handler::FetchWorker;
pub use messages::{FetchRequest, FetchResponse};
