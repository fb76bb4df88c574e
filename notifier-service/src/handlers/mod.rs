/// HTTP surface receiving change-feed deliveries
pub mod events;

pub use events::*;
