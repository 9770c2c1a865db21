pub mod client;
pub mod error;
mod parse;
pub mod plan;
pub mod types;

pub use client::FulfillmentClient;
pub use error::FulfillmentError;
pub use types::{FulfillmentResponse, PartAvailability, PickupDisplay, StoreRecord};
