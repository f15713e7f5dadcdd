pub mod catalog;
pub mod dashboard;
pub mod engine;
pub mod models;
pub mod payment;
pub mod pricing;
pub mod storage;

pub use catalog::Catalog;
pub use engine::{EngineConfig, MatchEngine};
pub use models::{Booking, Listing, Role, SwipeDirection, User};
pub use pricing::{price_breakdown, LeaseTerm, PriceBreakdown};
