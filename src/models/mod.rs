pub mod alert;
pub mod filter;

pub use alert::{Alert, Direction};
pub use filter::{Filter, UnknownFilter};
