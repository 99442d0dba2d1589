pub mod associations;
pub mod catalog;
pub mod errors;
pub mod products;
pub mod variants;

pub use errors::{Axis, ServiceError, ServiceResult};
