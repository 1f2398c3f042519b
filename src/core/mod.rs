pub mod importer;
pub mod order_log;
pub mod pricing;
pub mod receipt;
pub mod shop;

pub use crate::domain::model::{Catalog, Flower, Order, Role, User};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
