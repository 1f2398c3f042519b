pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::importer::{ImportDiagnostic, ImportReport};
pub use core::shop::{RunSummary, Shop};
pub use domain::model::{Catalog, Flower, Order, Role, User};
pub use utils::error::{FloristError, Result};
