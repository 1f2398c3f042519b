use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "florist")]
#[command(about = "A toy flower shop: import a catalog and price an order")]
pub struct CliConfig {
    #[arg(long, default_value = "flowers.csv")]
    pub catalog: String,

    #[arg(long, default_value = "3.00", help = "Flat per-order service fee")]
    pub service_fee: Decimal,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog
    }

    fn service_fee(&self) -> Decimal {
        self.service_fee
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("catalog", &self.catalog)?;
        validation::validate_fee("service_fee", self.service_fee)
    }
}
