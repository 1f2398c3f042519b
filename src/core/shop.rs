use crate::core::importer;
use crate::core::order_log::OrderLog;
use crate::core::pricing::create_order;
use crate::core::receipt::{render_summary, Invoice};
use crate::domain::model::{Role, User};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FloristError, Result};

/// Flowers taken from the front of the catalog for the demo order.
const SELECTION_SIZE: usize = 2;

/// Rendered output of a completed run, for the CLI to print.
#[derive(Debug)]
pub struct RunSummary {
    pub imported: usize,
    pub skipped_rows: usize,
    pub order_summary: String,
    pub invoice: String,
}

/// One-shot shop workflow: import the catalog, build and price an order for
/// the fixture customer, log it, and render the receipt and invoice.
pub struct Shop<C: ConfigProvider> {
    config: C,
    log: OrderLog,
}

impl<C: ConfigProvider> Shop<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            log: OrderLog::new(),
        }
    }

    pub fn order_log(&self) -> &OrderLog {
        &self.log
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("Importing catalog from {}", self.config.catalog_path());
        let report = importer::import_path(self.config.catalog_path());
        tracing::info!(
            "Imported {} flowers ({} rows skipped)",
            report.catalog.len(),
            report.skipped_rows()
        );

        if report.catalog.is_empty() {
            return Err(FloristError::EmptyCatalog);
        }

        let client = User::new(1, "Jean Dupont", "jean@example.com", Role::Client);
        let vendor = User::new(2, "Marie Martin", "marie@example.com", Role::Vendor);
        tracing::info!("{}", client.task());

        let selection = report.catalog.take_first(SELECTION_SIZE);
        let order = create_order(
            1,
            client,
            selection,
            "Credit card",
            self.config.service_fee(),
        )?;
        tracing::info!("Order {} priced at {} $", order.id, order.total);

        let order_summary = render_summary(&order);
        let invoice = Invoice::new(&order).render();

        tracing::info!("{}", vendor.task());
        self.log.place(order, &vendor);

        Ok(RunSummary {
            imported: report.catalog.len(),
            skipped_rows: report.skipped_rows(),
            order_summary,
            invoice,
        })
    }
}
