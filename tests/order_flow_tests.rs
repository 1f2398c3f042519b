use florist::core::importer::import_path;
use florist::core::pricing::create_order;
use florist::core::receipt::{render_summary, Invoice};
use florist::domain::model::{Role, User};
use florist::domain::ports::ConfigProvider;
use florist::{FloristError, Shop};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

struct TestConfig {
    catalog: String,
    fee: Decimal,
}

impl ConfigProvider for TestConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog
    }

    fn service_fee(&self) -> Decimal {
        self.fee
    }
}

fn write_catalog(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("flowers.csv");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_import_then_order_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "name,price,color,description\n\
         Rose,5.50,Red,Fresh rose\n\
         Tulip,3.25,Yellow,Spring tulip\n",
    );

    let report = import_path(&path);
    let customer = User::new(1, "Jean Dupont", "jean@example.com", Role::Client);
    let selection = report.catalog.take_first(2);
    let order = create_order(1, customer, selection, "Credit card", dec!(3.00)).unwrap();

    // 5.50 + 3.25 + 3.00, exact decimal
    assert_eq!(order.total, dec!(11.75));
    assert_eq!(order.compute_total(), dec!(11.75));

    let summary = render_summary(&order);
    assert!(summary.contains("Order #1"));
    assert!(summary.contains("Customer: Jean Dupont"));
    assert!(summary.contains("Total: 11.75 $"));
    assert!(summary.contains("- Rose (5.50 $)"));
    assert!(summary.contains("- Tulip (3.25 $)"));

    let invoice = Invoice::new(&order).render();
    assert!(invoice.contains("--- Invoice ---"));
    assert!(invoice.contains("Total: 11.75 $"));
}

#[test]
fn test_orders_share_catalog_flowers() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "name,price,color,description\nRose,5.50,Red,desc\n");

    let report = import_path(&path);
    let customer = User::new(1, "Jean Dupont", "jean@example.com", Role::Client);
    let order = create_order(
        1,
        customer,
        report.catalog.take_first(1),
        "Credit card",
        dec!(3.00),
    )
    .unwrap();

    let in_catalog = report.catalog.get(0).unwrap();
    assert!(std::rc::Rc::ptr_eq(&in_catalog, &order.flowers[0]));
}

#[test]
fn test_empty_catalog_refuses_the_run() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "name,price,color,description\n");

    let mut shop = Shop::new(TestConfig {
        catalog: path,
        fee: dec!(3.00),
    });

    assert!(matches!(shop.run(), Err(FloristError::EmptyCatalog)));
}

#[test]
fn test_full_run_with_custom_service_fee() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "name,price,color,description\n\
         Rose,5.50,Red,Fresh rose\n\
         Tulip,3.25,Yellow,Spring tulip\n",
    );

    let mut shop = Shop::new(TestConfig {
        catalog: path,
        fee: dec!(1.25),
    });
    let run = shop.run().unwrap();

    assert_eq!(run.imported, 2);
    assert!(run.order_summary.contains("Total: 10.00 $"));
    assert!(run.invoice.contains("Total: 10.00 $"));
}
