use rust_decimal::Decimal;

/// Configuration surface the shop run depends on. Implemented by `CliConfig`
/// and by fixture configs in tests.
pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn service_fee(&self) -> Decimal;
}
