use crate::domain::model::{Catalog, Flower};
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

/// Columns expected per row: name, price, color, description.
const EXPECTED_FIELDS: usize = 4;

/// Non-fatal findings recorded while importing. Diagnostics are for
/// observability only; the importer always completes with whatever subset
/// of rows parsed successfully.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportDiagnostic {
    /// The catalog file does not exist.
    SourceMissing { path: String },
    /// The source exists but could not be read (or a row could not be
    /// decoded at all).
    ReadFailed { message: String },
    /// The table held a header only, or nothing.
    NoRows,
    /// A row did not split into exactly four fields.
    MalformedRow { row: String },
    /// The price field was not a valid non-negative invariant decimal.
    InvalidPrice { name: String },
}

impl fmt::Display for ImportDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportDiagnostic::SourceMissing { path } => {
                write!(f, "Catalog file '{}' does not exist", path)
            }
            ImportDiagnostic::ReadFailed { message } => {
                write!(f, "Import read error: {}", message)
            }
            ImportDiagnostic::NoRows => write!(f, "No flower rows found in the catalog file"),
            ImportDiagnostic::MalformedRow { row } => {
                write!(f, "Invalid row in catalog file: {}", row)
            }
            ImportDiagnostic::InvalidPrice { name } => {
                write!(f, "Could not parse the price for flower: {}", name)
            }
        }
    }
}

impl ImportDiagnostic {
    /// Row-level diagnostics correspond one-to-one to skipped rows.
    pub fn is_row_level(&self) -> bool {
        matches!(
            self,
            ImportDiagnostic::MalformedRow { .. } | ImportDiagnostic::InvalidPrice { .. }
        )
    }
}

/// Result of an import run: the catalog plus the ordered diagnostics.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub catalog: Catalog,
    pub diagnostics: Vec<ImportDiagnostic>,
}

impl ImportReport {
    pub fn skipped_rows(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_row_level()).count()
    }

    fn push_diagnostic(&mut self, diagnostic: ImportDiagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

/// Imports the catalog from a file. A missing or unreadable source yields an
/// empty catalog with a diagnostic, never an error; the caller decides what
/// an empty catalog means.
pub fn import_path(path: impl AsRef<Path>) -> ImportReport {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => import_reader(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let diagnostic = ImportDiagnostic::SourceMissing {
                path: path.display().to_string(),
            };
            tracing::warn!("{}", diagnostic);
            ImportReport {
                catalog: Catalog::default(),
                diagnostics: vec![diagnostic],
            }
        }
        Err(e) => {
            let diagnostic = ImportDiagnostic::ReadFailed {
                message: e.to_string(),
            };
            tracing::warn!("{}", diagnostic);
            ImportReport {
                catalog: Catalog::default(),
                diagnostics: vec![diagnostic],
            }
        }
    }
}

/// Imports the catalog from any reader. The first row is a header and is
/// skipped. Quoting is intentionally disabled: the format is a strict
/// four-field comma split, and rows with embedded commas are malformed.
pub fn import_reader<R: Read>(source: R) -> ImportReport {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(source);

    let mut report = ImportReport::default();
    let mut next_id: u32 = 1;
    let mut saw_rows = false;

    for result in reader.records() {
        saw_rows = true;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report.push_diagnostic(ImportDiagnostic::ReadFailed {
                    message: e.to_string(),
                });
                continue;
            }
        };

        if record.len() != EXPECTED_FIELDS {
            report.push_diagnostic(ImportDiagnostic::MalformedRow {
                row: record.iter().collect::<Vec<_>>().join(","),
            });
            continue;
        }

        let price = match Decimal::from_str(record[1].trim()) {
            Ok(price) if !price.is_sign_negative() => price,
            _ => {
                report.push_diagnostic(ImportDiagnostic::InvalidPrice {
                    name: record[0].to_string(),
                });
                continue;
            }
        };

        let flower = Flower {
            id: next_id,
            name: record[0].to_string(),
            color: record[2].to_string(),
            price,
            description: record[3].to_string(),
        };
        next_id += 1;

        tracing::info!(
            "Flower added: {}, {}, {} $",
            flower.name,
            flower.color,
            flower.price
        );
        report.catalog.push(flower);
    }

    if !saw_rows {
        report.push_diagnostic(ImportDiagnostic::NoRows);
    }

    report
}
