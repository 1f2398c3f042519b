use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloristError {
    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No flowers available after import")]
    EmptyCatalog,

    #[error("An order needs at least one flower")]
    EmptySelection,
}

pub type Result<T> = std::result::Result<T, FloristError>;
