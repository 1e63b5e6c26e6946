// Rollcall - console student roster manager over a delimited text file
pub mod config;
pub mod constants;
pub mod error;
pub mod ordering;
pub mod record;
pub mod schema;
pub mod shell;
pub mod storage;
pub mod store;
pub mod utils;

// Re-export main types for convenience
pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use record::StudentRecord;
pub use schema::FieldName;
pub use shell::Shell;
pub use storage::CsvStorage;
pub use store::{Confirmation, DeleteRequest, RecordStore};
