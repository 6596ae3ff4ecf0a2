pub mod loader;

pub use loader::{LoaderError, TransactionLoader, TransactionRecord};
