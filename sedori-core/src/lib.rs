pub mod calculations;
pub mod export;
pub mod ledger;
pub mod models;

pub use calculations::ProfitCalculator;
pub use export::{ExportArtifact, ExportError, ExportFormat, ExportTable, WriterRegistry};
pub use ledger::{LedgerError, SessionId, SessionLedger, SessionRegistry};
pub use models::*;
