pub mod registry;
pub mod session_ledger;

pub use registry::{LedgerError, SessionId, SessionRegistry};
pub use session_ledger::SessionLedger;
