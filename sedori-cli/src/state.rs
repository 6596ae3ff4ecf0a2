//! Session state for the interactive calculator.
//!
//! The calculator runs one session per process. Its ledger is owned by a
//! [`SessionRegistry`] and reached through the session id, so handlers never
//! hold the ledger directly.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use sedori_core::{
    ExportFormat, LedgerError, ProfitResult, SessionId, SessionLedger, SessionRegistry,
    TransactionInput,
};

use crate::config::ExportSettings;

/// State that lives for the whole interactive session.
#[derive(Debug)]
pub struct AppState {
    registry: SessionRegistry,
    session: SessionId,

    /// Format used by a bare `export` command.
    pub export_format: ExportFormat,
    pub output_dir: PathBuf,
    pub base_name: String,
}

impl AppState {
    /// Opens a fresh session with an empty ledger.
    pub fn new(export: ExportSettings) -> Self {
        let mut registry = SessionRegistry::new();
        let session = registry.open();
        Self {
            registry,
            session,
            export_format: export.format,
            output_dir: export.output_dir,
            base_name: export.base_name,
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn ledger(&self) -> Result<&SessionLedger, LedgerError> {
        self.registry.ledger(self.session)
    }

    pub fn ledger_mut(&mut self) -> Result<&mut SessionLedger, LedgerError> {
        self.registry.ledger_mut(self.session)
    }

    /// Appends a computed transaction; returns the new ledger length.
    pub fn record(
        &mut self,
        input: TransactionInput,
        result: ProfitResult,
        timestamp: NaiveDateTime,
    ) -> Result<usize, LedgerError> {
        let ledger = self.ledger_mut()?;
        ledger.append(input, result, timestamp);
        Ok(ledger.len())
    }

    /// Ends the session, handing back its ledger.
    pub fn close(&mut self) -> Result<SessionLedger, LedgerError> {
        self.registry.close(self.session)
    }
}
