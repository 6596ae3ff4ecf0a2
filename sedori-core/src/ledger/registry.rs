use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::info;

use super::SessionLedger;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
}

/// Opaque handle for one user session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Owns one [`SessionLedger`] per open session.
///
/// Typical lifetime:
/// 1. Call `open` when a session starts and keep the returned [`SessionId`].
/// 2. Pass the id to request handlers, which reach the ledger through
///    `ledger` / `ledger_mut`.
/// 3. Call `close` when the session ends; its ledger is dropped with it.
///
/// Sessions never share entries.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    ledgers: HashMap<SessionId, SessionLedger>,
    next_id: u64,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session with an empty ledger.
    pub fn open(&mut self) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.ledgers.insert(id, SessionLedger::new());
        info!(session = %id, "session opened");
        id
    }

    /// The ledger owned by `id`.
    ///
    /// # Errors
    /// * [`LedgerError::UnknownSession`]: `id` was never opened or is closed.
    pub fn ledger(
        &self,
        id: SessionId,
    ) -> Result<&SessionLedger, LedgerError> {
        self.ledgers
            .get(&id)
            .ok_or(LedgerError::UnknownSession(id))
    }

    /// Mutable access to the ledger owned by `id`.
    pub fn ledger_mut(
        &mut self,
        id: SessionId,
    ) -> Result<&mut SessionLedger, LedgerError> {
        self.ledgers
            .get_mut(&id)
            .ok_or(LedgerError::UnknownSession(id))
    }

    /// End a session and hand back its ledger for a last look.
    pub fn close(
        &mut self,
        id: SessionId,
    ) -> Result<SessionLedger, LedgerError> {
        let ledger = self
            .ledgers
            .remove(&id)
            .ok_or(LedgerError::UnknownSession(id))?;
        info!(session = %id, entries = ledger.len(), "session closed");
        Ok(ledger)
    }

    /// Ids of every open session, in opening order.
    pub fn active_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.ledgers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
