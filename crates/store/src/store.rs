//! The file-backed ticket archive.

use crate::error::StoreError;
use rackcheck_ticket::{TicketId, TicketRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// All completed tickets, keyed by ticket code.
pub type TicketMap = BTreeMap<TicketId, TicketRecord>;

/// Handle on the completed-tickets JSON file.
///
/// Every operation goes through a full load or a full rewrite; the store
/// holds no cache and no lock.
#[derive(Debug, Clone)]
pub struct CompletedStore {
    path: PathBuf,
}

impl CompletedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full archive. Missing, unreadable or corrupt files read
    /// as the empty mapping.
    pub fn load(&self) -> TicketMap {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no archive at {}", self.path.display());
                return TicketMap::new();
            }
            Err(e) => {
                log::warn!("could not read {}: {e}", self.path.display());
                return TicketMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(tickets) => tickets,
            Err(e) => {
                log::warn!("corrupt archive at {}: {e}", self.path.display());
                TicketMap::new()
            }
        }
    }

    /// Rewrites the whole archive.
    pub fn save(&self, tickets: &TicketMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tickets)?;
        fs::write(&self.path, json)?;
        log::debug!("saved {} tickets to {}", tickets.len(), self.path.display());
        Ok(())
    }

    pub fn get(&self, id: &TicketId) -> Option<TicketRecord> {
        self.load().remove(id)
    }

    /// Archives one ticket, replacing any previous record under the same
    /// code.
    pub fn insert(&self, id: TicketId, record: TicketRecord) -> Result<(), StoreError> {
        let mut tickets = self.load();
        tickets.insert(id, record);
        self.save(&tickets)
    }

    /// Removes a ticket; returns whether it was present.
    pub fn remove(&self, id: &TicketId) -> Result<bool, StoreError> {
        let mut tickets = self.load();
        let removed = tickets.remove(id).is_some();
        if removed {
            self.save(&tickets)?;
        }
        Ok(removed)
    }
}
