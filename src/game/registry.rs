//! Per-match registry for hosts that run many matches at once.
//!
//! Each match is owned by the registry behind its own `Mutex`, so moves on
//! one match serialize while different matches proceed independently. The
//! id map itself sits behind an `RwLock` and is only written when matches
//! are added or removed. Matches share no state with each other.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument};

use super::quixo::{Match, MatchSnapshot, MatchStatus};
use crate::core::{Move, Players};
use crate::error::RegistryError;

/// Shared handle to one registered match.
pub type MatchHandle = Arc<Mutex<Match>>;

/// Registry of independently locked matches keyed by match id.
#[derive(Debug, Default)]
pub struct MatchRegistry {
    matches: RwLock<FxHashMap<String, MatchHandle>>,
}

impl MatchRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh match for `players` under `id`.
    #[instrument(skip(self))]
    pub fn create(&self, id: &str, players: Players) -> Result<(), RegistryError> {
        self.insert(id, Match::new(players))
    }

    /// Register an existing match under `id`.
    #[instrument(skip(self, game))]
    pub fn insert(&self, id: &str, game: Match) -> Result<(), RegistryError> {
        let mut matches = self.matches.write().unwrap_or_else(PoisonError::into_inner);
        if matches.contains_key(id) {
            return Err(RegistryError::DuplicateMatch(id.to_string()));
        }
        matches.insert(id.to_string(), Arc::new(Mutex::new(game)));
        info!(match_id = id, count = matches.len(), "registered match");
        Ok(())
    }

    /// Handle to the match registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<MatchHandle> {
        self.matches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Run `f` with exclusive access to one match.
    pub fn with_match<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Match) -> R,
    ) -> Result<R, RegistryError> {
        let handle = self
            .get(id)
            .ok_or_else(|| RegistryError::UnknownMatch(id.to_string()))?;
        let mut game = handle.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut game))
    }

    /// Apply a move to one match.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        id: &str,
        player: &str,
        mv: Move,
    ) -> Result<MatchStatus, RegistryError> {
        let status = self.with_match(id, |game| game.play(player, mv))??;
        debug!(match_id = id, ?status, "move applied");
        Ok(status)
    }

    /// Snapshot of one match.
    pub fn snapshot(&self, id: &str) -> Result<MatchSnapshot, RegistryError> {
        self.with_match(id, |game| game.snapshot())
    }

    /// Drop a match. Returns false if `id` was not registered.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> bool {
        let removed = self
            .matches
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some();
        if removed {
            info!(match_id = id, "removed match");
        }
        removed
    }

    /// Registered match ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .matches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Number of registered matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when no match is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
