//! History of computed wage breakdowns.
//!
//! The [`HistoryStore`] owns an ordered list of past results and a per-worker
//! memory of the last hourly rate used. It is a plain single-owner value; the
//! HTTP layer wraps it in a mutex when sharing it between requests.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::WageBreakdown;

/// A stored breakdown with its entry metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable identifier of the entry; kept when the entry is replaced.
    pub id: Uuid,
    /// When the breakdown was stored or last replaced.
    pub recorded_at: DateTime<Utc>,
    /// The stored breakdown.
    pub breakdown: WageBreakdown,
}

/// An ordered, mutable list of past results.
///
/// Entries are only changed through [`append`](Self::append),
/// [`replace`](Self::replace), [`remove`](Self::remove) and
/// [`clear`](Self::clear). Breakdowns themselves are never edited in place.
///
/// # Example
///
/// ```
/// use shift_wage_engine::history::HistoryStore;
///
/// let mut history = HistoryStore::new();
/// assert!(history.is_empty());
/// assert!(history.remove(0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    remembered_rates: HashMap<String, Decimal>,
}

impl HistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a breakdown and remembers the worker's rate.
    pub fn append(&mut self, breakdown: WageBreakdown) -> &HistoryEntry {
        self.remember_rate(&breakdown.worker_name, breakdown.hourly_rate);
        self.entries.push(HistoryEntry {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            breakdown,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Replaces the breakdown at `index` with a newly computed one.
    ///
    /// The entry keeps its id and position; its timestamp is refreshed. On an
    /// out-of-range index nothing is changed, rate memory included.
    pub fn replace(&mut self, index: usize, breakdown: WageBreakdown) -> EngineResult<&HistoryEntry> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EngineError::HistoryIndexOutOfRange { index, len })?;
        self.remembered_rates
            .insert(breakdown.worker_name.clone(), breakdown.hourly_rate);
        entry.breakdown = breakdown;
        entry.recorded_at = Utc::now();
        Ok(&*entry)
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> EngineResult<HistoryEntry> {
        let len = self.entries.len();
        if index >= len {
            return Err(EngineError::HistoryIndexOutOfRange { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// Removes every entry. Remembered rates are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> EngineResult<&HistoryEntry> {
        self.entries
            .get(index)
            .ok_or(EngineError::HistoryIndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the stored breakdowns in insertion order.
    pub fn breakdowns(&self) -> Vec<WageBreakdown> {
        self.entries.iter().map(|e| e.breakdown.clone()).collect()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remembers the hourly rate last used for a worker.
    pub fn remember_rate(&mut self, worker_name: &str, rate: Decimal) {
        self.remembered_rates.insert(worker_name.to_string(), rate);
    }

    /// Returns the hourly rate last used for a worker.
    pub fn remembered_rate(&self, worker_name: &str) -> EngineResult<Decimal> {
        self.remembered_rates
            .get(worker_name)
            .copied()
            .ok_or_else(|| EngineError::RateNotRemembered {
                worker_name: worker_name.to_string(),
            })
    }
}
