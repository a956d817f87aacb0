//! Storage boundary.
//!
//! The content store that owns the source text, the persisted results and the
//! cooldown markers lives outside this crate. The triggers only see these
//! traits. Each method is an atomic point read or write; nothing here is held
//! across calls, and concurrent writers for the same record simply race
//! (extraction is idempotent, so the last writer stores the same answer).
//!
//! [`MemoryStore`] implements all three traits for embedding and tests.

use crate::ParsedResult;
use crate::engine::Cooldown;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Identifier of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text nutrition field as delivered by the content store.
///
/// The catalog sync sometimes wraps the text in a one-element list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    Text(String),
    List(Vec<String>),
}

impl SourceText {
    /// Unwrap collection-wrapped input to its first element.
    pub fn into_text(self) -> Option<String> {
        match self {
            SourceText::Text(text) => Some(text),
            SourceText::List(items) => items.into_iter().next(),
        }
    }
}

impl From<&str> for SourceText {
    fn from(s: &str) -> Self {
        SourceText::Text(s.to_string())
    }
}

impl From<String> for SourceText {
    fn from(s: String) -> Self {
        SourceText::Text(s)
    }
}

impl From<Vec<String>> for SourceText {
    fn from(items: Vec<String>) -> Self {
        SourceText::List(items)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,
    #[error("storage backend failed: {0}")]
    Backend(String),
}

/// Read access to records and their free-text nutrition field.
pub trait SourceStore {
    /// Whether the record is a kind this pipeline processes (products).
    fn is_eligible(&self, id: RecordId) -> Result<bool, StoreError>;
    fn source_text(&self, id: RecordId) -> Result<Option<SourceText>, StoreError>;
}

/// Persistence of parsed results.
pub trait ResultStore {
    fn stored_result(&self, id: RecordId) -> Result<Option<ParsedResult>, StoreError>;

    fn has_result(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(self.stored_result(id)?.is_some())
    }

    fn put_result(&self, id: RecordId, result: ParsedResult) -> Result<(), StoreError>;
    fn delete_result(&self, id: RecordId) -> Result<(), StoreError>;
}

/// Ephemeral negative-result markers with automatic expiry.
pub trait CooldownStore {
    fn cooldown(&self, id: RecordId, now: DateTime<Utc>) -> Result<Cooldown, StoreError>;
    fn set_cooldown(&self, id: RecordId, until: DateTime<Utc>) -> Result<(), StoreError>;
    fn clear_cooldown(&self, id: RecordId) -> Result<(), StoreError>;
}

macro_rules! forward_store_impls {
    ($($wrapper:ty),*) => {$(
        impl<T: SourceStore + ?Sized> SourceStore for $wrapper {
            fn is_eligible(&self, id: RecordId) -> Result<bool, StoreError> {
                (**self).is_eligible(id)
            }
            fn source_text(&self, id: RecordId) -> Result<Option<SourceText>, StoreError> {
                (**self).source_text(id)
            }
        }

        impl<T: ResultStore + ?Sized> ResultStore for $wrapper {
            fn stored_result(&self, id: RecordId) -> Result<Option<ParsedResult>, StoreError> {
                (**self).stored_result(id)
            }
            fn has_result(&self, id: RecordId) -> Result<bool, StoreError> {
                (**self).has_result(id)
            }
            fn put_result(&self, id: RecordId, result: ParsedResult) -> Result<(), StoreError> {
                (**self).put_result(id, result)
            }
            fn delete_result(&self, id: RecordId) -> Result<(), StoreError> {
                (**self).delete_result(id)
            }
        }

        impl<T: CooldownStore + ?Sized> CooldownStore for $wrapper {
            fn cooldown(&self, id: RecordId, now: DateTime<Utc>) -> Result<Cooldown, StoreError> {
                (**self).cooldown(id, now)
            }
            fn set_cooldown(&self, id: RecordId, until: DateTime<Utc>) -> Result<(), StoreError> {
                (**self).set_cooldown(id, until)
            }
            fn clear_cooldown(&self, id: RecordId) -> Result<(), StoreError> {
                (**self).clear_cooldown(id)
            }
        }
    )*};
}

forward_store_impls!(&T, Arc<T>);

// --- In-memory implementation -------------------------------------------------

#[derive(Debug, Clone)]
struct Record {
    eligible: bool,
    source: Option<SourceText>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<RecordId, Record>,
    results: HashMap<RecordId, ParsedResult>,
    cooldowns: HashMap<RecordId, DateTime<Utc>>,
}

/// Thread-safe in-memory store.
///
/// Records not inserted are reported as ineligible. Expired cooldowns are
/// reported as [`Cooldown::Expired`] until overwritten or cleared.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }

    /// Insert or replace an eligible product record.
    pub fn insert_product(&self, id: RecordId, source: Option<SourceText>) -> Result<(), StoreError> {
        self.insert_record(id, true, source)
    }

    pub fn insert_record(&self, id: RecordId, eligible: bool, source: Option<SourceText>) -> Result<(), StoreError> {
        self.write()?.records.insert(id, Record { eligible, source });
        Ok(())
    }

    /// Replace the source text of an existing record, as the catalog sync or
    /// an editor would. Unknown records are created as eligible products.
    pub fn set_source(&self, id: RecordId, source: Option<SourceText>) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        inner.records.entry(id).or_insert(Record { eligible: true, source: None }).source = source;
        Ok(())
    }

    /// Expiry of the record's cooldown marker, live or not.
    pub fn cooldown_until(&self, id: RecordId) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.read()?.cooldowns.get(&id).copied())
    }
}

impl SourceStore for MemoryStore {
    fn is_eligible(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(self.read()?.records.get(&id).is_some_and(|r| r.eligible))
    }

    fn source_text(&self, id: RecordId) -> Result<Option<SourceText>, StoreError> {
        Ok(self.read()?.records.get(&id).and_then(|r| r.source.clone()))
    }
}

impl ResultStore for MemoryStore {
    fn stored_result(&self, id: RecordId) -> Result<Option<ParsedResult>, StoreError> {
        Ok(self.read()?.results.get(&id).cloned())
    }

    fn has_result(&self, id: RecordId) -> Result<bool, StoreError> {
        Ok(self.read()?.results.contains_key(&id))
    }

    fn put_result(&self, id: RecordId, result: ParsedResult) -> Result<(), StoreError> {
        self.write()?.results.insert(id, result);
        Ok(())
    }

    fn delete_result(&self, id: RecordId) -> Result<(), StoreError> {
        self.write()?.results.remove(&id);
        Ok(())
    }
}

impl CooldownStore for MemoryStore {
    fn cooldown(&self, id: RecordId, now: DateTime<Utc>) -> Result<Cooldown, StoreError> {
        Ok(match self.read()?.cooldowns.get(&id) {
            Some(until) if *until > now => Cooldown::Active { until: *until },
            Some(_) => Cooldown::Expired,
            None => Cooldown::Absent,
        })
    }

    fn set_cooldown(&self, id: RecordId, until: DateTime<Utc>) -> Result<(), StoreError> {
        self.write()?.cooldowns.insert(id, until);
        Ok(())
    }

    fn clear_cooldown(&self, id: RecordId) -> Result<(), StoreError> {
        self.write()?.cooldowns.remove(&id);
        Ok(())
    }
}
