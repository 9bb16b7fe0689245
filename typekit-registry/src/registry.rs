//! Bounded, append-only, name-keyed registry.
//!
//! One generic [`NameRegistry`] backs all four registry kinds. The kinds differ
//! only in their [`Entry`] type: what the key is and what payload rides along.
//!
//! # Contract
//!
//! - `register`: validate → scan for the key → capacity check → append.
//!   A key already present is a successful no-op: the first registration wins.
//! - `lookup`: linear scan in insertion order, exact byte-wise key match.
//!   Absent and empty keys yield `None`, never an error.
//! - Entries are never removed or replaced. The registry as a whole is
//!   discarded by dropping it.
//!
//! The entry list sits behind an `RwLock`: the scan-check-append sequence runs
//! under the write lock, lookups under the read lock, so readers never observe
//! a half-finished registration.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{RegistryError, RegistryKind};

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 64;

// ---------------------------------------------------------------------------
// 1. Entry traits
// ---------------------------------------------------------------------------

/// A registry key: compared by exact equality, rejected when blank.
pub trait RegistryKey: PartialEq + fmt::Display {
    fn is_blank(&self) -> bool;
}

impl RegistryKey for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

/// One registrable item.
pub trait Entry: Send + Sync + 'static {
    /// Registry kind, for errors and log events.
    const KIND: RegistryKind;

    type Key: RegistryKey + ?Sized;

    fn key(&self) -> &Self::Key;

    /// Reject malformed entries before they reach the registry.
    ///
    /// The default only checks for a blank key.
    fn validate(&self) -> Result<(), &'static str> {
        if self.key().is_blank() {
            return Err("key must not be empty");
        }
        Ok(())
    }
}

/// Successful outcome of [`NameRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The entry was appended.
    Added,
    /// The key was already present; the existing entry was kept unchanged.
    AlreadyRegistered,
}

impl Registration {
    pub fn is_added(self) -> bool {
        self == Registration::Added
    }
}

// ---------------------------------------------------------------------------
// 2. Registry
// ---------------------------------------------------------------------------

pub struct NameRegistry<E: Entry> {
    capacity: usize,
    entries: RwLock<Vec<Arc<E>>>,
}

impl<E: Entry> NameRegistry<E> {
    /// Empty registry with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty registry holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(Vec::with_capacity(capacity.min(DEFAULT_CAPACITY))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Register `entry` under its key.
    ///
    /// Returns `RegistryError::InvalidEntry` if validation fails (checked
    /// first, even on a full registry) and `RegistryError::RegistryFull` if
    /// the key is new and the registry is at capacity.
    pub fn register(&self, entry: E) -> Result<Registration, RegistryError> {
        entry
            .validate()
            .map_err(|reason| RegistryError::InvalidEntry { kind: E::KIND, reason })?;

        let mut entries = self.write();
        if entries.iter().any(|e| e.key() == entry.key()) {
            tracing::debug!(kind = %E::KIND, key = %entry.key(), "already registered, keeping first entry");
            return Ok(Registration::AlreadyRegistered);
        }
        if entries.len() >= self.capacity {
            tracing::warn!(
                kind = %E::KIND,
                key = %entry.key(),
                capacity = self.capacity,
                "registry full, registration rejected"
            );
            return Err(RegistryError::RegistryFull {
                kind: E::KIND,
                capacity: self.capacity,
                key: entry.key().to_string(),
            });
        }

        tracing::debug!(kind = %E::KIND, key = %entry.key(), count = entries.len() + 1, "registered");
        entries.push(Arc::new(entry));
        Ok(Registration::Added)
    }

    /// First entry whose key equals `key`, if any.
    pub fn lookup(&self, key: &E::Key) -> Option<Arc<E>> {
        if key.is_blank() {
            return None;
        }
        self.read().iter().find(|e| e.key() == key).cloned()
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        self.lookup(key).is_some()
    }

    /// Snapshot of all entries in insertion order.
    pub fn entries(&self) -> Vec<Arc<E>> {
        self.read().clone()
    }

    // The list is append-only and each push is a single step, so a panic
    // in another holder cannot leave it inconsistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<E>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<E>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entry> Default for NameRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> fmt::Debug for NameRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameRegistry")
            .field("kind", &E::KIND)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
