//! Alias manifests
//!
//! A manifest is a serialized snapshot of the alias table. Comparing the
//! current catalog against a manifest saved by an earlier release shows
//! whether any consumer-visible name was removed or re-bound.
//!
//! ```toml
//! [[aliases]]
//! name = "Vec3"
//! category = "vector"
//! scalar = "f32"
//! dim = 3
//! ```

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{AliasEntry, CatalogError, Category, Signature, ALIASES};
use crate::config::Config;
use crate::foundation::scalar::ScalarKind;

/// One named specialization in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Alias name
    pub name: String,
    /// Construct family
    pub category: Category,
    /// Element type
    pub scalar: ScalarKind,
    /// Dimension, absent for dimensionless constructs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<usize>,
}

impl ManifestEntry {
    /// What the name resolves to
    pub const fn signature(&self) -> Signature {
        Signature::new(self.category, self.scalar, self.dim)
    }
}

impl From<&AliasEntry> for ManifestEntry {
    fn from(entry: &AliasEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            category: entry.category,
            scalar: entry.scalar,
            dim: entry.dim,
        }
    }
}

/// Serializable snapshot of an alias table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasManifest {
    /// Entries in declaration order
    #[serde(default)]
    pub aliases: Vec<ManifestEntry>,
}

/// Name-level differences between two manifests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    /// Names only in the older manifest
    pub removed: Vec<String>,
    /// Names only in the newer manifest
    pub added: Vec<String>,
    /// Names in both that resolve to different specializations
    pub changed: Vec<String>,
}

impl ManifestDiff {
    /// Whether existing consumers could stop compiling
    pub fn is_breaking(&self) -> bool {
        !self.removed.is_empty() || !self.changed.is_empty()
    }

    /// Whether the manifests name exactly the same things
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }
}

impl AliasManifest {
    /// Snapshot the aliases compiled into this crate
    pub fn current() -> Self {
        Self::from_entries(ALIASES)
    }

    /// Snapshot an arbitrary alias table
    pub fn from_entries(entries: &[AliasEntry]) -> Self {
        Self {
            aliases: entries.iter().map(ManifestEntry::from).collect(),
        }
    }

    /// Find an entry by name
    pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
        self.aliases.iter().find(|entry| entry.name == name)
    }

    /// Compare against an older manifest
    pub fn diff(&self, older: &Self) -> ManifestDiff {
        let old: BTreeMap<&str, Signature> = older.by_name();
        let new: BTreeMap<&str, Signature> = self.by_name();

        let mut diff = ManifestDiff::default();
        for (name, signature) in &old {
            match new.get(name) {
                None => diff.removed.push((*name).to_string()),
                Some(current) if current != signature => diff.changed.push((*name).to_string()),
                Some(_) => {}
            }
        }
        diff.added = new
            .keys()
            .filter(|name| !old.contains_key(*name))
            .map(|name| (*name).to_string())
            .collect();
        diff
    }

    /// Fail if any name in `older` was removed or re-bound
    pub fn check_compatible(&self, older: &Self) -> Result<ManifestDiff, CatalogError> {
        let diff = self.diff(older);
        debug!(
            "Manifest diff: {} removed, {} added, {} changed",
            diff.removed.len(),
            diff.added.len(),
            diff.changed.len()
        );

        if diff.is_breaking() {
            warn!("Breaking alias change: removed {:?}, changed {:?}", diff.removed, diff.changed);
            return Err(CatalogError::BreakingChange {
                removed: diff.removed,
                changed: diff.changed,
            });
        }
        Ok(diff)
    }

    fn by_name(&self) -> BTreeMap<&str, Signature> {
        self.aliases
            .iter()
            .map(|entry| (entry.name.as_str(), entry.signature()))
            .collect()
    }
}

impl Config for AliasManifest {}
