//! Song catalog
//!
//! The listing surface that feeds the playback controller: an ordered list of
//! playable items with id lookup, simple title search and queue resolution.

use crate::error::{EncoreError, Result};
use crate::types::{ItemId, PlayableItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Ordered song catalog
///
/// Insertion order is the listing order and is what `resolve` preserves when
/// building candidate queues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    items: Vec<PlayableItem>,
    index: HashMap<ItemId, usize>,
}

/// On-disk catalog representation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<PlayableItem>,
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        let mut catalog = Catalog::new();
        for item in file.items {
            // First entry wins, matching queue lookup semantics
            catalog.insert_if_absent(item);
        }
        catalog
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        Self {
            items: catalog.items,
        }
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from items, rejecting duplicate ids
    pub fn from_items(items: Vec<PlayableItem>) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON (`{"items": [...]}`)
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Add an item to the end of the catalog
    pub fn insert(&mut self, item: PlayableItem) -> Result<()> {
        if self.index.contains_key(&item.id) {
            return Err(EncoreError::Duplicate(item.id.to_string()));
        }
        self.insert_if_absent(item);
        Ok(())
    }

    fn insert_if_absent(&mut self, item: PlayableItem) {
        if !self.index.contains_key(&item.id) {
            self.index.insert(item.id.clone(), self.items.len());
            self.items.push(item);
        }
    }

    /// Look up an item by id
    pub fn get(&self, id: &ItemId) -> Option<&PlayableItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Look up an item by id, failing if blank or absent
    pub fn require(&self, id: &ItemId) -> Result<&PlayableItem> {
        if id.as_str().trim().is_empty() {
            return Err(EncoreError::invalid_input("item id must not be blank"));
        }
        self.get(id)
            .ok_or_else(|| EncoreError::not_found("Item", id.as_str()))
    }

    /// Resolve ids into a candidate queue, preserving the requested order
    pub fn resolve(&self, ids: &[ItemId]) -> Result<Vec<PlayableItem>> {
        ids.iter()
            .map(|id| self.require(id).cloned())
            .collect()
    }

    /// Case-insensitive title search; an empty term matches everything
    pub fn search(&self, term: &str) -> Vec<&PlayableItem> {
        let needle = term.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// All items in listing order
    pub fn items(&self) -> &[PlayableItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
