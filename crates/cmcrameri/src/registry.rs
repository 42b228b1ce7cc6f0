//! Name-keyed colour map stores.
//!
//! [`Colormaps`] is the result of a build: every loaded map in registration
//! order. [`ColormapRegistry`] is the external namespace the loader publishes
//! into under a prefix; [`GlobalRegistry`] is the process-wide instance other
//! code resolves names against.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::category::Category;
use crate::colormap::ListedColormap;
use crate::error::{ColormapError, ColormapResult};

/// External colour map namespace.
pub trait ColormapRegistry {
    /// Publish a map. Registering a name twice is an error.
    fn register(&mut self, name: &str, cmap: Arc<ListedColormap>) -> ColormapResult<()>;

    fn lookup(&self, name: &str) -> Option<Arc<ListedColormap>>;
}

/// Registry backed by a plain map, for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    maps: HashMap<String, Arc<ListedColormap>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl ColormapRegistry for InMemoryRegistry {
    fn register(&mut self, name: &str, cmap: Arc<ListedColormap>) -> ColormapResult<()> {
        if self.maps.contains_key(name) {
            return Err(ColormapError::DuplicateName(name.to_string()));
        }
        self.maps.insert(name.to_string(), cmap);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<Arc<ListedColormap>> {
        self.maps.get(name).cloned()
    }
}

static GLOBAL_MAPS: LazyLock<RwLock<HashMap<String, Arc<ListedColormap>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Handle onto the process-wide registry. Additive only: there is no removal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalRegistry;

/// The process-wide registry.
pub fn global_registry() -> GlobalRegistry {
    GlobalRegistry
}

impl GlobalRegistry {
    pub fn len(&self) -> usize {
        GLOBAL_MAPS.read().len()
    }

    pub fn is_empty(&self) -> bool {
        GLOBAL_MAPS.read().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        GLOBAL_MAPS.read().contains_key(name)
    }
}

impl ColormapRegistry for GlobalRegistry {
    fn register(&mut self, name: &str, cmap: Arc<ListedColormap>) -> ColormapResult<()> {
        let mut maps = GLOBAL_MAPS.write();
        if maps.contains_key(name) {
            return Err(ColormapError::DuplicateName(name.to_string()));
        }
        maps.insert(name.to_string(), cmap);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<Arc<ListedColormap>> {
        GLOBAL_MAPS.read().get(name).cloned()
    }
}

/// Loaded colour maps keyed by name, plus the files they came from.
#[derive(Debug, Default)]
pub struct Colormaps {
    entries: Vec<Arc<ListedColormap>>,
    index: HashMap<String, usize>,
    paths: Vec<PathBuf>,
}

impl Colormaps {
    pub(crate) fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            paths,
        }
    }

    pub(crate) fn insert(&mut self, cmap: Arc<ListedColormap>) -> ColormapResult<()> {
        if self.index.contains_key(cmap.name()) {
            return Err(ColormapError::DuplicateName(cmap.name().to_string()));
        }
        self.index.insert(cmap.name().to_string(), self.entries.len());
        self.entries.push(cmap);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ListedColormap>> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Like [`get`](Self::get), with an error naming the missing map.
    pub fn require(&self, name: &str) -> ColormapResult<&Arc<ListedColormap>> {
        self.get(name)
            .ok_or_else(|| ColormapError::UnknownColormap(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ListedColormap>> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.name())
    }

    /// Source files in discovery order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.paths
            .iter()
            .find(|p| p.file_stem().and_then(|s| s.to_str()) == Some(name))
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of continuous source tables, i.e. entries that are neither
    /// categorical nor reversed. A full build holds
    /// `2 * continuous_file_count() + categorical_count()` entries.
    pub fn continuous_file_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|c| c.category() != Category::Categorical && !c.is_reversed())
            .count()
    }

    pub fn categorical_count(&self) -> usize {
        self.by_category(Category::Categorical).count()
    }

    /// Entries of one family, reversed variants included.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Arc<ListedColormap>> {
        self.entries
            .iter()
            .filter(move |c| c.category() == category)
    }
}

impl<'a> IntoIterator for &'a Colormaps {
    type Item = &'a Arc<ListedColormap>;
    type IntoIter = std::slice::Iter<'a, Arc<ListedColormap>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
