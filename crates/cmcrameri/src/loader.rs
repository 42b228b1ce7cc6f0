//! Colour table discovery, validation and registration.
//!
//! One linear pass over a data directory: every `*.txt` table is
//! categorized against the [`Catalog`], checked for its sample count,
//! turned into a [`ListedColormap`] (plus its `_r` variant unless it is
//! categorical) and published into a [`ColormapRegistry`]. Any violation
//! aborts the whole build.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use cmcrameri_core::load_matrix;
use parking_lot::{const_mutex, Mutex};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::category::ColormapFile;
use crate::colormap::ListedColormap;
use crate::config::{LoaderConfig, DEFAULT_PREFIX};
use crate::error::{ColormapError, ColormapResult, PackagingViolation};
use crate::registry::{global_registry, ColormapRegistry, Colormaps};

/// Builds [`Colormaps`] from a directory of colour tables.
#[derive(Debug, Clone)]
pub struct ColormapLoader {
    catalog: Catalog,
    prefix: String,
}

impl ColormapLoader {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(Catalog::crameri()).with_prefix(config.prefix.clone())
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// List `*.txt` tables in `dir`, sorted by file name. Symlinks are
    /// followed; a link that does not resolve is an I/O error.
    pub fn discover(&self, dir: &Path) -> ColormapResult<Vec<ColormapFile>> {
        let io_err = |source| ColormapError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            let Some(file) = ColormapFile::from_path(&path)? else {
                continue;
            };
            let metadata = std::fs::metadata(&path).map_err(|source| ColormapError::Io {
                path: path.clone(),
                source,
            })?;
            if metadata.is_file() {
                files.push(file);
            }
        }
        files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(files)
    }

    /// Load every table in `dir` and publish each map into `registry`
    /// under `<prefix><name>`.
    pub fn build(
        &self,
        dir: &Path,
        registry: &mut dyn ColormapRegistry,
    ) -> ColormapResult<Colormaps> {
        let files = self.discover(dir)?;
        info!(dir = %dir.display(), files = files.len(), "Loading colour maps");

        // Nothing is published until every table has validated.
        let mut loaded = Vec::with_capacity(files.len());
        for file in &files {
            loaded.push(self.load_file(file)?);
        }

        let paths: Vec<PathBuf> = files.into_iter().map(|f| f.path).collect();
        let mut maps = Colormaps::new(paths);
        for cmap in loaded {
            let reversed = cmap
                .category()
                .is_reversible()
                .then(|| cmap.reversed().into_shared());
            self.publish(&mut maps, registry, cmap.into_shared())?;
            if let Some(reversed) = reversed {
                self.publish(&mut maps, registry, reversed)?;
            }
        }

        info!(
            entries = maps.len(),
            prefix = %self.prefix,
            "Colour maps registered"
        );
        Ok(maps)
    }

    /// Categorize, load and validate a single table.
    pub fn load_file(&self, file: &ColormapFile) -> ColormapResult<ListedColormap> {
        let category = file.classify(&self.catalog)?;

        let matrix = load_matrix(&file.path).map_err(|source| ColormapError::Matrix {
            path: file.path.clone(),
            source,
        })?;
        let expected = category.sample_count();
        if matrix.rows != expected {
            return Err(PackagingViolation::SampleCount {
                name: file.name.clone(),
                expected,
                got: matrix.rows,
            }
            .into());
        }

        let cmap = ListedColormap::from_matrix(&file.name, category, &matrix)?;
        debug!(
            name = %file.name,
            category = %category,
            samples = cmap.len(),
            channels = matrix.cols,
            "Loaded colour table"
        );
        Ok(cmap)
    }

    /// Register `cmap` externally and record it locally. A name already in
    /// `maps` is rejected before the registry sees it.
    fn publish(
        &self,
        maps: &mut Colormaps,
        registry: &mut dyn ColormapRegistry,
        cmap: Arc<ListedColormap>,
    ) -> ColormapResult<()> {
        if maps.contains(cmap.name()) {
            return Err(ColormapError::DuplicateName(cmap.name().to_string()));
        }
        let key = format!("{}{}", self.prefix, cmap.name());
        registry.register(&key, Arc::clone(&cmap))?;
        maps.insert(cmap)
    }
}

impl Default for ColormapLoader {
    fn default() -> Self {
        Self::new(Catalog::crameri())
    }
}

static LOADED: OnceLock<Colormaps> = OnceLock::new();
static INIT_LOCK: Mutex<()> = const_mutex(());

/// Build the shipped colour maps once per process against the global
/// registry. Later calls return the same instance and ignore `config`.
pub fn init(config: &LoaderConfig) -> ColormapResult<&'static Colormaps> {
    if let Some(maps) = LOADED.get() {
        return Ok(maps);
    }
    let _guard = INIT_LOCK.lock();
    if let Some(maps) = LOADED.get() {
        return Ok(maps);
    }

    let maps =
        ColormapLoader::from_config(config).build(&config.data_dir, &mut global_registry())?;
    Ok(LOADED.get_or_init(|| maps))
}

/// The maps built by [`init`], if it has run.
pub fn loaded() -> Option<&'static Colormaps> {
    LOADED.get()
}
