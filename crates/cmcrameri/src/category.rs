//! Data file discovery metadata and categorization.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CATEGORICAL_MARKER, CYCLIC_MARKER};
use crate::error::PackagingViolation;

/// Colour map family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Sequential,
    Diverging,
    MultiSequential,
    Cyclic,
    Categorical,
}

impl Category {
    /// Continuous families in preview order.
    pub const CONTINUOUS: [Category; 4] = [
        Self::Sequential,
        Self::Diverging,
        Self::MultiSequential,
        Self::Cyclic,
    ];

    /// Human-readable group title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::Diverging => "Diverging",
            Self::MultiSequential => "Multi-sequential",
            Self::Cyclic => "Cyclic",
            Self::Categorical => "Categorical",
        }
    }

    /// Number of samples a map of this family must carry.
    pub fn sample_count(self) -> usize {
        match self {
            Self::Categorical => cmcrameri_core::samples::CATEGORICAL,
            _ => cmcrameri_core::samples::CONTINUOUS,
        }
    }

    /// Categorical palettes have no meaningful reversal.
    pub fn is_reversible(self) -> bool {
        self != Self::Categorical
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Trailing marker character on a file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Categorical,
    Cyclic,
}

/// A discovered colour table on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColormapFile {
    pub path: PathBuf,
    /// File stem, used as the colour map name.
    pub name: String,
    /// Name with the marker stripped, used for table lookups.
    pub base: String,
    pub marker: Option<Marker>,
}

impl ColormapFile {
    /// Derive naming metadata from a `.txt` path. Returns `Ok(None)` for
    /// other files; a `.txt` table whose stem is not UTF-8 is an error.
    pub fn from_path(path: &Path) -> Result<Option<Self>, PackagingViolation> {
        if path.extension().map_or(true, |ext| ext != "txt") {
            return Ok(None);
        }
        let Some(stem) = path.file_stem() else {
            return Ok(None);
        };
        let name = stem
            .to_str()
            .ok_or_else(|| PackagingViolation::InvalidName {
                name: stem.to_string_lossy().into_owned(),
            })?
            .to_string();

        let marker = if name.ends_with(CATEGORICAL_MARKER) {
            Some(Marker::Categorical)
        } else if name.ends_with(CYCLIC_MARKER) {
            Some(Marker::Cyclic)
        } else {
            None
        };
        let base = match marker {
            // markers are ASCII, so dropping one byte stays on a char boundary
            Some(_) => name[..name.len() - 1].to_string(),
            None => name.clone(),
        };

        Ok(Some(Self {
            path: path.to_path_buf(),
            name,
            base,
            marker,
        }))
    }

    pub fn is_categorical(&self) -> bool {
        self.marker == Some(Marker::Categorical)
    }

    pub fn is_cyclic(&self) -> bool {
        self.marker == Some(Marker::Cyclic)
    }

    /// Assign a category and check marker eligibility against the tables.
    pub fn classify(&self, catalog: &Catalog) -> Result<Category, PackagingViolation> {
        let is_cyclic = self.is_cyclic();
        let (is_sequential, is_diverging, is_multi_sequential) = if is_cyclic {
            (false, false, false)
        } else {
            (
                catalog.is_sequential(&self.base),
                catalog.is_diverging(&self.base),
                catalog.is_multi_sequential(&self.base),
            )
        };

        let flags = [is_cyclic, is_sequential, is_diverging, is_multi_sequential];
        let matches = flags.iter().filter(|f| **f).count();
        if matches != 1 {
            return Err(PackagingViolation::Uncategorized {
                name: self.name.clone(),
                matches,
            });
        }

        if self.is_categorical() && !catalog.is_categorical_eligible(&self.base) {
            return Err(PackagingViolation::NotEligible {
                name: self.name.clone(),
                base: self.base.clone(),
                kind: "categorical",
            });
        }
        if is_cyclic && !catalog.is_cyclic_eligible(&self.base) {
            return Err(PackagingViolation::NotEligible {
                name: self.name.clone(),
                base: self.base.clone(),
                kind: "cyclic",
            });
        }

        Ok(if self.is_categorical() {
            Category::Categorical
        } else if is_cyclic {
            Category::Cyclic
        } else if is_sequential {
            Category::Sequential
        } else if is_diverging {
            Category::Diverging
        } else {
            Category::MultiSequential
        })
    }
}
