//! Listed colour maps: an ordered table of colour samples.

use std::sync::Arc;

use cmcrameri_core::{Color, Matrix};
use serde::Serialize;

use crate::catalog::REVERSED_SUFFIX;
use crate::category::Category;
use crate::error::PackagingViolation;

/// Named colour map backed by a fixed list of samples.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedColormap {
    name: String,
    category: Category,
    colors: Vec<Color>,
}

/// Serializable summary of a colour map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColormapSummary {
    pub name: String,
    pub category: Category,
    pub samples: usize,
    pub reversed: bool,
}

impl ListedColormap {
    pub fn new(name: impl Into<String>, category: Category, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            category,
            colors,
        }
    }

    /// Build from a loaded table, checking width and channel range.
    pub fn from_matrix(
        name: &str,
        category: Category,
        matrix: &Matrix,
    ) -> Result<Self, PackagingViolation> {
        let mut colors = Vec::with_capacity(matrix.rows);
        for (index, row) in matrix.iter_rows().enumerate() {
            let color = Color::from_slice(row).ok_or_else(|| PackagingViolation::ChannelCount {
                name: name.to_string(),
                got: matrix.cols,
            })?;
            if !color.is_normalized() {
                return Err(PackagingViolation::ValueOutOfRange {
                    name: name.to_string(),
                    index,
                });
            }
            colors.push(color);
        }
        Ok(Self::new(name, category, colors))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// True if this is the `_r` variant of another map.
    pub fn is_reversed(&self) -> bool {
        self.name.ends_with(REVERSED_SUFFIX)
    }

    /// Same samples in reverse order. The name toggles the `_r` suffix,
    /// so reversing twice gives back the original map.
    pub fn reversed(&self) -> Self {
        let name = match self.name.strip_suffix(REVERSED_SUFFIX) {
            Some(base) => base.to_string(),
            None => format!("{}{}", self.name, REVERSED_SUFFIX),
        };
        let mut colors = self.colors.clone();
        colors.reverse();
        Self {
            name,
            category: self.category,
            colors,
        }
    }

    /// Table index for `t` in `[0, 1]`, using the listed-colormap bin rule
    /// `floor(t * N)` clamped to the table. NaN maps to the first sample.
    pub fn index(&self, t: f32) -> usize {
        let n = self.colors.len();
        if n == 0 || t.is_nan() {
            return 0;
        }
        ((t * n as f32).floor().max(0.0) as usize).min(n - 1)
    }

    /// Colour for `t`, see [`index`](Self::index).
    pub fn sample(&self, t: f32) -> Color {
        self.colors.get(self.index(t)).copied().unwrap_or_default()
    }

    /// 8-bit RGBA lookup table, one entry per sample.
    pub fn to_rgba8(&self) -> Vec<[u8; 4]> {
        self.colors.iter().map(|c| c.to_rgba8()).collect()
    }

    pub fn summary(&self) -> ColormapSummary {
        ColormapSummary {
            name: self.name.clone(),
            category: self.category,
            samples: self.colors.len(),
            reversed: self.is_reversed(),
        }
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
