//! Preview grid of the continuous colour maps.
//!
//! Layout and rendering are split: [`layout`] decides which maps go where
//! (one swatch per non-reversed continuous map, grouped by family, each
//! group headed by a title row), [`render`] paints the swatches into an
//! RGBA image. Glyphs are not drawn; titles and names live in the layout.

use std::path::Path;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::{ColormapError, ColormapResult};
use crate::registry::Colormaps;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Swatches per row.
    pub columns: usize,
    pub swatch_width: u32,
    pub swatch_height: u32,
    pub title_height: u32,
    /// Space between cells, and around the grid.
    pub gap: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            columns: 6,
            swatch_width: 160,
            swatch_height: 24,
            title_height: 12,
            gap: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewRow {
    Title(Category),
    Swatches(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLayout {
    pub columns: usize,
    pub rows: Vec<PreviewRow>,
}

impl PreviewLayout {
    /// Number of swatch cells.
    pub fn swatch_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| match row {
                PreviewRow::Swatches(names) => names.len(),
                PreviewRow::Title(_) => 0,
            })
            .sum()
    }

    /// Families in display order.
    pub fn groups(&self) -> impl Iterator<Item = Category> + '_ {
        self.rows.iter().filter_map(|row| match row {
            PreviewRow::Title(category) => Some(*category),
            PreviewRow::Swatches(_) => None,
        })
    }
}

/// Group the loaded continuous maps by family in catalog order.
///
/// Groups with no loaded maps are left out.
pub fn layout(colormaps: &Colormaps, catalog: &Catalog, columns: usize) -> PreviewLayout {
    let columns = columns.max(1);
    let cyclic = catalog.cyclic_names();

    let mut rows = Vec::new();
    for category in Category::CONTINUOUS {
        let names: Vec<String> = match category {
            Category::Sequential => owned(catalog.sequential),
            Category::Diverging => owned(catalog.diverging),
            Category::MultiSequential => owned(catalog.multi_sequential),
            _ => cyclic.clone(),
        };
        let present: Vec<String> = names
            .into_iter()
            .filter(|name| {
                let found = colormaps.contains(name);
                if !found {
                    debug!(name = %name, "Skipping preview of unloaded map");
                }
                found
            })
            .collect();
        if present.is_empty() {
            continue;
        }

        rows.push(PreviewRow::Title(category));
        rows.extend(
            present
                .chunks(columns)
                .map(|chunk| PreviewRow::Swatches(chunk.to_vec())),
        );
    }

    PreviewLayout { columns, rows }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

const BACKGROUND: Rgba<u8> = Rgba([248, 248, 248, 255]);
const TITLE_RULE: Rgba<u8> = Rgba([102, 102, 102, 255]);

/// Paint `layout` into an image.
///
/// The grid is as wide as its longest swatch row, whatever column count
/// the layout was built with. Fails if the image would not be addressable.
pub fn render(
    layout: &PreviewLayout,
    colormaps: &Colormaps,
    options: &PreviewOptions,
) -> ColormapResult<RgbaImage> {
    let gap = options.gap;
    let columns = layout
        .rows
        .iter()
        .map(|row| match row {
            PreviewRow::Swatches(names) => names.len(),
            PreviewRow::Title(_) => 0,
        })
        .max()
        .unwrap_or(0);
    let row_height = |row: &PreviewRow| match row {
        PreviewRow::Title(_) => options.title_height,
        PreviewRow::Swatches(_) => options.swatch_height,
    };
    let too_large = || ColormapError::PreviewTooLarge {
        width_cells: columns,
        height_cells: layout.rows.len(),
    };

    let width = extent(std::iter::repeat(options.swatch_width).take(columns), gap)
        .ok_or_else(too_large)?;
    let height = extent(layout.rows.iter().map(row_height), gap).ok_or_else(too_large)?;
    let (width, height) = (width.max(1), height.max(1));
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(too_large)?;

    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);

    let mut y = gap;
    for row in &layout.rows {
        match row {
            PreviewRow::Title(_) => {
                // rule along the bottom of the title band
                let rule = options.title_height.min(2);
                for yy in y + options.title_height - rule..y + options.title_height {
                    for xx in gap..width.saturating_sub(gap) {
                        img.put_pixel(xx, yy, TITLE_RULE);
                    }
                }
            }
            PreviewRow::Swatches(names) => {
                let mut x0 = gap;
                for name in names {
                    if let Some(cmap) = colormaps.get(name).filter(|c| !c.is_empty()) {
                        let lut = cmap.to_rgba8();
                        for dx in 0..options.swatch_width {
                            let t = (dx as f32 + 0.5) / options.swatch_width as f32;
                            let px = Rgba(lut[cmap.index(t)]);
                            for dy in 0..options.swatch_height {
                                img.put_pixel(x0 + dx, y + dy, px);
                            }
                        }
                    }
                    x0 += options.swatch_width + gap;
                }
            }
        }
        y += row_height(row) + gap;
    }

    Ok(img)
}

/// Length of `sizes` laid end to end with `gap` between and around them,
/// or `None` if it overflows.
fn extent(sizes: impl IntoIterator<Item = u32>, gap: u32) -> Option<u32> {
    let mut total = gap.checked_mul(2)?;
    for (i, size) in sizes.into_iter().enumerate() {
        total = total.checked_add(size)?;
        if i > 0 {
            total = total.checked_add(gap)?;
        }
    }
    Some(total)
}

/// Lay out, render and save the preview grid as an image file.
pub fn save_preview(
    colormaps: &Colormaps,
    catalog: &Catalog,
    options: &PreviewOptions,
    path: &Path,
) -> ColormapResult<PreviewLayout> {
    let layout = layout(colormaps, catalog, options.columns);
    let img = render(&layout, colormaps, options)?;
    img.save(path)?;
    info!(
        path = %path.display(),
        swatches = layout.swatch_count(),
        width = img.width(),
        height = img.height(),
        "Preview written"
    );
    Ok(layout)
}
