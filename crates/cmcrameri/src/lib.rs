//! cmcrameri - Fabio Crameri's scientific colour maps as named, loadable objects.
//!
//! A data directory of `*.txt` colour tables is scanned once, every table is
//! checked against the static name tables in [`Catalog`], and the resulting
//! [`ListedColormap`]s (plus `_r` reversed variants for continuous maps) are
//! exposed through [`Colormaps`] and published to a [`ColormapRegistry`]
//! under a `cmc.` prefix.

pub mod catalog;
pub mod category;
pub mod colormap;
pub mod config;
pub mod error;
pub mod loader;
pub mod preview;
pub mod registry;

pub use catalog::Catalog;
pub use category::{Category, ColormapFile, Marker};
pub use colormap::{ColormapSummary, ListedColormap};
pub use config::LoaderConfig;
pub use error::{ColormapError, ColormapResult, PackagingViolation};
pub use loader::{init, loaded, ColormapLoader};
pub use preview::{PreviewLayout, PreviewOptions, PreviewRow};
pub use registry::{
    global_registry, ColormapRegistry, Colormaps, GlobalRegistry, InMemoryRegistry,
};

/// Resolve `<prefix><name>` in the process-wide registry.
pub fn lookup_global(prefix: &str, name: &str) -> Option<std::sync::Arc<ListedColormap>> {
    global_registry().lookup(&format!("{prefix}{name}"))
}
