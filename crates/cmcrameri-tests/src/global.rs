//! Integration tests for the process-wide registry.
//!
//! All tests share one process, so each uses its own key prefix.

use cmcrameri::{
    global_registry, lookup_global, Catalog, ColormapError, ColormapLoader, ColormapRegistry,
    LoaderConfig,
};

use crate::fixtures::{write_catalog, write_table};

#[test]
fn init_publishes_every_entry_globally() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    let config = LoaderConfig::new(tmp.path()).with_prefix("it-init.");

    let maps = cmcrameri::init(&config).unwrap();
    assert!(cmcrameri::loaded().is_some());

    for cmap in maps {
        let global = lookup_global("it-init.", cmap.name())
            .unwrap_or_else(|| panic!("{} missing from global registry", cmap.name()));
        assert_eq!(global.colors(), cmap.colors());
    }

    // second call returns the same instance without rebuilding
    let again = cmcrameri::init(&LoaderConfig::new("/nonexistent")).unwrap();
    assert!(std::ptr::eq(maps, again));
}

#[test]
fn global_build_rejects_reregistration() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_table(tmp.path(), "lapaz", 256, false);
    let loader = ColormapLoader::default().with_prefix("it-dup.");

    let maps = loader.build(tmp.path(), &mut global_registry()).unwrap();
    assert_eq!(maps.len(), 2);
    assert!(global_registry().contains("it-dup.lapaz_r"));

    let err = loader
        .build(tmp.path(), &mut global_registry())
        .unwrap_err();
    assert!(matches!(err, ColormapError::DuplicateName(ref n) if n == "it-dup.lapaz"));
}

#[test]
fn global_lookup_is_shared_across_handles() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_table(tmp.path(), "tokyo", 256, true);
    ColormapLoader::default()
        .with_prefix("it-shared.")
        .build(tmp.path(), &mut global_registry())
        .unwrap();

    let reg = global_registry();
    let fwd = reg.lookup("it-shared.tokyo").unwrap();
    let rev = reg.lookup("it-shared.tokyo_r").unwrap();
    assert_eq!(fwd.colors().first(), rev.colors().last());
    assert!(reg.lookup("tokyo").is_none());
}
