//! Integration tests for building the full catalog.

use cmcrameri::{
    Catalog, Category, ColormapError, ColormapLoader, ColormapRegistry, InMemoryRegistry,
    PackagingViolation,
};

use cmcrameri::catalog::CATEGORICAL_MARKER;
use proptest::prelude::*;

use crate::fixtures::{write_catalog, write_stems, write_table};

#[test]
fn full_catalog_builds_with_expected_entry_count() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let catalog = Catalog::crameri();
    let stems = write_catalog(tmp.path(), &catalog);

    let mut reg = InMemoryRegistry::new();
    let maps = ColormapLoader::new(catalog).build(tmp.path(), &mut reg).unwrap();

    let categorical = catalog.categorical_bases().count();
    assert_eq!(maps.paths().len(), stems.len());
    assert_eq!(maps.continuous_file_count(), stems.len() - categorical);
    assert_eq!(maps.categorical_count(), categorical);
    assert_eq!(
        maps.len(),
        2 * maps.continuous_file_count() + maps.categorical_count()
    );
    assert_eq!(reg.len(), maps.len());
}

fn stem_subsets() -> impl Strategy<Value = Vec<String>> {
    let stems = Catalog::crameri().expected_stems();
    let len = stems.len();
    prop::sample::subsequence(stems, 0..=len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn any_subset_of_the_data_set_builds(stems in stem_subsets()) {
        let tmp = tempfile::tempdir().expect("failed to create tempdir");
        write_stems(tmp.path(), &stems);

        let mut reg = InMemoryRegistry::new();
        let maps = ColormapLoader::default().build(tmp.path(), &mut reg).unwrap();

        let categorical = stems.iter().filter(|s| s.ends_with(CATEGORICAL_MARKER)).count();
        prop_assert_eq!(maps.paths().len(), stems.len());
        prop_assert_eq!(maps.continuous_file_count(), stems.len() - categorical);
        prop_assert_eq!(maps.len(), 2 * (stems.len() - categorical) + categorical);
        prop_assert_eq!(reg.len(), maps.len());
    }
}

#[test]
fn every_discovered_file_has_exactly_one_category() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let catalog = Catalog::crameri();
    write_catalog(tmp.path(), &catalog);

    let loader = ColormapLoader::new(catalog);
    for file in loader.discover(tmp.path()).unwrap() {
        let flags = [
            file.is_cyclic(),
            !file.is_cyclic() && catalog.is_sequential(&file.base),
            !file.is_cyclic() && catalog.is_diverging(&file.base),
            !file.is_cyclic() && catalog.is_multi_sequential(&file.base),
        ];
        assert_eq!(
            flags.iter().filter(|f| **f).count(),
            1,
            "{} matched {:?}",
            file.name,
            flags
        );
        assert!(file.classify(&catalog).is_ok());
    }
}

#[test]
fn category_counts_match_tables() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let catalog = Catalog::crameri();
    write_catalog(tmp.path(), &catalog);
    let maps = ColormapLoader::new(catalog)
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();

    let count = |c| maps.by_category(c).count();
    assert_eq!(count(Category::Sequential), 2 * catalog.sequential.len());
    assert_eq!(count(Category::Diverging), 2 * catalog.diverging.len());
    assert_eq!(count(Category::MultiSequential), 2 * catalog.multi_sequential.len());
    assert_eq!(count(Category::Cyclic), 2 * catalog.cyclic_bases.len());
    assert_eq!(count(Category::Categorical), 16);
}

#[test]
fn sample_counts_by_family() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    let maps = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();

    for cmap in &maps {
        let expected = match cmap.category() {
            Category::Categorical => 100,
            _ => 256,
        };
        assert_eq!(cmap.len(), expected, "{}", cmap.name());
    }
}

#[test]
fn categorical_maps_have_no_reversed_variant() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    let maps = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();

    for cmap in maps.by_category(Category::Categorical) {
        assert!(!cmap.is_reversed());
        assert!(!maps.contains(&format!("{}_r", cmap.name())));
    }
    for cmap in maps.iter().filter(|c| c.category() != Category::Categorical) {
        if !cmap.is_reversed() {
            assert!(maps.contains(&format!("{}_r", cmap.name())));
        }
    }
}

#[test]
fn reversed_entries_round_trip() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    let maps = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();

    for cmap in maps.iter().filter(|c| c.is_reversed()) {
        let forward = maps.get(cmap.name().trim_end_matches("_r")).unwrap();
        let back = cmap.reversed();
        assert_eq!(back.name(), forward.name());
        assert_eq!(back.colors(), forward.colors());
    }
}

#[test]
fn registry_entries_match_loaded_data() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    let mut reg = InMemoryRegistry::new();
    let maps = ColormapLoader::default().build(tmp.path(), &mut reg).unwrap();

    for cmap in &maps {
        let published = reg
            .lookup(&format!("cmc.{}", cmap.name()))
            .unwrap_or_else(|| panic!("cmc.{} not registered", cmap.name()));
        assert_eq!(published.colors(), cmap.colors());
    }
}

#[test]
fn paths_are_sorted_by_file_name() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    let maps = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();

    let names: Vec<_> = maps.paths().iter().map(|p| p.file_name().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn roma_scenario_yields_four_entries() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_table(tmp.path(), "roma", 256, false);
    write_table(tmp.path(), "romaO", 256, false);

    let maps = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();
    let mut names: Vec<_> = maps.names().collect();
    names.sort();
    assert_eq!(names, ["roma", "romaO", "romaO_r", "roma_r"]);
}

#[test]
fn batlow_white_categorical_is_rejected() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_table(tmp.path(), "batlowWS", 100, false);

    let err = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap_err();
    match err {
        ColormapError::Packaging(PackagingViolation::NotEligible { name, base, kind }) => {
            assert_eq!(name, "batlowWS");
            assert_eq!(base, "batlowW");
            assert_eq!(kind, "categorical");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn stray_table_aborts_whole_build() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());
    write_table(tmp.path(), "viridis", 256, false);

    let mut reg = InMemoryRegistry::new();
    let err = ColormapLoader::default()
        .build(tmp.path(), &mut reg)
        .unwrap_err();
    assert!(err.is_packaging_violation());
    assert!(reg.is_empty());
}

#[test]
fn out_of_sync_tables_are_detected() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_catalog(tmp.path(), &Catalog::crameri());

    // tables that forgot about the newest diverging map
    let stale = Catalog {
        diverging: &["broc", "cork", "vik", "lisbon", "tofino", "berlin", "roma", "bam"],
        ..Catalog::crameri()
    };
    let err = ColormapLoader::new(stale)
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap_err();
    assert!(matches!(
        err,
        ColormapError::Packaging(PackagingViolation::Uncategorized { ref name, matches: 0 })
            if name == "vanimo"
    ));
}

#[test]
fn summaries_serialize_to_json() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    write_table(tmp.path(), "hawaii", 256, true);
    let maps = ColormapLoader::default()
        .build(tmp.path(), &mut InMemoryRegistry::new())
        .unwrap();

    let summaries: Vec<_> = maps.iter().map(|c| c.summary()).collect();
    let json = serde_json::to_value(&summaries).unwrap();
    assert_eq!(json[0]["name"], "hawaii");
    assert_eq!(json[0]["category"], "Sequential");
    assert_eq!(json[1]["name"], "hawaii_r");
    assert_eq!(json[1]["reversed"], true);
    assert_eq!(json[1]["samples"], 256);
}
