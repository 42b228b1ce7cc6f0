//! Static name tables for the shipped colour maps.

/// Suffix marking a categorical palette file (`batlowS`).
pub const CATEGORICAL_MARKER: char = 'S';

/// Suffix marking a cyclic map file (`romaO`).
pub const CYCLIC_MARKER: char = 'O';

/// Suffix appended to the name of a reversed map.
pub const REVERSED_SUFFIX: &str = "_r";

const SEQUENTIAL: &[&str] = &[
    "batlow", "batlowW", "batlowK", "devon", "lajolla", "bamako", "davos", "bilbao", "nuuk",
    "oslo", "grayC", "hawaii", "lapaz", "tokyo", "buda", "acton", "turku", "imola",
];

const DIVERGING: &[&str] = &[
    "broc", "cork", "vik", "lisbon", "tofino", "berlin", "roma", "bam", "vanimo",
];

const MULTI_SEQUENTIAL: &[&str] = &["oleron", "bukavu", "fes"];

const CATEGORICAL_EXCLUDED: &[&str] = &["batlowW", "batlowK"];

const CYCLIC_BASES: &[&str] = &["roma", "bam", "broc", "cork", "vik"];

/// Membership tables used to categorize data files.
///
/// The sequential, diverging and multi-sequential tables must be disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub sequential: &'static [&'static str],
    pub diverging: &'static [&'static str],
    pub multi_sequential: &'static [&'static str],
    /// Sequential bases with no categorical palette.
    pub categorical_excluded: &'static [&'static str],
    pub cyclic_bases: &'static [&'static str],
}

impl Catalog {
    /// The tables matching the shipped data set.
    pub const fn crameri() -> Self {
        Self {
            sequential: SEQUENTIAL,
            diverging: DIVERGING,
            multi_sequential: MULTI_SEQUENTIAL,
            categorical_excluded: CATEGORICAL_EXCLUDED,
            cyclic_bases: CYCLIC_BASES,
        }
    }

    pub fn is_sequential(&self, base: &str) -> bool {
        self.sequential.contains(&base)
    }

    pub fn is_diverging(&self, base: &str) -> bool {
        self.diverging.contains(&base)
    }

    pub fn is_multi_sequential(&self, base: &str) -> bool {
        self.multi_sequential.contains(&base)
    }

    pub fn is_categorical_eligible(&self, base: &str) -> bool {
        self.is_sequential(base) && !self.categorical_excluded.contains(&base)
    }

    pub fn is_cyclic_eligible(&self, base: &str) -> bool {
        self.cyclic_bases.contains(&base)
    }

    /// Bases that ship a categorical palette, in table order.
    pub fn categorical_bases(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sequential
            .iter()
            .copied()
            .filter(|name| !self.categorical_excluded.contains(name))
    }

    /// File stems of the categorical palettes (`batlowS`, ...).
    pub fn categorical_names(&self) -> Vec<String> {
        self.categorical_bases()
            .map(|base| format!("{base}{CATEGORICAL_MARKER}"))
            .collect()
    }

    /// File stems of the cyclic maps (`romaO`, ...).
    pub fn cyclic_names(&self) -> Vec<String> {
        self.cyclic_bases
            .iter()
            .map(|base| format!("{base}{CYCLIC_MARKER}"))
            .collect()
    }

    /// Every file stem the tables expect to find on disk.
    pub fn expected_stems(&self) -> Vec<String> {
        let mut stems: Vec<String> = self
            .sequential
            .iter()
            .chain(self.diverging)
            .chain(self.multi_sequential)
            .map(|s| s.to_string())
            .collect();
        stems.extend(self.categorical_names());
        stems.extend(self.cyclic_names());
        stems.sort();
        stems
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::crameri()
    }
}
