use serde::{Deserialize, Serialize};

/// One coordinated migration of a group of packages through the release
/// pipeline.
///
/// Value record: immutable once parsed. A feed refresh yields a wholly new
/// `Vec<Transition>` that replaces the previous one; no record is mutated in
/// place after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub name: String,
    /// Member packages in feed order. Duplicates are kept as-is; the feed is
    /// assumed well-formed upstream. May be empty, never absent.
    #[serde(default)]
    pub packages: Vec<String>,
}

impl Transition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            packages: Vec::new(),
        }
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}
