//! Name-based selection of archive entries.

use std::path::Path;

/// Pack names excluded from extraction by default.
pub const DEFAULT_PACKS: [&str; 3] = ["BreathOfTheWild", "MarioKart8", "SuperMario3DWorld"];

/// Ordered set of name substrings deciding which entries are written.
///
/// An entry is extracted when the filter is empty, or when its target path
/// contains none of the filter strings. The strings therefore name packs to
/// leave out.
///
/// # Examples
///
/// ```
/// use gfxpack_core::types::SelectionFilter;
/// use std::path::Path;
///
/// let filter = SelectionFilter::new(["BreathOfTheWild"]);
/// assert!(!filter.should_extract(Path::new("graphicPacks/BreathOfTheWild/a.txt")));
/// assert!(filter.should_extract(Path::new("graphicPacks/Other/b.txt")));
///
/// assert!(SelectionFilter::all().should_extract(Path::new("anything")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFilter {
    names: Vec<String>,
}

impl SelectionFilter {
    /// Creates a filter from name substrings. Duplicates are dropped, first
    /// occurrence order is kept.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self { names: unique }
    }

    /// Creates an empty filter that selects every entry.
    #[must_use]
    pub fn all() -> Self {
        Self { names: Vec::new() }
    }

    /// Returns the configured names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` when no names are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Decides whether the entry written to `target` is extracted.
    ///
    /// Matching is a case-sensitive substring test on the full target path.
    #[must_use]
    pub fn should_extract(&self, target: &Path) -> bool {
        if self.names.is_empty() {
            return true;
        }

        let target = target.to_string_lossy();
        !self.names.iter().any(|name| target.contains(name.as_str()))
    }
}

impl Default for SelectionFilter {
    /// Filter holding [`DEFAULT_PACKS`].
    fn default() -> Self {
        Self::new(DEFAULT_PACKS)
    }
}
