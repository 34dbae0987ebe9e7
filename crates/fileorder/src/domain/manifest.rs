//! The per-directory order manifest and its reorder merge.

/// Desired display order of the children of exactly one directory.
///
/// Position encodes display rank. Names are plain base names exactly
/// as they appear in the directory listing. The sequence may reference
/// names that no longer exist on disk; stale names are ignored by the
/// merge and never cleaned up by the listing path.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderManifest {
    names: Vec<String>,
}

impl OrderManifest {
    /// Creates an empty manifest — the effective manifest of any
    /// directory without a sidecar file.
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Builds a manifest from names, preserving their order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses sidecar file content: one name per line, surrounding
    /// whitespace trimmed, empty lines discarded.
    ///
    /// Duplicates in a hand-edited file are preserved as-is; the first
    /// occurrence governs rank.
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        Self { names }
    }

    /// Serializes the manifest to sidecar file content, one name per
    /// line.
    pub fn serialize(&self) -> String {
        self.names.join("\n")
    }

    /// Returns the display rank of `name`: the index of its first
    /// occurrence in the manifest.
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    /// Computes the manifest resulting from dropping `dragged_names`
    /// onto the manifest's directory.
    ///
    /// For each dragged name, in drag order: its first existing
    /// occurrence (if any) is removed, then the name is appended at
    /// the end. Dropped items always land last regardless of where the
    /// drop cursor was released — that coarse append-to-end rule is
    /// the user-visible contract.
    pub fn apply_drop(&self, dragged_names: &[String]) -> Self {
        let mut names = self.names.clone();

        for dragged in dragged_names {
            if let Some(index) = names.iter().position(|existing| existing == dragged) {
                names.remove(index);
            }
            names.push(dragged.clone());
        }

        Self { names }
    }

    /// Returns the ranked names in display order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of ranked names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the manifest ranks no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
