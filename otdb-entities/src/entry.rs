use strum::{Display, EnumIter, EnumString};

/// The kinds of map entries kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EntryKind {
    Suggestion,
    Report,
    Highlight,
}

impl EntryKind {
    /// Suggestions and reports carry a comment thread, highlights do not.
    pub const fn has_comments(self) -> bool {
        matches!(self, Self::Suggestion | Self::Report)
    }
}
