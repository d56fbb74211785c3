use crate::repositories::*;

/// Convenient combination of all repositories, the full surface of the
/// external store.
pub trait Db: SuggestionRepo + ReportRepo + HighlightRepo + UserRepo {}

impl<T> Db for T where T: SuggestionRepo + ReportRepo + HighlightRepo + UserRepo {}
