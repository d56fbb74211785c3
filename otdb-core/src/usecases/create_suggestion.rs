use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewTreeSuggestion {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// Store a new planting suggestion.
///
/// The author starts with an implicit upvote on their own suggestion,
/// so a fresh suggestion always scores 1.
pub fn create_suggestion<R>(
    repo: &R,
    author: &User,
    region: &MapBbox,
    new_suggestion: NewTreeSuggestion,
) -> Result<TreeSuggestion>
where
    R: SuggestionRepo,
{
    let NewTreeSuggestion {
        lat,
        lng,
        title,
        description,
        image_urls,
    } = new_suggestion;
    let pos = super::validate_new_entry(region, lat, lng, &title, &description, image_urls.len())?;
    let upvoted_by = vec![author.id.clone()];
    let downvoted_by = vec![];
    let suggestion = TreeSuggestion {
        id: Id::new(),
        pos,
        title,
        description,
        image_urls,
        votes: VoteScore::tally(&upvoted_by, &downvoted_by),
        upvoted_by,
        downvoted_by,
        comments: vec![],
        author_id: author.id.clone(),
        author_name: author.name.clone(),
        created_at: Timestamp::now(),
        status: SuggestionStatus::default(),
    };
    repo.create_suggestion(suggestion.clone())?;
    log::debug!("User {} created suggestion {}", author.id, suggestion.id);
    Ok(suggestion)
}
