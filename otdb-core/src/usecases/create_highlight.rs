use super::prelude::*;
use crate::authorization::user::authorize_role;

#[derive(Debug, Clone)]
pub struct NewHighlight {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub description: String,
    pub image_urls: Vec<String>,
}

/// Store a new highlight of a remarkable tree.
///
/// Highlights are curated content, so creating one requires at least
/// the moderator role.
pub fn create_highlight<R>(
    repo: &R,
    author: &User,
    region: &MapBbox,
    new_highlight: NewHighlight,
) -> Result<Highlight>
where
    R: HighlightRepo,
{
    authorize_role(author, Role::Moderator).map_err(|_| Error::Forbidden)?;
    let NewHighlight {
        lat,
        lng,
        title,
        description,
        image_urls,
    } = new_highlight;
    let pos = super::validate_new_entry(region, lat, lng, &title, &description, image_urls.len())?;
    let highlight = Highlight {
        id: Id::new(),
        pos,
        title,
        description,
        image_urls,
        author_id: author.id.clone(),
        created_at: Timestamp::now(),
    };
    repo.create_highlight(highlight.clone())?;
    log::debug!("User {} created highlight {}", author.id, highlight.id);
    Ok(highlight)
}
