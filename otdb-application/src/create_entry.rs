use otdb_core::authorization::user::authorize_role;

use super::*;

/// User supplied parts of a new map entry, images still as raw
/// base64 payloads.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub description: String,
    pub image_payloads: Vec<String>,
}

// Upload the images of a validated draft one by one. A failed upload
// drops that image and never fails the entry.
pub(crate) fn upload_images(images: &dyn ImageStorage, payloads: &[String]) -> Vec<String> {
    let mut urls = Vec::with_capacity(payloads.len());
    for payload in payloads {
        match images.upload_image(payload) {
            Ok(url) => urls.push(url),
            Err(err) => warn!("Failed to upload an image, dropping it: {err}"),
        }
    }
    urls
}

/// Store a new planting suggestion for the signed-in user.
///
/// The draft is validated before the first image is uploaded; a draft
/// that fails validation leaves both stores untouched.
pub fn create_suggestion<R: Db>(
    state: &mut AppState,
    repo: &R,
    images: &dyn ImageStorage,
    notify: &dyn NotificationGateway,
    region: &MapBbox,
    draft: EntryDraft,
) -> Result<TreeSuggestion> {
    let Some(author) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    let EntryDraft {
        lat,
        lng,
        title,
        description,
        image_payloads,
    } = draft;
    usecases::validate_new_entry(region, lat, lng, &title, &description, image_payloads.len())?;
    let image_urls = upload_images(images, &image_payloads);
    let suggestion = usecases::create_suggestion(
        repo,
        &author,
        region,
        usecases::NewTreeSuggestion {
            lat,
            lng,
            title,
            description,
            image_urls,
        },
    )?;
    notify.notify(NotificationEvent::SuggestionAdded {
        suggestion: &suggestion,
    });
    state.commit_suggestion(suggestion.clone());
    state.show_notice(Notice::info("Suggestion saved"));
    Ok(suggestion)
}

/// Store a new damage report for the signed-in user.
pub fn create_report<R: Db>(
    state: &mut AppState,
    repo: &R,
    images: &dyn ImageStorage,
    notify: &dyn NotificationGateway,
    region: &MapBbox,
    draft: EntryDraft,
) -> Result<DamageReport> {
    let Some(author) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    let EntryDraft {
        lat,
        lng,
        title,
        description,
        image_payloads,
    } = draft;
    usecases::validate_new_entry(region, lat, lng, &title, &description, image_payloads.len())?;
    let image_urls = upload_images(images, &image_payloads);
    let report = usecases::create_report(
        repo,
        &author,
        region,
        usecases::NewDamageReport {
            lat,
            lng,
            title,
            description,
            image_urls,
        },
    )?;
    notify.notify(NotificationEvent::ReportAdded { report: &report });
    state.commit_report(report.clone());
    state.show_notice(Notice::info("Damage report filed"));
    Ok(report)
}

/// Publish a new highlight.
///
/// Moderator only; the privilege is checked before any image upload.
pub fn create_highlight<R: Db>(
    state: &mut AppState,
    repo: &R,
    images: &dyn ImageStorage,
    notify: &dyn NotificationGateway,
    region: &MapBbox,
    draft: EntryDraft,
) -> Result<Highlight> {
    let Some(author) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    authorize_role(&author, Role::Moderator).map_err(|_| usecases::Error::Forbidden)?;
    let EntryDraft {
        lat,
        lng,
        title,
        description,
        image_payloads,
    } = draft;
    usecases::validate_new_entry(region, lat, lng, &title, &description, image_payloads.len())?;
    let image_urls = upload_images(images, &image_payloads);
    let highlight = usecases::create_highlight(
        repo,
        &author,
        region,
        usecases::NewHighlight {
            lat,
            lng,
            title,
            description,
            image_urls,
        },
    )?;
    notify.notify(NotificationEvent::HighlightAdded {
        highlight: &highlight,
    });
    state.commit_highlight(highlight.clone());
    state.show_notice(Notice::info("Highlight published"));
    Ok(highlight)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use crate::error::BError;

    fn draft_with_images(payloads: Vec<&str>) -> flows::EntryDraft {
        flows::EntryDraft {
            lat: 51.6739,
            lng: 8.3448,
            title: "Oak on the corner".into(),
            description: "Shade for the playground".into(),
            image_payloads: payloads.into_iter().map(str::to_owned).collect(),
        }
    }

    #[test]
    fn create_a_suggestion_with_images() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        let draft = draft_with_images(vec!["aaaa", "bbbb"]);

        let suggestion = flows::create_suggestion(
            &mut fixture.state,
            &fixture.db,
            &fixture.images,
            &fixture.notify,
            &district(),
            draft,
        )
        .unwrap();

        assert_eq!(suggestion.image_urls.len(), 2);
        assert_eq!(i64::from(suggestion.votes), 1);
        assert_eq!(*fixture.images.uploaded.borrow(), 2);
        let committed = &fixture.state.collections().suggestions[0];
        assert_eq!(committed.id, suggestion.id);
        assert_eq!(
            fixture.db.get_suggestion(suggestion.id.as_str()).unwrap().title,
            "Oak on the corner"
        );
    }

    #[test]
    fn a_failed_upload_drops_the_image_but_keeps_the_entry() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        fixture.images.fail_uploads = true;

        let report = flows::create_report(
            &mut fixture.state,
            &fixture.db,
            &fixture.images,
            &fixture.notify,
            &district(),
            draft_with_images(vec!["aaaa"]),
        )
        .unwrap();

        assert!(report.image_urls.is_empty());
        assert!(fixture.db.get_report(report.id.as_str()).is_ok());
    }

    #[test]
    fn validation_failures_block_before_any_upload() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        let mut blank_title = draft_with_images(vec!["aaaa"]);
        blank_title.title = "  ".into();
        let mut outside = draft_with_images(vec!["aaaa"]);
        outside.lat = 48.8566;
        outside.lng = 2.3522;
        let too_many = draft_with_images(vec!["a", "b", "c", "d", "e", "f"]);

        for draft in [blank_title, outside, too_many] {
            assert!(flows::create_suggestion(
                &mut fixture.state,
                &fixture.db,
                &fixture.images,
                &fixture.notify,
                &district(),
                draft,
            )
            .is_err());
        }

        assert_eq!(*fixture.images.uploaded.borrow(), 0);
        assert_eq!(fixture.db.count_suggestions().unwrap(), 0);
        assert!(fixture.state.collections().suggestions.is_empty());
    }

    #[test]
    fn guests_cannot_create_entries() {
        let mut fixture = BackendFixture::new();
        let result = flows::create_suggestion(
            &mut fixture.state,
            &fixture.db,
            &fixture.images,
            &fixture.notify,
            &district(),
            draft_with_images(vec![]),
        );
        assert!(matches!(
            result,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Unauthorized
            )))
        ));
    }

    #[test]
    fn highlights_are_reserved_for_moderators() {
        let mut fixture = BackendFixture::signed_in_as(Role::User);
        let result = flows::create_highlight(
            &mut fixture.state,
            &fixture.db,
            &fixture.images,
            &fixture.notify,
            &district(),
            draft_with_images(vec!["aaaa"]),
        );
        assert!(matches!(
            result,
            Err(AppError::Business(BError::Parameter(
                usecases::Error::Forbidden
            )))
        ));
        // The privilege check precedes the upload.
        assert_eq!(*fixture.images.uploaded.borrow(), 0);

        let mut fixture = BackendFixture::signed_in_as(Role::Moderator);
        assert!(flows::create_highlight(
            &mut fixture.state,
            &fixture.db,
            &fixture.images,
            &fixture.notify,
            &district(),
            draft_with_images(vec![]),
        )
        .is_ok());
    }
}
