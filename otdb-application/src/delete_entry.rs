use super::*;

/// Remove an entry together with its stored images.
///
/// The images go first in one best-effort batch; a storage failure is
/// logged and never blocks the record deletion.
pub fn delete_entry<R: Db>(
    state: &mut AppState,
    repo: &R,
    images: &dyn ImageStorage,
    notify: &dyn NotificationGateway,
    kind: EntryKind,
    id: &str,
) -> Result<()> {
    let Some(actor) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    let image_urls = match kind {
        EntryKind::Suggestion => {
            usecases::prepare_suggestion_deletion(repo, &actor, id)?.image_urls
        }
        EntryKind::Report => usecases::prepare_report_deletion(repo, &actor, id)?.image_urls,
        EntryKind::Highlight => usecases::prepare_highlight_deletion(repo, &actor, id)?.image_urls,
    };
    delete_stored_images(images, &image_urls);
    match kind {
        EntryKind::Suggestion => {
            usecases::delete_suggestion(repo, id)?;
            state.remove_suggestion(id);
        }
        EntryKind::Report => {
            usecases::delete_report(repo, id)?;
            state.remove_report(id);
        }
        EntryKind::Highlight => {
            usecases::delete_highlight(repo, id)?;
            state.remove_highlight(id);
        }
    }
    notify.notify(NotificationEvent::EntryDeleted {
        kind,
        id: &Id::from(id),
    });
    state.show_notice(Notice::info("Entry deleted"));
    Ok(())
}

// One batched call for all images of an entry.
pub(crate) fn delete_stored_images(images: &dyn ImageStorage, urls: &[String]) {
    let paths = storage_paths_from_urls(urls.iter().map(String::as_str), images.url_path_marker());
    if paths.is_empty() {
        return;
    }
    match images.delete_images(&paths) {
        Ok(count) => debug!("Removed {count} of {} stored image(s)", paths.len()),
        Err(err) => warn!("Failed to remove stored images: {err}"),
    }
}
