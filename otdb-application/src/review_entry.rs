use super::*;

/// Assign a new status to the given suggestions and refresh the
/// client copy of every touched record.
pub fn review_suggestions<R: Db>(
    state: &mut AppState,
    repo: &R,
    notify: &dyn NotificationGateway,
    ids: &[&str],
    status: SuggestionStatus,
) -> Result<usize> {
    let Some(reviewer) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    let count = usecases::review_suggestions(repo, &reviewer, ids, status)?;
    for id in ids {
        let suggestion = repo.get_suggestion(id)?;
        notify.notify(NotificationEvent::SuggestionReviewed {
            id: &suggestion.id,
            status,
        });
        state.commit_suggestion(suggestion);
    }
    state.show_notice(Notice::info(format!("Marked as {status}")));
    Ok(count)
}

/// The damage report twin of [`review_suggestions`].
pub fn review_reports<R: Db>(
    state: &mut AppState,
    repo: &R,
    notify: &dyn NotificationGateway,
    ids: &[&str],
    status: ReportStatus,
) -> Result<usize> {
    let Some(reviewer) = state.session().cloned() else {
        return Err(usecases::Error::Unauthorized.into());
    };
    let count = usecases::review_reports(repo, &reviewer, ids, status)?;
    for id in ids {
        let report = repo.get_report(id)?;
        notify.notify(NotificationEvent::ReportReviewed {
            id: &report.id,
            status,
        });
        state.commit_report(report);
    }
    state.show_notice(Notice::info(format!("Marked as {status}")));
    Ok(count)
}
