use super::prelude::*;
use crate::authorization::user::authorize_role;

/// Assign a new status to the given damage reports.
///
/// Like suggestions, reports move freely between statuses. Requires
/// at least the moderator role.
pub fn review_reports<R>(
    repo: &R,
    reviewer: &User,
    ids: &[&str],
    status: ReportStatus,
) -> Result<usize>
where
    R: ReportRepo,
{
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    authorize_role(reviewer, Role::Moderator).map_err(|_| Error::Forbidden)?;
    log::info!(
        "Changing status of {} report(s) to {status} on behalf of {}",
        ids.len(),
        reviewer.id
    );
    let count = repo.review_reports(ids, status)?;
    log::info!("Changed status of {count} report(s) to {status}");
    Ok(count)
}
