use std::collections::HashSet;

use otdb_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};

/// Forwards store events to the application log.
///
/// Only events whose type is listed in `notify_on` are forwarded,
/// everything else is silently dropped.
#[derive(Debug, Clone)]
pub struct Notify {
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new(notify_on: HashSet<NotificationType>) -> Self {
        Self { notify_on }
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            return;
        }
        match event {
            E::SuggestionAdded { suggestion } => {
                log::info!(
                    "New tree suggestion {} (\"{}\") proposed by {}",
                    suggestion.id,
                    suggestion.title,
                    suggestion.author_name,
                );
            }
            E::ReportAdded { report } => {
                log::info!(
                    "New damage report {} (\"{}\") filed by {}",
                    report.id,
                    report.title,
                    report.author_name,
                );
            }
            E::HighlightAdded { highlight } => {
                log::info!(
                    "New highlight {} (\"{}\") published by {}",
                    highlight.id,
                    highlight.title,
                    highlight.author_id,
                );
            }
            E::SuggestionReviewed { id, status } => {
                log::info!("Tree suggestion {id} is now {status}");
            }
            E::ReportReviewed { id, status } => {
                log::info!("Damage report {id} is now {status}");
            }
            E::CommentAdded {
                kind,
                entry_id,
                comment,
            } => {
                log::info!(
                    "New comment on {kind} {entry_id} by {}",
                    comment.author_name
                );
            }
            E::CommentEdited {
                kind,
                entry_id,
                comment_id,
            } => {
                log::info!("Comment {comment_id} on {kind} {entry_id} has been edited");
            }
            E::EntryDeleted { kind, id } => {
                log::info!("The {kind} {id} has been deleted");
            }
            E::UserRoleChanged { user } => {
                log::info!("User {} ({}) is now a {}", user.name, user.email, user.role);
            }
        }
    }
}
