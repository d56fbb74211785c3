use crate::entities::*;

/// What happened, carried to the notification gateway after the store
/// write succeeded. Events are fire-and-forget: implementations must
/// not block the calling operation and must not fail it.
#[derive(Debug)]
pub enum NotificationEvent<'a> {
    SuggestionAdded {
        suggestion: &'a TreeSuggestion,
    },
    ReportAdded {
        report: &'a DamageReport,
    },
    HighlightAdded {
        highlight: &'a Highlight,
    },
    SuggestionReviewed {
        id: &'a Id,
        status: SuggestionStatus,
    },
    ReportReviewed {
        id: &'a Id,
        status: ReportStatus,
    },
    CommentAdded {
        kind: EntryKind,
        entry_id: &'a Id,
        comment: &'a Comment,
    },
    CommentEdited {
        kind: EntryKind,
        entry_id: &'a Id,
        comment_id: &'a Id,
    },
    EntryDeleted {
        kind: EntryKind,
        id: &'a Id,
    },
    UserRoleChanged {
        user: &'a User,
    },
}

/// Coarse event category, e.g. for filtering which events a gateway
/// should forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    EntryAdded,
    EntryReviewed,
    EntryDeleted,
    CommentAdded,
    CommentEdited,
    UserRoleChanged,
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        use NotificationEvent as E;
        match self {
            E::SuggestionAdded { .. } | E::ReportAdded { .. } | E::HighlightAdded { .. } => {
                NotificationType::EntryAdded
            }
            E::SuggestionReviewed { .. } | E::ReportReviewed { .. } => {
                NotificationType::EntryReviewed
            }
            E::EntryDeleted { .. } => NotificationType::EntryDeleted,
            E::CommentAdded { .. } => NotificationType::CommentAdded,
            E::CommentEdited { .. } => NotificationType::CommentEdited,
            E::UserRoleChanged { .. } => NotificationType::UserRoleChanged,
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
