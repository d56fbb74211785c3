use super::*;
use otdb_entities as e;
use thiserror::Error;

/// A stored record that cannot be mapped into the domain model.
#[derive(Debug, Error)]
#[error("Record {id} has an invalid position: {lat}/{lng}")]
pub struct InvalidRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            User => UserRole::User,
            Moderator => UserRole::Moderator,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Guest => Guest,
            UserRole::User => User,
            UserRole::Moderator => Moderator,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::suggestion::SuggestionStatus> for SuggestionStatus {
    fn from(from: e::suggestion::SuggestionStatus) -> Self {
        use e::suggestion::SuggestionStatus::*;
        match from {
            Proposed => SuggestionStatus::Proposed,
            Accepted => SuggestionStatus::Accepted,
            InProgress => SuggestionStatus::InProgress,
            Planted => SuggestionStatus::Planted,
            Rejected => SuggestionStatus::Rejected,
        }
    }
}

impl From<SuggestionStatus> for e::suggestion::SuggestionStatus {
    fn from(from: SuggestionStatus) -> Self {
        use e::suggestion::SuggestionStatus::*;
        match from {
            SuggestionStatus::Proposed => Proposed,
            SuggestionStatus::Accepted => Accepted,
            SuggestionStatus::InProgress => InProgress,
            SuggestionStatus::Planted => Planted,
            SuggestionStatus::Rejected => Rejected,
        }
    }
}

impl From<e::report::ReportStatus> for ReportStatus {
    fn from(from: e::report::ReportStatus) -> Self {
        use e::report::ReportStatus::*;
        match from {
            Reported => ReportStatus::Reported,
            InProgress => ReportStatus::InProgress,
            Resolved => ReportStatus::Resolved,
        }
    }
}

impl From<ReportStatus> for e::report::ReportStatus {
    fn from(from: ReportStatus) -> Self {
        use e::report::ReportStatus::*;
        match from {
            ReportStatus::Reported => Reported,
            ReportStatus::InProgress => InProgress,
            ReportStatus::Resolved => Resolved,
        }
    }
}

impl From<e::comment::Comment> for Comment {
    fn from(from: e::comment::Comment) -> Self {
        let e::comment::Comment {
            id,
            author_id,
            author_name,
            author_role,
            author_org,
            text,
            created_at,
            edited_at,
        } = from;
        Self {
            id: id.into(),
            author_id: author_id.into(),
            author_name,
            author_role: author_role.into(),
            author_org,
            text,
            created_at: created_at.as_millis(),
            edited_at: edited_at.map(|at| at.as_millis()),
        }
    }
}

impl From<Comment> for e::comment::Comment {
    fn from(from: Comment) -> Self {
        let Comment {
            id,
            author_id,
            author_name,
            author_role,
            author_org,
            text,
            created_at,
            edited_at,
        } = from;
        Self {
            id: id.into(),
            author_id: author_id.into(),
            author_name,
            author_role: author_role.into(),
            author_org,
            text,
            created_at: e::time::Timestamp::from_millis(created_at),
            edited_at: edited_at.map(e::time::Timestamp::from_millis),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            email_confirmed,
            role,
            organization,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
            email_confirmed,
            role: role.into(),
            organization,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            name,
            email,
            email_confirmed,
            role,
            organization,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            email: e::email::EmailAddress::new_unchecked(email),
            email_confirmed,
            role: role.into(),
            organization,
            created_at: e::time::Timestamp::from_millis(created_at),
        }
    }
}

impl From<e::suggestion::TreeSuggestion> for TreeSuggestion {
    fn from(from: e::suggestion::TreeSuggestion) -> Self {
        let e::suggestion::TreeSuggestion {
            id,
            pos,
            title,
            description,
            image_urls,
            votes,
            upvoted_by,
            downvoted_by,
            comments,
            author_id,
            author_name,
            created_at,
            status,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            lat,
            lng,
            title,
            description,
            image_urls,
            votes: votes.into(),
            up_voted_by: upvoted_by.into_iter().map(Into::into).collect(),
            down_voted_by: downvoted_by.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
            author_id: author_id.into(),
            author_name,
            created_at: created_at.as_millis(),
            status: status.into(),
        }
    }
}

impl TryFrom<TreeSuggestion> for e::suggestion::TreeSuggestion {
    type Error = InvalidRecord;

    fn try_from(from: TreeSuggestion) -> Result<Self, Self::Error> {
        let TreeSuggestion {
            id,
            lat,
            lng,
            title,
            description,
            image_urls,
            votes,
            up_voted_by,
            down_voted_by,
            comments,
            author_id,
            author_name,
            created_at,
            status,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| InvalidRecord {
            id: id.clone(),
            lat,
            lng,
        })?;
        Ok(Self {
            id: id.into(),
            pos,
            title,
            description,
            image_urls,
            votes: votes.into(),
            upvoted_by: up_voted_by.into_iter().map(Into::into).collect(),
            downvoted_by: down_voted_by.into_iter().map(Into::into).collect(),
            comments: comments.into_iter().map(Into::into).collect(),
            author_id: author_id.into(),
            author_name,
            created_at: e::time::Timestamp::from_millis(created_at),
            status: status.into(),
        })
    }
}

impl From<e::report::DamageReport> for DamageReport {
    fn from(from: e::report::DamageReport) -> Self {
        let e::report::DamageReport {
            id,
            pos,
            title,
            description,
            image_urls,
            comments,
            author_id,
            author_name,
            created_at,
            status,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            lat,
            lng,
            title,
            description,
            image_urls,
            comments: comments.into_iter().map(Into::into).collect(),
            author_id: author_id.into(),
            author_name,
            created_at: created_at.as_millis(),
            status: status.into(),
        }
    }
}

impl TryFrom<DamageReport> for e::report::DamageReport {
    type Error = InvalidRecord;

    fn try_from(from: DamageReport) -> Result<Self, Self::Error> {
        let DamageReport {
            id,
            lat,
            lng,
            title,
            description,
            image_urls,
            comments,
            author_id,
            author_name,
            created_at,
            status,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| InvalidRecord {
            id: id.clone(),
            lat,
            lng,
        })?;
        Ok(Self {
            id: id.into(),
            pos,
            title,
            description,
            image_urls,
            comments: comments.into_iter().map(Into::into).collect(),
            author_id: author_id.into(),
            author_name,
            created_at: e::time::Timestamp::from_millis(created_at),
            status: status.into(),
        })
    }
}

impl From<e::highlight::Highlight> for Highlight {
    fn from(from: e::highlight::Highlight) -> Self {
        let e::highlight::Highlight {
            id,
            pos,
            title,
            description,
            image_urls,
            author_id,
            created_at,
        } = from;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            lat,
            lng,
            title,
            description,
            image_urls,
            author_id: author_id.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl TryFrom<Highlight> for e::highlight::Highlight {
    type Error = InvalidRecord;

    fn try_from(from: Highlight) -> Result<Self, Self::Error> {
        let Highlight {
            id,
            lat,
            lng,
            title,
            description,
            image_urls,
            author_id,
            created_at,
        } = from;
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(lat, lng).ok_or_else(|| InvalidRecord {
            id: id.clone(),
            lat,
            lng,
        })?;
        Ok(Self {
            id: id.into(),
            pos,
            title,
            description,
            image_urls,
            author_id: author_id.into(),
            created_at: e::time::Timestamp::from_millis(created_at),
        })
    }
}
