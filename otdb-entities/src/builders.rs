pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    comment_builder::*, highlight_builder::*, report_builder::*, suggestion_builder::*,
    user_builder::*,
};

pub mod suggestion_builder {

    use super::*;
    use crate::{comment::*, geo::*, id::*, suggestion::*, time::*};

    #[derive(Debug)]
    pub struct TreeSuggestionBuild {
        suggestion: TreeSuggestion,
    }

    impl TreeSuggestionBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.suggestion.id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.suggestion.pos = pos;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.suggestion.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.suggestion.description = desc.into();
            self
        }
        pub fn image_urls(mut self, urls: Vec<impl Into<String>>) -> Self {
            self.suggestion.image_urls = urls.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn upvoted_by(mut self, ids: Vec<impl Into<Id>>) -> Self {
            self.suggestion.upvoted_by = ids.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn downvoted_by(mut self, ids: Vec<impl Into<Id>>) -> Self {
            self.suggestion.downvoted_by = ids.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn comments(mut self, comments: Vec<Comment>) -> Self {
            self.suggestion.comments = comments;
            self
        }
        pub fn author(mut self, id: &str, name: &str) -> Self {
            self.suggestion.author_id = id.into();
            self.suggestion.author_name = name.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.suggestion.created_at = at;
            self
        }
        pub fn status(mut self, status: SuggestionStatus) -> Self {
            self.suggestion.status = status;
            self
        }
        pub fn finish(mut self) -> TreeSuggestion {
            // The score is derived state.
            self.suggestion.votes =
                VoteScore::tally(&self.suggestion.upvoted_by, &self.suggestion.downvoted_by);
            self.suggestion
        }
    }

    impl Builder for TreeSuggestion {
        type Build = TreeSuggestionBuild;
        fn build() -> TreeSuggestionBuild {
            TreeSuggestionBuild {
                suggestion: TreeSuggestion {
                    id: Id::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    title: "".into(),
                    description: "".into(),
                    image_urls: vec![],
                    votes: Default::default(),
                    upvoted_by: vec![],
                    downvoted_by: vec![],
                    comments: vec![],
                    author_id: Id::new(),
                    author_name: "".into(),
                    created_at: Timestamp::now(),
                    status: SuggestionStatus::default(),
                },
            }
        }
    }
}

pub mod report_builder {

    use super::*;
    use crate::{comment::*, geo::*, id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct DamageReportBuild {
        report: DamageReport,
    }

    impl DamageReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.report.pos = pos;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.report.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.report.description = desc.into();
            self
        }
        pub fn image_urls(mut self, urls: Vec<impl Into<String>>) -> Self {
            self.report.image_urls = urls.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn comments(mut self, comments: Vec<Comment>) -> Self {
            self.report.comments = comments;
            self
        }
        pub fn author(mut self, id: &str, name: &str) -> Self {
            self.report.author_id = id.into();
            self.report.author_name = name.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.report.created_at = at;
            self
        }
        pub fn status(mut self, status: ReportStatus) -> Self {
            self.report.status = status;
            self
        }
        pub fn finish(self) -> DamageReport {
            self.report
        }
    }

    impl Builder for DamageReport {
        type Build = DamageReportBuild;
        fn build() -> DamageReportBuild {
            DamageReportBuild {
                report: DamageReport {
                    id: Id::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    title: "".into(),
                    description: "".into(),
                    image_urls: vec![],
                    comments: vec![],
                    author_id: Id::new(),
                    author_name: "".into(),
                    created_at: Timestamp::now(),
                    status: ReportStatus::default(),
                },
            }
        }
    }
}

pub mod highlight_builder {

    use super::*;
    use crate::{geo::*, highlight::*, id::*, time::*};

    #[derive(Debug)]
    pub struct HighlightBuild {
        highlight: Highlight,
    }

    impl HighlightBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.highlight.id = id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.highlight.pos = pos;
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.highlight.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.highlight.description = desc.into();
            self
        }
        pub fn image_urls(mut self, urls: Vec<impl Into<String>>) -> Self {
            self.highlight.image_urls = urls.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn author_id(mut self, id: &str) -> Self {
            self.highlight.author_id = id.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.highlight.created_at = at;
            self
        }
        pub fn finish(self) -> Highlight {
            self.highlight
        }
    }

    impl Builder for Highlight {
        type Build = HighlightBuild;
        fn build() -> HighlightBuild {
            HighlightBuild {
                highlight: Highlight {
                    id: Id::new(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    title: "".into(),
                    description: "".into(),
                    image_urls: vec![],
                    author_id: Id::new(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn email_confirmed(mut self, confirmed: bool) -> Self {
            self.user.email_confirmed = confirmed;
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn organization(mut self, org: &str) -> Self {
            self.user.organization = Some(org.into());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    email: EmailAddress::new_unchecked("".into()),
                    email_confirmed: false,
                    role: Role::User,
                    organization: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*, user::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn author(mut self, id: &str, name: &str) -> Self {
            self.comment.author_id = id.into();
            self.comment.author_name = name.into();
            self
        }
        pub fn author_role(mut self, role: Role) -> Self {
            self.comment.author_role = role;
            self
        }
        pub fn author_org(mut self, org: &str) -> Self {
            self.comment.author_org = Some(org.into());
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.comment.created_at = at;
            self
        }
        pub fn edited_at(mut self, at: Timestamp) -> Self {
            self.comment.edited_at = Some(at);
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    author_id: Id::new(),
                    author_name: "".into(),
                    author_role: Role::User,
                    author_org: None,
                    text: "".into(),
                    created_at: Timestamp::now(),
                    edited_at: None,
                },
            }
        }
    }

    #[test]
    fn fresh_comment_is_not_edited() {
        assert!(!Comment::build().text("x").finish().is_edited());
        assert!(Comment::build()
            .text("x")
            .edited_at(Timestamp::now())
            .finish()
            .is_edited());
    }
}
