use std::cmp::Reverse;

use otdb_core::{entities::*, repositories::*};

use crate::{MemoryDb, Store};

type Result<T> = std::result::Result<T, Error>;

impl Store {
    fn suggestion_mut(&mut self, id: &str) -> Result<&mut TreeSuggestion> {
        self.suggestions
            .iter_mut()
            .find(|s| s.id.as_str() == id)
            .ok_or(Error::NotFound)
    }

    fn report_mut(&mut self, id: &str) -> Result<&mut DamageReport> {
        self.reports
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .ok_or(Error::NotFound)
    }
}

fn edit_comment(
    comments: &mut [Comment],
    comment_id: &str,
    text: &str,
    edited_at: Timestamp,
) -> Result<()> {
    let comment = comments
        .iter_mut()
        .find(|c| c.id.as_str() == comment_id)
        .ok_or(Error::NotFound)?;
    comment.text = text.to_string();
    comment.edited_at = Some(edited_at);
    Ok(())
}

fn page<T: Clone>(rows: &[T], pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    rows.iter().skip(offset).take(limit).cloned().collect()
}

fn remove_by_id<T>(rows: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> Result<()> {
    if let Some(pos) = rows.iter().position(|row| id_of(row) == id) {
        rows.remove(pos);
        Ok(())
    } else {
        Err(Error::NotFound)
    }
}

impl SuggestionRepo for MemoryDb {
    fn create_suggestion(&self, suggestion: TreeSuggestion) -> Result<()> {
        let mut store = self.store.write();
        if store.suggestions.iter().any(|s| s.id == suggestion.id) {
            return Err(Error::AlreadyExists);
        }
        store.suggestions.push(suggestion);
        Ok(())
    }

    fn get_suggestion(&self, id: &str) -> Result<TreeSuggestion> {
        self.store
            .read()
            .suggestions
            .iter()
            .find(|s| s.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn recent_suggestions(&self, pagination: &Pagination) -> Result<Vec<TreeSuggestion>> {
        let store = self.store.read();
        let mut rows = store.suggestions.clone();
        rows.sort_by_key(|s| Reverse(s.created_at));
        Ok(page(&rows, pagination))
    }

    fn count_suggestions(&self) -> Result<usize> {
        Ok(self.store.read().suggestions.len())
    }

    fn update_suggestion_votes(
        &self,
        id: &str,
        upvoted_by: &[Id],
        downvoted_by: &[Id],
        votes: VoteScore,
    ) -> Result<()> {
        let mut store = self.store.write();
        let suggestion = store.suggestion_mut(id)?;
        suggestion.upvoted_by = upvoted_by.to_vec();
        suggestion.downvoted_by = downvoted_by.to_vec();
        suggestion.votes = votes;
        Ok(())
    }

    fn add_suggestion_comment(&self, id: &str, comment: Comment) -> Result<()> {
        let mut store = self.store.write();
        store.suggestion_mut(id)?.comments.push(comment);
        Ok(())
    }

    fn edit_suggestion_comment(
        &self,
        id: &str,
        comment_id: &str,
        text: &str,
        edited_at: Timestamp,
    ) -> Result<()> {
        let mut store = self.store.write();
        let suggestion = store.suggestion_mut(id)?;
        edit_comment(&mut suggestion.comments, comment_id, text, edited_at)
    }

    fn review_suggestions(&self, ids: &[&str], status: SuggestionStatus) -> Result<usize> {
        let mut store = self.store.write();
        let mut count = 0;
        for suggestion in &mut store.suggestions {
            if ids.contains(&suggestion.id.as_str()) {
                suggestion.status = status;
                count += 1;
            }
        }
        Ok(count)
    }

    fn delete_suggestion(&self, id: &str) -> Result<()> {
        let mut store = self.store.write();
        remove_by_id(&mut store.suggestions, id, |s| s.id.as_str())
    }
}

impl ReportRepo for MemoryDb {
    fn create_report(&self, report: DamageReport) -> Result<()> {
        let mut store = self.store.write();
        if store.reports.iter().any(|r| r.id == report.id) {
            return Err(Error::AlreadyExists);
        }
        store.reports.push(report);
        Ok(())
    }

    fn get_report(&self, id: &str) -> Result<DamageReport> {
        self.store
            .read()
            .reports
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn recent_reports(&self, pagination: &Pagination) -> Result<Vec<DamageReport>> {
        let store = self.store.read();
        let mut rows = store.reports.clone();
        rows.sort_by_key(|r| Reverse(r.created_at));
        Ok(page(&rows, pagination))
    }

    fn count_reports(&self) -> Result<usize> {
        Ok(self.store.read().reports.len())
    }

    fn add_report_comment(&self, id: &str, comment: Comment) -> Result<()> {
        let mut store = self.store.write();
        store.report_mut(id)?.comments.push(comment);
        Ok(())
    }

    fn edit_report_comment(
        &self,
        id: &str,
        comment_id: &str,
        text: &str,
        edited_at: Timestamp,
    ) -> Result<()> {
        let mut store = self.store.write();
        let report = store.report_mut(id)?;
        edit_comment(&mut report.comments, comment_id, text, edited_at)
    }

    fn review_reports(&self, ids: &[&str], status: ReportStatus) -> Result<usize> {
        let mut store = self.store.write();
        let mut count = 0;
        for report in &mut store.reports {
            if ids.contains(&report.id.as_str()) {
                report.status = status;
                count += 1;
            }
        }
        Ok(count)
    }

    fn delete_report(&self, id: &str) -> Result<()> {
        let mut store = self.store.write();
        remove_by_id(&mut store.reports, id, |r| r.id.as_str())
    }
}

impl HighlightRepo for MemoryDb {
    fn create_highlight(&self, highlight: Highlight) -> Result<()> {
        let mut store = self.store.write();
        if store.highlights.iter().any(|h| h.id == highlight.id) {
            return Err(Error::AlreadyExists);
        }
        store.highlights.push(highlight);
        Ok(())
    }

    fn get_highlight(&self, id: &str) -> Result<Highlight> {
        self.store
            .read()
            .highlights
            .iter()
            .find(|h| h.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn recent_highlights(&self, pagination: &Pagination) -> Result<Vec<Highlight>> {
        let store = self.store.read();
        let mut rows = store.highlights.clone();
        rows.sort_by_key(|h| Reverse(h.created_at));
        Ok(page(&rows, pagination))
    }

    fn count_highlights(&self) -> Result<usize> {
        Ok(self.store.read().highlights.len())
    }

    fn delete_highlight(&self, id: &str) -> Result<()> {
        let mut store = self.store.write();
        remove_by_id(&mut store.highlights, id, |h| h.id.as_str())
    }
}

impl UserRepo for MemoryDb {
    fn create_user(&self, user: &User) -> Result<()> {
        let mut store = self.store.write();
        if store.users.iter().any(|u| u.id == user.id) {
            return Err(Error::AlreadyExists);
        }
        store.users.push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> Result<()> {
        let mut store = self.store.write();
        let row = store
            .users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(Error::NotFound)?;
        *row = user.clone();
        Ok(())
    }

    fn delete_user(&self, id: &str) -> Result<()> {
        let mut store = self.store.write();
        remove_by_id(&mut store.users, id, |u| u.id.as_str())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.store.read().users.clone())
    }

    fn count_users(&self) -> Result<usize> {
        Ok(self.store.read().users.len())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        self.try_get_user(id)?.ok_or(Error::NotFound)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self
            .store
            .read()
            .users
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn get_user_by_email(&self, email: &str) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }

    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .store
            .read()
            .users
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use otdb_entities::builders::*;

    fn db_with_suggestion(id: &str) -> MemoryDb {
        let db = MemoryDb::init();
        db.create_suggestion(TreeSuggestion::build().id(id).finish())
            .unwrap();
        db
    }

    #[test]
    fn create_is_rejected_for_duplicate_ids() {
        let db = db_with_suggestion("s1");
        let result = db.create_suggestion(TreeSuggestion::build().id("s1").finish());
        assert!(matches!(result, Err(Error::AlreadyExists)));
        assert_eq!(db.count_suggestions().unwrap(), 1);
    }

    #[test]
    fn vote_update_only_touches_the_vote_fields() {
        let db = MemoryDb::init();
        let suggestion = TreeSuggestion::build()
            .id("s1")
            .title("Linde")
            .comments(vec![Comment::build().id("c1").text("hi").finish()])
            .finish();
        db.create_suggestion(suggestion.clone()).unwrap();

        let upvoted_by = vec![Id::from("u1"), Id::from("u2")];
        db.update_suggestion_votes("s1", &upvoted_by, &[], VoteScore::from(2))
            .unwrap();

        let stored = db.get_suggestion("s1").unwrap();
        assert_eq!(stored.upvoted_by, upvoted_by);
        assert_eq!(i64::from(stored.votes), 2);
        assert_eq!(stored.title, suggestion.title);
        assert_eq!(stored.comments, suggestion.comments);
    }

    #[test]
    fn last_vote_update_wins() {
        let db = db_with_suggestion("s1");
        db.update_suggestion_votes("s1", &[Id::from("u1")], &[], VoteScore::from(1))
            .unwrap();
        db.update_suggestion_votes("s1", &[], &[Id::from("u2")], VoteScore::from(-1))
            .unwrap();
        let stored = db.get_suggestion("s1").unwrap();
        assert!(stored.upvoted_by.is_empty());
        assert_eq!(stored.downvoted_by, vec![Id::from("u2")]);
        assert_eq!(i64::from(stored.votes), -1);
    }

    #[test]
    fn comment_edit_changes_one_comment_in_place() {
        let db = MemoryDb::init();
        let comments = vec![
            Comment::build().id("c1").text("one").finish(),
            Comment::build().id("c2").text("two").finish(),
        ];
        db.create_report(DamageReport::build().id("r1").comments(comments).finish())
            .unwrap();

        db.edit_report_comment("r1", "c2", "combined", Timestamp::from_millis(42))
            .unwrap();

        let stored = db.get_report("r1").unwrap();
        assert_eq!(stored.comments[0].text, "one");
        assert!(stored.comments[0].edited_at.is_none());
        assert_eq!(stored.comments[1].text, "combined");
        assert_eq!(stored.comments[1].edited_at, Some(Timestamp::from_millis(42)));
    }

    #[test]
    fn recent_rows_come_newest_first() {
        let db = MemoryDb::init();
        for n in 0..4 {
            db.create_highlight(
                Highlight::build()
                    .id(&format!("h{n}"))
                    .created_at(Timestamp::from_millis(n))
                    .finish(),
            )
            .unwrap();
        }
        let pagination = Pagination {
            offset: None,
            limit: Some(2),
        };
        let rows = db.recent_highlights(&pagination).unwrap();
        let ids: Vec<_> = rows.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h3", "h2"]);
    }

    #[test]
    fn review_updates_only_the_given_ids() {
        let db = MemoryDb::init();
        for id in ["s1", "s2", "s3"] {
            db.create_suggestion(TreeSuggestion::build().id(id).finish())
                .unwrap();
        }
        let count = db
            .review_suggestions(&["s1", "s3"], SuggestionStatus::Accepted)
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(db.get_suggestion("s1").unwrap().status, SuggestionStatus::Accepted);
        assert_eq!(db.get_suggestion("s2").unwrap().status, SuggestionStatus::Proposed);
        assert_eq!(db.get_suggestion("s3").unwrap().status, SuggestionStatus::Accepted);
    }

    #[test]
    fn failed_delete_leaves_the_store_untouched() {
        let db = db_with_suggestion("s1");
        assert!(matches!(db.delete_suggestion("s2"), Err(Error::NotFound)));
        assert_eq!(db.count_suggestions().unwrap(), 1);
    }

    #[test]
    fn user_lookup_by_id_and_email() {
        let db = MemoryDb::init();
        let user = User::build().id("u1").email("maria@example.org").finish();
        db.create_user(&user).unwrap();

        assert_eq!(db.get_user("u1").unwrap(), user);
        assert_eq!(db.get_user_by_email("maria@example.org").unwrap(), user);
        assert!(db.try_get_user("u2").unwrap().is_none());
        assert!(matches!(db.get_user_by_email("x@y.z"), Err(Error::NotFound)));
    }

    #[test]
    fn clones_share_the_same_store() {
        let db = MemoryDb::init();
        let other = db.clone();
        other
            .create_suggestion(TreeSuggestion::build().id("s1").finish())
            .unwrap();
        assert_eq!(db.count_suggestions().unwrap(), 1);
    }
}
