use std::{fs, path::Path};

use otdb_boundary as json;

use super::*;

/// Dump the whole store as interchange records.
pub fn export_snapshot<R: Db>(repo: &R) -> Result<json::Snapshot> {
    let all = Pagination::default();
    Ok(json::Snapshot {
        suggestions: repo
            .recent_suggestions(&all)?
            .into_iter()
            .map(Into::into)
            .collect(),
        reports: repo
            .recent_reports(&all)?
            .into_iter()
            .map(Into::into)
            .collect(),
        highlights: repo
            .recent_highlights(&all)?
            .into_iter()
            .map(Into::into)
            .collect(),
        users: repo.all_users()?.into_iter().map(Into::into).collect(),
    })
}

/// Load interchange records into the store.
///
/// Ids are kept. Importing a record whose id already exists fails the
/// import, so snapshots go into empty stores.
pub fn import_snapshot<R: Db>(repo: &R, snapshot: json::Snapshot) -> Result<usize> {
    let json::Snapshot {
        suggestions,
        reports,
        highlights,
        users,
    } = snapshot;
    let mut count = 0;
    for suggestion in suggestions {
        repo.create_suggestion(suggestion.try_into()?)?;
        count += 1;
    }
    for report in reports {
        repo.create_report(report.try_into()?)?;
        count += 1;
    }
    for highlight in highlights {
        repo.create_highlight(highlight.try_into()?)?;
        count += 1;
    }
    for user in users {
        let user: User = user.into();
        repo.create_user(&user)?;
        count += 1;
    }
    info!("Imported {count} record(s)");
    Ok(count)
}

pub fn read_snapshot_file(path: &Path) -> Result<json::Snapshot> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_snapshot_file(path: &Path, snapshot: &json::Snapshot) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(snapshot)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn seeded_db() -> MemoryDb {
        let db = MemoryDb::init();
        db.create_suggestion(
            TreeSuggestion::build()
                .id("s1")
                .title("Oak on the corner")
                .upvoted_by(vec!["u1", "u2"])
                .downvoted_by(vec!["u3"])
                .comments(vec![Comment::build()
                    .author("u1", "Maria")
                    .text("Nice spot")
                    .finish()])
                .finish(),
        )
        .unwrap();
        db.create_report(DamageReport::build().id("r1").title("Broken branch").finish())
            .unwrap();
        db.create_highlight(Highlight::build().id("h1").title("Old beech").finish())
            .unwrap();
        db.create_user(
            &User::build()
                .id("u1")
                .name("Maria")
                .email("maria@example.org")
                .finish(),
        )
        .unwrap();
        db
    }

    #[test]
    fn export_and_import_a_snapshot() {
        let source = seeded_db();
        let snapshot = flows::export_snapshot(&source).unwrap();

        let target = MemoryDb::init();
        let count = flows::import_snapshot(&target, snapshot).unwrap();

        assert_eq!(count, 4);
        let suggestion = target.get_suggestion("s1").unwrap();
        assert_eq!(suggestion.title, "Oak on the corner");
        assert_eq!(i64::from(suggestion.votes), 1);
        assert_eq!(suggestion.comments.len(), 1);
        assert_eq!(target.get_user("u1").unwrap().name, "Maria");
    }

    #[test]
    fn imports_never_overwrite_existing_records() {
        let db = seeded_db();
        let snapshot = flows::export_snapshot(&db).unwrap();
        assert!(flows::import_snapshot(&db, snapshot).is_err());
    }

    #[test]
    fn snapshot_files_round_trip() {
        let db = seeded_db();
        let snapshot = flows::export_snapshot(&db).unwrap();

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "otdb-snapshot-test-{}-{nanos}.json",
            std::process::id()
        ));
        flows::write_snapshot_file(&path, &snapshot).unwrap();
        let restored = flows::read_snapshot_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(restored.suggestions.len(), 1);
        assert_eq!(restored.suggestions[0].id, "s1");
        assert_eq!(restored.users[0].email, "maria@example.org");
    }
}
