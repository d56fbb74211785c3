use super::prelude::*;
use otdb_core::usecases::VoteDirection;

fn session_for(id: &str, name: &str, email: &str) -> usecases::NewUser {
    usecases::NewUser {
        id: id.into(),
        name: name.into(),
        email: email.parse().unwrap(),
        email_confirmed: true,
        organization: None,
    }
}

#[test]
fn a_suggestion_through_its_whole_life() {
    let mut fixture = BackendFixture::new();

    // Startup on an empty store.
    flows::fetch_snapshot(&mut fixture.state, &fixture.db, 500).unwrap();
    assert_eq!(fixture.state.load_phase(), LoadPhase::Ready);

    // Maria signs in for the first time and suggests a tree.
    flows::apply_session_change(
        &mut fixture.state,
        &fixture.db,
        Some(session_for("maria", "Maria", "maria@example.org")),
    )
    .unwrap();
    let suggestion = flows::create_suggestion(
        &mut fixture.state,
        &fixture.db,
        &fixture.images,
        &fixture.notify,
        &district(),
        flows::EntryDraft {
            lat: 51.6739,
            lng: 8.3448,
            title: "Oak on the corner".into(),
            description: "Shade for the playground".into(),
            image_payloads: vec!["aGVsbG8=".into()],
        },
    )
    .unwrap();
    let id = suggestion.id.as_str().to_owned();
    assert_eq!(i64::from(suggestion.votes), 1);
    assert_eq!(suggestion.image_urls.len(), 1);

    // Ben joins and seconds the suggestion.
    flows::apply_session_change(
        &mut fixture.state,
        &fixture.db,
        Some(session_for("ben", "Ben", "ben@example.org")),
    )
    .unwrap();
    flows::vote_on_suggestion(&mut fixture.state, &fixture.db, &id, VoteDirection::Up).unwrap();
    flows::comment_entry(
        &mut fixture.state,
        &fixture.db,
        &fixture.notify,
        EntryKind::Suggestion,
        &id,
        "Seconded, plenty of space here",
    )
    .unwrap();
    let committed = &fixture.state.collections().suggestions[0];
    assert_eq!(i64::from(committed.votes), 2);
    assert_eq!(committed.comments.len(), 1);

    // The admin makes Ben a moderator.
    let admin = User::build()
        .id("ada")
        .name("Ada")
        .email("ada@example.org")
        .role(Role::Admin)
        .finish();
    fixture.db.create_user(&admin).unwrap();
    flows::apply_session_change(
        &mut fixture.state,
        &fixture.db,
        Some(session_for("ada", "Ada", "ada@example.org")),
    )
    .unwrap();
    flows::change_user_role(
        &mut fixture.state,
        &fixture.db,
        &fixture.notify,
        "ben@example.org",
        Role::Moderator,
    )
    .unwrap();

    // Ben comes back and walks the suggestion all the way to planted.
    flows::apply_session_change(
        &mut fixture.state,
        &fixture.db,
        Some(session_for("ben", "Ben", "ben@example.org")),
    )
    .unwrap();
    assert_eq!(fixture.state.session().unwrap().role, Role::Moderator);
    for status in [
        SuggestionStatus::Accepted,
        SuggestionStatus::InProgress,
        SuggestionStatus::Planted,
    ] {
        flows::review_suggestions(
            &mut fixture.state,
            &fixture.db,
            &fixture.notify,
            &[&id],
            status,
        )
        .unwrap();
    }
    assert_eq!(
        fixture.db.get_suggestion(&id).unwrap().status,
        SuggestionStatus::Planted
    );

    // The tree is planted, the suggestion has served its purpose.
    flows::delete_entry(
        &mut fixture.state,
        &fixture.db,
        &fixture.images,
        &fixture.notify,
        EntryKind::Suggestion,
        &id,
    )
    .unwrap();
    assert!(matches!(
        fixture.db.get_suggestion(&id),
        Err(RepoError::NotFound)
    ));
    assert_eq!(fixture.images.delete_batches.borrow().len(), 1);
    assert!(fixture.state.collections().suggestions.is_empty());

    // Ben signs out.
    flows::apply_session_change(&mut fixture.state, &fixture.db, None).unwrap();
    assert!(fixture.state.session().is_none());
    assert_eq!(fixture.state.view_mode(), ViewMode::Map);
}

#[test]
fn a_damage_report_is_filed_and_resolved() {
    let mut fixture = BackendFixture::signed_in_as(Role::User);
    let report = flows::create_report(
        &mut fixture.state,
        &fixture.db,
        &fixture.images,
        &fixture.notify,
        &district(),
        flows::EntryDraft {
            lat: 51.6739,
            lng: 8.3448,
            title: "Broken branch".into(),
            description: "Hanging over the path".into(),
            image_payloads: vec![],
        },
    )
    .unwrap();
    assert_eq!(report.status, ReportStatus::Reported);

    let moderator = fixture.create_user("Ben", "ben@example.org", Role::Moderator);
    fixture.state.set_session(moderator);
    flows::review_reports(
        &mut fixture.state,
        &fixture.db,
        &fixture.notify,
        &[report.id.as_str()],
        ReportStatus::Resolved,
    )
    .unwrap();

    assert_eq!(
        fixture.db.get_report(report.id.as_str()).unwrap().status,
        ReportStatus::Resolved
    );
}
