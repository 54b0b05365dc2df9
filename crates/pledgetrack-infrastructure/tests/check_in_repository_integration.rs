use std::sync::Arc;

use pledgetrack_domain::check_in::{CheckInEvent, CheckInRepository};
use pledgetrack_domain::eligibility::EligibilityResult;
use pledgetrack_domain::shared::{PledgeId, UserId};
use pledgetrack_infrastructure::persistence::repositories::SqliteCheckInRepository;
use pledgetrack_infrastructure::persistence::Database;

mod test_helpers;
use test_helpers::{at, day};

fn event(user: &str, pledge: &str, when: chrono::DateTime<chrono::Utc>, tasks: &[&str]) -> CheckInEvent {
    CheckInEvent::new(
        UserId::from_string(user),
        PledgeId::from_string(pledge),
        when,
        tasks.iter().map(|t| t.to_string()).collect(),
        String::new(),
    )
    .expect("Create check-in")
}

#[tokio::test]
async fn check_in_repo_insert_and_find() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    let stored = repo
        .insert_if_absent(&event("u1", "p1", at(2024, 1, 5, 9, 30), &["cycled", "bus"]))
        .await
        .expect("Insert check-in");

    assert!(stored.inserted);
    let stored = stored.event;
    assert_eq!(stored.id(), "u1_p1_2024-01-05");
    assert_eq!(stored.check_in_date(), day(2024, 1, 5));
    assert_eq!(stored.tasks(), ["cycled".to_string(), "bus".to_string()]);

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("u1"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0], stored);
}

#[tokio::test]
async fn check_in_repo_same_day_is_idempotent() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    let first = repo
        .insert_if_absent(&event("u1", "p1", at(2024, 1, 5, 0, 1), &["walked"]))
        .await
        .expect("First check-in");
    let second = repo
        .insert_if_absent(&event("u1", "p1", at(2024, 1, 5, 23, 59), &["carpool"]))
        .await
        .expect("Second check-in");

    // The stored row wins; the later payload is discarded.
    assert!(first.inserted);
    assert!(!second.inserted);
    assert_eq!(second.event, first.event);
    assert_eq!(second.event.tasks(), ["walked".to_string()]);

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("u1"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn check_in_repo_scopes_by_user_and_pledge() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    repo.insert_if_absent(&event("u1", "p1", at(2024, 1, 5, 8, 0), &[]))
        .await
        .expect("u1/p1");
    repo.insert_if_absent(&event("u1", "p2", at(2024, 1, 5, 8, 0), &[]))
        .await
        .expect("u1/p2");
    repo.insert_if_absent(&event("u2", "p1", at(2024, 1, 5, 8, 0), &[]))
        .await
        .expect("u2/p1");

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("u1"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id(), "u1_p1_2024-01-05");
}

#[tokio::test]
async fn check_in_repo_returns_newest_first() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    for d in [3, 1, 2] {
        repo.insert_if_absent(&event("u1", "p1", at(2024, 1, d, 12, 0), &[]))
            .await
            .expect("Insert check-in");
    }

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("u1"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");

    let dates: Vec<_> = history.iter().map(|e| e.check_in_date()).collect();
    assert_eq!(dates, vec![day(2024, 1, 3), day(2024, 1, 2), day(2024, 1, 1)]);
}

#[tokio::test]
async fn check_in_repo_empty_history_is_not_an_error() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("nobody"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");

    assert!(history.is_empty());
    assert!(!EligibilityResult::from_check_ins(&history).eligible);
}

#[tokio::test]
async fn check_in_repo_seven_stored_days_make_user_eligible() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    for d in 1..=7 {
        repo.insert_if_absent(&event("u1", "p1", at(2024, 1, d, 18, 0), &[]))
            .await
            .expect("Insert check-in");
    }

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("u1"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");
    let result = EligibilityResult::from_check_ins(&history);

    assert!(result.eligible);
    assert_eq!(result.consecutive_days, 7);
}

#[tokio::test]
async fn check_in_repo_concurrent_duplicates_store_one_row() {
    let dir = tempfile::tempdir().expect("Create temp dir");
    let db_path = dir.path().join("concurrent.db");
    let db = Database::new(db_path.to_str().expect("utf-8 path"))
        .await
        .expect("Open database");
    db.run_migrations().await.expect("Run migrations");

    let repo = Arc::new(SqliteCheckInRepository::new(Arc::new(db.pool().clone())));

    let writes = (0..8).map(|i| {
        let repo = repo.clone();
        tokio::spawn(async move {
            repo.insert_if_absent(&event("u1", "p1", at(2024, 3, 10, 6, i), &[]))
                .await
        })
    });

    let results = futures::future::join_all(writes).await;

    let mut ids = Vec::new();
    let mut inserted = 0;
    for result in results {
        let stored = result.expect("Task panicked").expect("Insert check-in");
        if stored.inserted {
            inserted += 1;
        }
        ids.push(stored.event.id().to_string());
    }
    assert_eq!(inserted, 1);
    assert!(ids.iter().all(|id| id == "u1_p1_2024-03-10"));

    let history = repo
        .find_by_user_and_pledge(&UserId::from_string("u1"), &PledgeId::from_string("p1"))
        .await
        .expect("Find check-ins");
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn check_in_repo_underscored_ids_do_not_collide() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteCheckInRepository::new(Arc::new(pool));

    let first = repo
        .insert_if_absent(&event("a_b", "c", at(2024, 1, 5, 9, 0), &["bus"]))
        .await
        .expect("a_b/c");
    let second = repo
        .insert_if_absent(&event("a", "b_c", at(2024, 1, 5, 9, 0), &["metro"]))
        .await
        .expect("a/b_c");

    assert!(first.inserted);
    assert!(second.inserted);
    assert_ne!(first.event.id(), second.event.id());
    assert_eq!(second.event.user_id().as_str(), "a");
    assert_eq!(second.event.tasks(), ["metro".to_string()]);

    for (user, pledge) in [("a_b", "c"), ("a", "b_c")] {
        let history = repo
            .find_by_user_and_pledge(&UserId::from_string(user), &PledgeId::from_string(pledge))
            .await
            .expect("Find check-ins");
        assert_eq!(history.len(), 1);
    }
}
