use std::sync::Arc;

use chrono::Utc;
use pledgetrack_domain::certificate::{Certificate, CertificateRepository};
use pledgetrack_domain::pledge::{Pledge, PledgeRepository, PledgeStatus};
use pledgetrack_domain::shared::{CertificateId, DomainError, PledgeId, UserId};
use pledgetrack_infrastructure::persistence::repositories::{
    SqliteCertificateRepository, SqlitePledgeRepository,
};

mod test_helpers;
use test_helpers::{at, day, pledge_for};

#[tokio::test]
async fn pledge_repo_save_and_find() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let repo = SqlitePledgeRepository::new(pool);

    let pledge = Pledge::new(
        "  Asha Rao ".to_string(),
        "21CS042".to_string(),
        "Bicycle".to_string(),
        day(2024, 2, 1),
        UserId::from_string("user-1"),
        "Asha@Example.org".to_string(),
    )
    .expect("Create pledge");

    repo.save(&pledge).await.expect("Save pledge");

    let found = repo
        .find_by_id(pledge.id())
        .await
        .expect("Find pledge")
        .expect("Pledge should exist");

    assert_eq!(found.name(), "Asha Rao");
    assert_eq!(found.user_email(), "asha@example.org");
    assert_eq!(found.pledge_date(), day(2024, 2, 1));
    assert_eq!(found.status(), PledgeStatus::Active);
    assert!(found.is_owned_by(&UserId::from_string("user-1")));
}

#[tokio::test]
async fn pledge_repo_missing_pledge_is_none() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let repo = SqlitePledgeRepository::new(pool);

    let found = repo
        .find_by_id(&PledgeId::from_string("missing"))
        .await
        .expect("Query should succeed");

    assert!(found.is_none());
}

#[tokio::test]
async fn pledge_repo_lists_newest_first_and_filters_by_user() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let repo = SqlitePledgeRepository::new(pool);

    let oldest = pledge_for("user-1", "A", "Bus", at(2024, 1, 1, 9, 0));
    let middle = pledge_for("user-2", "B", "Metro", at(2024, 1, 2, 9, 0));
    let newest = pledge_for("user-1", "C", "Walk", at(2024, 1, 3, 9, 0));
    for pledge in [&middle, &newest, &oldest] {
        repo.save(pledge).await.expect("Save pledge");
    }

    let all = repo.find_all().await.expect("List pledges");
    let names: Vec<_> = all.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);

    let mine = repo
        .find_by_user(&UserId::from_string("user-1"))
        .await
        .expect("List user pledges");
    let names: Vec<_> = mine.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(names, vec!["C", "A"]);

    assert_eq!(repo.count().await.expect("Count"), 3);
}

#[tokio::test]
async fn certificate_repo_issue_marks_pledge_completed() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let pledges = SqlitePledgeRepository::new(pool.clone());
    let certificates = SqliteCertificateRepository::new(pool);

    let pledge = pledge_for("user-1", "Asha Rao", "Bicycle", at(2024, 1, 1, 9, 0));
    pledges.save(&pledge).await.expect("Save pledge");

    let issued = certificates
        .issue(&Certificate::issue(&pledge, Utc::now()))
        .await
        .expect("Issue certificate");

    assert!(issued.id().as_str().starts_with("ECO-"));
    assert_eq!(issued.recipient_name(), "Asha Rao");

    let stored_pledge = pledges
        .find_by_id(pledge.id())
        .await
        .expect("Find pledge")
        .expect("Pledge should exist");
    assert_eq!(stored_pledge.status(), PledgeStatus::Completed);

    let by_id = certificates
        .find_by_id(issued.id())
        .await
        .expect("Find certificate")
        .expect("Certificate should exist");
    assert_eq!(by_id, issued);

    let by_pledge = certificates
        .find_by_pledge(pledge.id())
        .await
        .expect("Find certificate by pledge")
        .expect("Certificate should exist");
    assert_eq!(by_pledge.id(), issued.id());
}

#[tokio::test]
async fn certificate_repo_second_issue_returns_existing() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let pledges = SqlitePledgeRepository::new(pool.clone());
    let certificates = SqliteCertificateRepository::new(pool);

    let pledge = pledge_for("user-1", "Asha Rao", "Bicycle", at(2024, 1, 1, 9, 0));
    pledges.save(&pledge).await.expect("Save pledge");

    let first = certificates
        .issue(&Certificate::issue(&pledge, Utc::now()))
        .await
        .expect("First issue");
    let second = certificates
        .issue(&Certificate::issue(&pledge, Utc::now()))
        .await
        .expect("Second issue");

    assert_eq!(second.id(), first.id());
    assert_eq!(certificates.count().await.expect("Count"), 1);
}

#[tokio::test]
async fn certificate_repo_unknown_pledge_is_not_found() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let certificates = SqliteCertificateRepository::new(pool);

    // Never persisted, so there is nothing to complete.
    let pledge = pledge_for("user-1", "Ghost", "Bus", at(2024, 1, 1, 9, 0));

    let result = certificates
        .issue(&Certificate::issue(&pledge, Utc::now()))
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(certificates.count().await.expect("Count"), 0);
}

#[tokio::test]
async fn certificate_repo_unknown_id_is_none() {
    let pool = Arc::new(test_helpers::setup_in_memory_db().await);
    let certificates = SqliteCertificateRepository::new(pool);

    let found = certificates
        .find_by_id(&CertificateId::from_string("ECO-00000000"))
        .await
        .expect("Query should succeed");

    assert!(found.is_none());
}
