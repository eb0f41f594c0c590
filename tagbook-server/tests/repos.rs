//! Repository behaviour against a live MySQL server

mod common;

use tagbook_server::db::repos::{
    DbError, EventRepo, ImageRepo, PersonRepo, TaggingRepo,
};
use tagbook_server::models::{NewEvent, NewImage, NewPerson, Pagination};
use tagbook_server::storage::ImageStore;

#[tokio::test]
#[ignore = "requires database"]
async fn person_create_then_get_round_trips() {
    let pool = common::fresh_pool().await;
    let repo = PersonRepo::new(&pool);

    let id = repo.create(&NewPerson::new("Ada", "Lovelace")).await.unwrap();
    let person = repo.get(id).await.unwrap();

    assert_eq!(person.person_id, id);
    assert_eq!(person.first_name, "Ada");
    assert_eq!(person.last_name, "Lovelace");
}

#[tokio::test]
#[ignore = "requires database"]
async fn event_create_then_get_round_trips() {
    let pool = common::fresh_pool().await;
    let repo = EventRepo::new(&pool);

    let new = NewEvent::new("Launch".into(), "first release".into(), 1_700_000_000).unwrap();
    let id = repo.create(&new).await.unwrap();
    let event = repo.get(id).await.unwrap();

    assert_eq!(event.title, new.title);
    assert_eq!(event.description, new.description);
    assert_eq!(event.event_date, new.event_date);
    assert_eq!(event.account_id, new.account_id);
}

#[tokio::test]
#[ignore = "requires database"]
async fn person_delete_then_get_is_not_found() {
    let pool = common::fresh_pool().await;
    let repo = PersonRepo::new(&pool);

    let id = repo.create(&NewPerson::new("Grace", "Hopper")).await.unwrap();
    repo.delete(id).await.unwrap();

    let err = repo.get(id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "person", .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn event_delete_then_get_is_not_found() {
    let pool = common::fresh_pool().await;
    let repo = EventRepo::new(&pool);

    let id = repo
        .create(&NewEvent::new("Short".into(), "lived".into(), 60).unwrap())
        .await
        .unwrap();
    repo.delete(id).await.unwrap();

    let err = repo.get(id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "event", .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn image_delete_then_get_is_not_found() {
    let pool = common::fresh_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let store = ImageStore::new(dir.path());
    let repo = ImageRepo::new(&pool);

    let image = NewImage::new("gone.png", "image/png", b"png".to_vec()).unwrap();
    let id = repo.create(&image, &store).await.unwrap();
    repo.delete(id).await.unwrap();

    let err = repo.get(id).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "image", .. }));
    // the stored file is left behind
    assert!(store.file_path(id).exists());
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_event_conflicts_and_first_survives() {
    let pool = common::fresh_pool().await;
    let repo = EventRepo::new(&pool);
    let event = NewEvent::new("Standup".into(), "daily".into(), 1_700_000_000).unwrap();

    let first = repo.create(&event).await.unwrap();
    let err = repo.create(&event).await.unwrap_err();

    assert!(matches!(err, DbError::Conflict { resource: "event" }));
    assert_eq!(repo.get(first).await.unwrap().title, "Standup");

    // same title on another date is a different event
    let other = NewEvent::new("Standup".into(), "daily".into(), 1_700_086_400).unwrap();
    assert!(repo.create(&other).await.is_ok());
}

#[tokio::test]
#[ignore = "requires database"]
async fn delete_missing_row_succeeds() {
    let pool = common::fresh_pool().await;

    EventRepo::new(&pool).delete(424_242).await.unwrap();
    ImageRepo::new(&pool).delete(424_242).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_person_conflicts_and_first_survives() {
    let pool = common::fresh_pool().await;
    let repo = PersonRepo::new(&pool);
    let person = NewPerson::new("Alan", "Turing");

    let first = repo.create(&person).await.unwrap();
    let err = repo.create(&person).await.unwrap_err();

    assert!(matches!(err, DbError::Conflict { resource: "person" }));
    assert_eq!(repo.get(first).await.unwrap().first_name, "Alan");
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_honours_limit_and_offset() {
    let pool = common::fresh_pool().await;
    let repo = PersonRepo::new(&pool);

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(repo.create(&NewPerson::new(format!("P{i}"), "Test")).await.unwrap());
    }

    let all = repo.list(Pagination::default()).await.unwrap();
    assert_eq!(all.iter().map(|p| p.person_id).collect::<Vec<_>>(), ids);

    let page = repo.list(Pagination::new(Some(2), Some(1))).await.unwrap();
    assert_eq!(page.iter().map(|p| p.person_id).collect::<Vec<_>>(), ids[1..3]);

    let tail = repo.list(Pagination::new(None, Some(3))).await.unwrap();
    assert_eq!(tail.len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn detail_without_tags_has_empty_lists() {
    let pool = common::fresh_pool().await;
    let repo = EventRepo::new(&pool);

    let id = repo
        .create(&NewEvent::new("Quiet".into(), String::new(), 0).unwrap())
        .await
        .unwrap();
    let detail = repo.detail(id).await.unwrap();

    assert_eq!(detail.event.event_id, id);
    assert!(detail.persons.is_empty());
    assert!(detail.images.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn detail_of_missing_event_is_not_found() {
    let pool = common::fresh_pool().await;

    let err = EventRepo::new(&pool).detail(9_999).await.unwrap_err();
    assert!(matches!(err, DbError::NotFound { resource: "event", .. }));
}

#[tokio::test]
#[ignore = "requires database"]
async fn detail_collects_tagged_persons_and_images() {
    let pool = common::fresh_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let store = ImageStore::new(dir.path());

    let event_id = EventRepo::new(&pool)
        .create(&NewEvent::new("Party".into(), "cake".into(), 1_000).unwrap())
        .await
        .unwrap();
    let ada = PersonRepo::new(&pool)
        .create(&NewPerson::new("Ada", "Lovelace"))
        .await
        .unwrap();
    let bob = PersonRepo::new(&pool)
        .create(&NewPerson::new("Bob", "Builder"))
        .await
        .unwrap();
    let image_id = ImageRepo::new(&pool)
        .create(&NewImage::new("cake.jpg", "image/jpeg", b"jpeg".to_vec()).unwrap(), &store)
        .await
        .unwrap();

    let tagging = TaggingRepo::new(&pool);
    tagging.bind_persons(event_id, &[bob, ada]).await.unwrap();
    tagging.bind_images(event_id, &[image_id]).await.unwrap();

    let detail = EventRepo::new(&pool).detail(event_id).await.unwrap();
    let person_ids: Vec<_> = detail.persons.iter().map(|p| p.person_id).collect();
    assert_eq!(person_ids, vec![ada, bob]);
    assert_eq!(detail.images.len(), 1);
    assert_eq!(detail.images[0].image_path, format!("/images/{}.png", image_id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn detail_skips_tags_of_deleted_persons() {
    let pool = common::fresh_pool().await;

    let event_id = EventRepo::new(&pool)
        .create(&NewEvent::new("Gone".into(), String::new(), 5).unwrap())
        .await
        .unwrap();
    let persons = PersonRepo::new(&pool);
    let person_id = persons.create(&NewPerson::new("Temp", "Person")).await.unwrap();

    TaggingRepo::new(&pool)
        .bind_persons(event_id, &[person_id])
        .await
        .unwrap();
    persons.delete(person_id).await.unwrap();

    let detail = EventRepo::new(&pool).detail(event_id).await.unwrap();
    assert!(detail.persons.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_binding_conflicts_and_first_persists() {
    let pool = common::fresh_pool().await;
    let tagging = TaggingRepo::new(&pool);

    tagging.bind_persons(1, &[7]).await.unwrap();
    let err = tagging.bind_persons(1, &[7]).await.unwrap_err();
    assert!(matches!(err, DbError::Conflict { resource: "bind" }));

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM event_person_tagging WHERE event_id = 1 AND person_id = 7",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn failed_batch_binds_nothing() {
    let pool = common::fresh_pool().await;
    let tagging = TaggingRepo::new(&pool);

    tagging.bind_images(3, &[2]).await.unwrap();
    // 1 would insert fine, 2 collides: the whole batch rolls back
    let err = tagging.bind_images(3, &[1, 2, 4]).await.unwrap_err();
    assert!(matches!(err, DbError::Conflict { .. }));

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM event_image_tagging WHERE event_id = 3")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn image_create_writes_file_named_by_id() {
    let pool = common::fresh_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let store = ImageStore::new(dir.path());

    let image = NewImage::new("scan.gif", "image/gif", b"GIF89a".to_vec()).unwrap();
    let id = ImageRepo::new(&pool).create(&image, &store).await.unwrap();

    assert_eq!(std::fs::read(dir.path().join(format!("{id}.png"))).unwrap(), b"GIF89a");

    let stored = ImageRepo::new(&pool).get(id).await.unwrap();
    assert_eq!(stored.image.image_name, "scan.gif");
    assert_eq!(stored.image.mime_type, "image/gif");
}

#[tokio::test]
#[ignore = "requires database"]
async fn image_write_failure_rolls_back_row() {
    let pool = common::fresh_pool().await;
    let dir = tempfile::tempdir().unwrap();
    let store = ImageStore::new(dir.path().join("missing"));

    let image = NewImage::new("a.png", "image/png", b"png".to_vec()).unwrap();
    let err = ImageRepo::new(&pool).create(&image, &store).await.unwrap_err();
    assert!(matches!(err, DbError::Storage(_)));

    let images = ImageRepo::new(&pool).list(Pagination::default()).await.unwrap();
    assert!(images.is_empty());
}
