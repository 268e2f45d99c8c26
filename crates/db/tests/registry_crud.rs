//! Integration tests for the repository layer against a real database:
//! - Person and camera CRUD round trips
//! - Partial updates touch exactly the computed fields
//! - Unique constraint violations (name, ip_address)

use chrono::Utc;
use sentra_db::models::ip_camera::{CreateIpCamera, IpCameraChanges};
use sentra_db::models::person::{CreatePerson, PersonChanges};
use sentra_db::repositories::{IpCameraRepo, PersonRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_person(name: &str) -> CreatePerson {
    CreatePerson {
        name: name.to_string(),
        full_name: format!("{name} full"),
        created_at: Utc::now(),
        picture: format!("static/images/{name}.jpg"),
    }
}

fn new_camera(name: &str, ip_address: &str) -> CreateIpCamera {
    CreateIpCamera {
        name: name.to_string(),
        ip_address: ip_address.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Person CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn person_create_and_find(pool: PgPool) {
    let created = PersonRepo::create(&pool, &new_person("alice")).await.unwrap();
    assert_eq!(created.name, "alice");
    assert_eq!(created.full_name, "alice full");
    assert_eq!(created.picture.as_deref(), Some("static/images/alice.jpg"));

    let by_id = PersonRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(by_id.is_some());

    let by_name = PersonRepo::find_by_name(&pool, "alice").await.unwrap();
    assert_eq!(by_name.unwrap().id, created.id);

    let missing = PersonRepo::find_by_name(&pool, "nobody").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_duplicate_name_violates_constraint(pool: PgPool) {
    PersonRepo::create(&pool, &new_person("alice")).await.unwrap();
    let err = PersonRepo::create(&pool, &new_person("alice")).await;
    assert!(err.is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_partial_update_touches_only_requested_fields(pool: PgPool) {
    let created = PersonRepo::create(&pool, &new_person("alice")).await.unwrap();

    let changes = PersonChanges {
        full_name: Some("Alice Liddell".to_string()),
        ..Default::default()
    };
    let updated = PersonRepo::update_fields(&pool, created.id, &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.full_name, "Alice Liddell");
    assert_eq!(updated.name, "alice");
    assert_eq!(updated.picture, created.picture);
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_update_all_fields(pool: PgPool) {
    let created = PersonRepo::create(&pool, &new_person("alice")).await.unwrap();

    let changes = PersonChanges {
        name: Some("alicia".to_string()),
        full_name: Some("Alicia L".to_string()),
        picture: Some("static/images/alicia.jpg".to_string()),
    };
    let updated = PersonRepo::update_fields(&pool, created.id, &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "alicia");
    assert_eq!(updated.full_name, "Alicia L");
    assert_eq!(updated.picture.as_deref(), Some("static/images/alicia.jpg"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_update_missing_row_returns_none(pool: PgPool) {
    let changes = PersonChanges {
        full_name: Some("Nobody".to_string()),
        ..Default::default()
    };
    let updated = PersonRepo::update_fields(&pool, 999_999, &changes)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_list_and_count(pool: PgPool) {
    assert_eq!(PersonRepo::count(&pool).await.unwrap(), 0);

    PersonRepo::create(&pool, &new_person("alice")).await.unwrap();
    PersonRepo::create(&pool, &new_person("bob")).await.unwrap();

    let persons = PersonRepo::list(&pool).await.unwrap();
    assert_eq!(persons.len(), 2);
    assert_eq!(persons[0].name, "alice");
    assert_eq!(PersonRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn person_delete(pool: PgPool) {
    let created = PersonRepo::create(&pool, &new_person("alice")).await.unwrap();

    assert!(PersonRepo::delete(&pool, created.id).await.unwrap());
    assert!(PersonRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    // Deleting again reports nothing removed.
    assert!(!PersonRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// IP camera CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn camera_create_and_find(pool: PgPool) {
    let created = IpCameraRepo::create(&pool, &new_camera("cam1", "10.0.0.5"))
        .await
        .unwrap();
    assert_eq!(created.name, "cam1");
    assert_eq!(created.ip_address, "10.0.0.5");

    let by_address = IpCameraRepo::find_by_address(&pool, "10.0.0.5").await.unwrap();
    assert_eq!(by_address.unwrap().id, created.id);

    let missing = IpCameraRepo::find_by_address(&pool, "10.0.0.99").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn camera_duplicate_address_violates_constraint(pool: PgPool) {
    IpCameraRepo::create(&pool, &new_camera("cam1", "10.0.0.5"))
        .await
        .unwrap();
    // Same address under a different name is still a violation.
    let err = IpCameraRepo::create(&pool, &new_camera("cam2", "10.0.0.5")).await;
    assert!(err.is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn camera_partial_update(pool: PgPool) {
    let created = IpCameraRepo::create(&pool, &new_camera("cam1", "10.0.0.5"))
        .await
        .unwrap();

    let changes = IpCameraChanges {
        ip_address: Some("10.0.0.6".to_string()),
        ..Default::default()
    };
    let updated = IpCameraRepo::update_fields(&pool, created.id, &changes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "cam1");
    assert_eq!(updated.ip_address, "10.0.0.6");
}

#[sqlx::test(migrations = "../../migrations")]
async fn camera_list_and_delete(pool: PgPool) {
    let created = IpCameraRepo::create(&pool, &new_camera("cam1", "10.0.0.5"))
        .await
        .unwrap();
    IpCameraRepo::create(&pool, &new_camera("cam2", "10.0.0.6"))
        .await
        .unwrap();

    assert_eq!(IpCameraRepo::list(&pool).await.unwrap().len(), 2);

    assert!(IpCameraRepo::delete(&pool, created.id).await.unwrap());
    assert_eq!(IpCameraRepo::list(&pool).await.unwrap().len(), 1);
    assert!(!IpCameraRepo::delete(&pool, created.id).await.unwrap());
}
