//! Integration tests for the `businesses` repository and the Postgres lookup.

use assert_matches::assert_matches;
use savvy_core::lookup::BusinessLookup;
use savvy_db::lookup::PgBusinessLookup;
use savvy_db::models::business::CreateBusiness;
use savvy_db::repositories::business_repo::UQ_BUSINESSES_EMAIL;
use savvy_db::repositories::BusinessRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_business(name: &str, email: &str) -> CreateBusiness {
    CreateBusiness {
        name: name.to_string(),
        address: Some("123 Main St, Anytown, USA".to_string()),
        owner_name: "Sarah Lee".to_string(),
        email: email.to_string(),
        phone: Some("(555) 123-4567".to_string()),
        website: None,
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_stored_row(pool: PgPool) {
    let input = new_business("The Corner Cafe", "owner@cornercafe.test");
    let business = BusinessRepo::create(&pool, &input).await.unwrap();

    assert!(business.id > 0);
    assert_eq!(business.name, input.name);
    assert_eq!(business.address, input.address);
    assert_eq!(business.owner_name, input.owner_name);
    assert_eq!(business.email, input.email);
    assert_eq!(business.phone, input.phone);
    assert_eq!(business.website, None);
    assert_eq!(business.password_hash, input.password_hash);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    let input = new_business("The Corner Cafe", "dup@cornercafe.test");
    BusinessRepo::create(&pool, &input).await.unwrap();

    let err = BusinessRepo::create(&pool, &new_business("Another Cafe", "dup@cornercafe.test"))
        .await
        .unwrap_err();
    assert!(savvy_db::is_unique_violation(&err, UQ_BUSINESSES_EMAIL));

    let all = BusinessRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "The Corner Cafe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_in_registration_order(pool: PgPool) {
    for (name, email) in [("First", "a@x.test"), ("Second", "b@x.test"), ("Third", "c@x.test")] {
        BusinessRepo::create(&pool, &new_business(name, email))
            .await
            .unwrap();
    }

    let names: Vec<_> = BusinessRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_email(pool: PgPool) {
    BusinessRepo::create(&pool, &new_business("The Corner Cafe", "find@x.test"))
        .await
        .unwrap();

    assert!(BusinessRepo::find_by_email(&pool, "find@x.test")
        .await
        .unwrap()
        .is_some());
    assert!(BusinessRepo::find_by_email(&pool, "missing@x.test")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Search / lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_matches_name_case_insensitively(pool: PgPool) {
    BusinessRepo::create(&pool, &new_business("The Corner Cafe", "s1@x.test"))
        .await
        .unwrap();

    let found = BusinessRepo::search_first(&pool, "corner CAFE").await.unwrap();
    assert_eq!(found.map(|b| b.email), Some("s1@x.test".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_does_not_treat_underscore_as_wildcard(pool: PgPool) {
    BusinessRepo::create(&pool, &new_business("Corner Cafe", "s2@x.test"))
        .await
        .unwrap();

    assert!(BusinessRepo::search_first(&pool, "Corner_Cafe")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pg_lookup_maps_row_to_match(pool: PgPool) {
    BusinessRepo::create(&pool, &new_business("Mike's Auto Repair", "mike@x.test"))
        .await
        .unwrap();
    let lookup = PgBusinessLookup::new(pool);

    let found = lookup.find_match("auto repair").await.unwrap().unwrap();
    assert_eq!(found.name, "Mike's Auto Repair");
    assert_eq!(found.phone.as_deref(), Some("(555) 123-4567"));
    assert!(found.image_url.ends_with("?text=Mike's+Auto+Repair"));

    assert_matches!(lookup.find_match("florist").await, Ok(None));
}
