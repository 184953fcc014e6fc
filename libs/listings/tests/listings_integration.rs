//! Integration tests for the listings data layer
//!
//! These tests run against a live PostgreSQL instance reachable through the
//! usual environment configuration, apply the schema migrations, and drive
//! both entities through their full lifecycle.

use anyhow::Result;
use common::database::{DatabaseConfig, health_check, init_pool};
use listings::{Item, User, schema};
use serial_test::serial;
use sqlx::PgPool;

async fn setup() -> Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    let pool = init_pool(&config).await?;

    assert!(health_check(&pool).await?, "Database health check failed");
    schema::run_migrations(&pool).await?;

    Ok(pool)
}

#[tokio::test]
#[serial]
async fn test_user_lifecycle() -> Result<()> {
    let pool = setup().await?;

    let mut user = User::new(None, "seller@example.com")?;
    user.insert(&pool).await?;

    let user_id = user.user_id().expect("insert should assign an id");
    assert!(user_id > 0, "store-assigned id should be positive");

    // Change the email and push the update through
    user.set_email("moved@example.com")?;
    user.update(&pool).await?;

    let stored: String = sqlx::query_scalar("SELECT email FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(stored, "moved@example.com");

    user.delete(&pool).await?;
    assert!(!user.is_persisted(), "delete should clear the id");

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(remaining, 0, "deleted user should be gone from the store");

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_item_lifecycle() -> Result<()> {
    let pool = setup().await?;

    // Items reference a user, so persist the poster first
    let mut poster = User::new(None, "poster@example.com")?;
    poster.insert(&pool).await?;
    let poster_id = poster
        .user_id()
        .expect("insert should assign an id")
        .to_string();

    let mut item = Item::new(
        None,
        &poster_id,
        "Mountain bike, lightly used",
        "bike.jpg",
        "poster@example.com",
        "250",
        "Albuquerque",
    )?;
    item.insert(&pool).await?;

    let item_id = item.item_id().expect("insert should assign an id");
    assert!(item_id > 0, "store-assigned id should be positive");

    // Reprice and relocate, then push every mutable field through
    item.set_price("200")?;
    item.set_location("Santa Fe")?;
    item.update(&pool).await?;

    let (price, location): (i64, String) =
        sqlx::query_as("SELECT price, location FROM items WHERE item_id = $1")
            .bind(item_id)
            .fetch_one(&pool)
            .await?;
    assert_eq!(price, 200);
    assert_eq!(location, "Santa Fe");

    // Clean up - the item first, then the user it references
    item.delete(&pool).await?;
    poster.delete(&pool).await?;

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE item_id = $1")
        .bind(item_id)
        .fetch_one(&pool)
        .await?;
    assert_eq!(remaining, 0, "deleted item should be gone from the store");

    Ok(())
}
