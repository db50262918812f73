use super::*;

/// Tests looking up an admin by email for login.
///
/// Expected: Ok(Some) for a known email, Ok(None) otherwise
#[tokio::test]
async fn finds_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let created = factory::admin_user::AdminUserFactory::new(db, mosque.id)
        .email("imam@example.com")
        .build()
        .await?;

    let repo = AdminUserRepository::new(db);
    let found = repo.find_by_email("imam@example.com").await?.unwrap();
    assert_eq!(found.id, created.id);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
