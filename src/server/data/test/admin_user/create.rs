use super::*;

/// Tests creating the seeded admin account.
///
/// Expected: Ok with the account persisted and any_exists() true
#[tokio::test]
async fn creates_admin_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = AdminUserRepository::new(db);
    assert!(!repo.any_exists().await?);

    let admin = repo
        .create(CreateAdminUserParam {
            mosque_id: mosque.id,
            email: "imam@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$hash".to_string(),
            name: "Administrator".to_string(),
        })
        .await?;

    assert_eq!(admin.email, "imam@example.com");
    assert!(repo.any_exists().await?);

    Ok(())
}
