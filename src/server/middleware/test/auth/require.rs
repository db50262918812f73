use super::*;

/// Tests a valid session resolves to the admin and their mosque.
///
/// Expected: Ok(AdminContext) with matching ids
#[tokio::test]
async fn grants_access_with_valid_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let mosque = factory::create_mosque(db).await?;
    let admin = factory::create_admin_user(db, mosque.id).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_admin_id(admin.id).await?;

    let context = AuthGuard::new(db, session).require().await?;

    assert_eq!(context.admin.id, admin.id);
    assert_eq!(context.mosque.id, mosque.id);

    Ok(())
}

/// Tests an empty session is rejected.
///
/// Expected: Err(AuthError::AdminNotInSession)
#[tokio::test]
async fn denies_access_when_not_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AdminNotInSession) => {}
        e => panic!("Expected AdminNotInSession error, got: {:?}", e),
    }

    Ok(())
}

/// Tests a session referencing a deleted account is rejected.
///
/// Expected: Err(AuthError::AdminNotInDatabase)
#[tokio::test]
async fn denies_access_for_deleted_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_admin_id(9999).await?;

    let result = AuthGuard::new(db, session).require().await;

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AdminNotInDatabase(admin_id)) => {
            assert_eq!(admin_id, 9999);
        }
        e => panic!("Expected AdminNotInDatabase error, got: {:?}", e),
    }

    Ok(())
}
