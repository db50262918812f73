use crate::server::{error::AppError, middleware::session::AuthSession};
use test_utils::builder::TestBuilder;

/// Tests storing and reading back the admin id.
///
/// Expected: Ok(Some(admin_id)) after set_admin_id
#[tokio::test]
async fn stores_and_retrieves_admin_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_admin_id().await?, None);
    assert!(!auth_session.is_authenticated().await?);

    auth_session.set_admin_id(42).await?;

    assert_eq!(auth_session.get_admin_id().await?, Some(42));
    assert!(auth_session.is_authenticated().await?);

    Ok(())
}

/// Tests logout clears the stored admin id.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn clear_removes_admin_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_admin_id(7).await?;
    auth_session.clear().await;

    assert_eq!(auth_session.get_admin_id().await?, None);

    Ok(())
}
