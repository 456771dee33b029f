use portfolio_backend::auth::password::verify_password;
use portfolio_backend::db::txn::with_txn;
use portfolio_backend::repos::users;
use portfolio_backend::services::users::{create_user, NewUser};

use super::state_with_db;
use crate::common::unique_email;

#[tokio::test]
async fn prepared_hash_is_stored_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let state = state_with_db().await?;
    let db = state.db().ok_or("no db")?;
    let email = unique_email("writer");

    // Hashing happens here, before any transaction exists
    let new_user = NewUser::prepare(email.clone(), "pa55word")?;
    let expected_hash = new_user.password_hash().to_string();

    let created = with_txn(db, move |txn| {
        Box::pin(async move { create_user(txn, &new_user).await })
    })
    .await?;
    assert_eq!(created.email, email);

    let stored = users::find_by_email(db, &email).await?.ok_or("user missing")?;
    assert_eq!(stored.password_hash, expected_hash);
    assert!(verify_password("pa55word", &stored.password_hash));
    Ok(())
}

#[tokio::test]
async fn duplicate_prepared_user_conflicts() -> Result<(), Box<dyn std::error::Error>> {
    let state = state_with_db().await?;
    let db = state.db().ok_or("no db")?;
    let email = unique_email("dup");

    let first = NewUser::prepare(email.clone(), "one")?;
    let second = NewUser::prepare(email, "two")?;
    create_user(db, &first).await?;

    let err = create_user(db, &second).await.unwrap_err();
    assert_eq!(err.code().as_str(), "EMAIL_TAKEN");
    Ok(())
}
