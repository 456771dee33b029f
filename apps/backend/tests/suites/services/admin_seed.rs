use portfolio_backend::auth::password::verify_password;
use portfolio_backend::config::server::AdminSeed;
use portfolio_backend::repos::users;
use portfolio_backend::services::users::seed_admin;

use super::state_with_db;
use crate::common::unique_email;

#[tokio::test]
async fn seeding_twice_keeps_the_first_password() -> Result<(), Box<dyn std::error::Error>> {
    let state = state_with_db().await?;
    let db = state.db().ok_or("no db")?;
    let email = unique_email("admin");

    seed_admin(db, &AdminSeed { email: email.clone(), password: "first".into() }).await?;
    seed_admin(db, &AdminSeed { email: email.clone(), password: "second".into() }).await?;

    let user = users::find_by_email(db, &email).await?.ok_or("admin missing")?;
    assert!(verify_password("first", &user.password_hash));
    assert!(!verify_password("second", &user.password_hash));
    Ok(())
}

#[tokio::test]
async fn seeding_rejects_malformed_email() -> Result<(), Box<dyn std::error::Error>> {
    let state = state_with_db().await?;
    let db = state.db().ok_or("no db")?;

    let err = seed_admin(db, &AdminSeed { email: "admin".into(), password: "pw".into() })
        .await
        .unwrap_err();
    assert_eq!(err.code().as_str(), "INVALID_EMAIL");
    Ok(())
}
