//! User management and startup admin seeding.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::password::hash_password;
use crate::config::server::AdminSeed;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};
use crate::services::validate;

pub const EMAIL_TAKEN_DETAIL: &str = "Mail already used. Please provide another one.";

/// A validated registration whose password is already hashed.
///
/// Argon2 is slow; build this before opening a transaction so no pooled
/// connection is held while hashing.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: String,
    password_hash: String,
}

impl NewUser {
    pub fn prepare(email: impl Into<String>, password: &str) -> Result<Self, AppError> {
        let email = email.into();
        validate::email(&email)?;
        if password.is_empty() {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "password must not be empty",
            ));
        }
        Ok(Self {
            email,
            password_hash: hash_password(password)?,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

/// Insert a prepared user; 409 when the email is taken.
pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_user: &NewUser,
) -> Result<User, AppError> {
    if users::find_by_email(conn, &new_user.email).await?.is_some() {
        return Err(DomainError::conflict(ConflictKind::UniqueEmail, EMAIL_TAKEN_DETAIL).into());
    }

    // The unique index still guards against a concurrent insert
    let user = users::create_user(conn, &new_user.email, &new_user.password_hash).await?;
    info!(user_id = user.id, email = %Redacted(&new_user.email), "user created");
    Ok(user)
}

pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<(), AppError> {
    if !users::delete_by_email(conn, email).await? {
        return Err(DomainError::not_found(NotFoundKind::User, "User not found").into());
    }
    info!(email = %Redacted(email), "user deleted");
    Ok(())
}

/// Create the configured admin unless that email already exists.
pub async fn seed_admin<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    admin: &AdminSeed,
) -> Result<(), AppError> {
    if users::find_by_email(conn, &admin.email).await?.is_some() {
        info!(email = %Redacted(&admin.email), "admin user already present");
        return Ok(());
    }

    let new_user = NewUser::prepare(admin.email.as_str(), &admin.password)?;
    match create_user(conn, &new_user).await {
        Ok(_) => Ok(()),
        // Another instance seeded it first
        Err(AppError::Conflict { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}
