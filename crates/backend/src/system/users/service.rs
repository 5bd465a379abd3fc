use anyhow::Result;
use chrono::Utc;
use contracts::system::users::User;

use super::repository;
use crate::shared::config;
use crate::system::auth::password;

/// Create a user account. Authorization is not stored as a free-form flag:
/// the admin bit is derived from the configured admin address.
pub async fn create(email: &str, plain_password: &str, full_name: Option<String>) -> Result<String> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(anyhow::anyhow!("Invalid e-mail address"));
    }

    if repository::get_by_email(&email).await?.is_some() {
        return Err(anyhow::anyhow!("E-mail already registered"));
    }

    password::validate_password_strength(plain_password)?;
    let password_hash = password::hash_password(plain_password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        is_admin: is_admin_email(&email),
        email,
        full_name,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user_id)
}

/// Verify login credentials. Returns the user on success; `None` covers
/// every failure cause alike (unknown address, wrong password, disabled
/// account), so the login handler cannot leak which part was wrong.
pub async fn verify_credentials(email: &str, plain_password: &str) -> Result<Option<User>> {
    let email = email.trim().to_lowercase();

    let user = match repository::get_by_email(&email).await? {
        Some(user) if user.is_active => user,
        _ => return Ok(None),
    };

    let stored_hash = match repository::get_password_hash(&user.id).await? {
        Some(hash) => hash,
        None => return Ok(None),
    };

    if !password::verify_password(plain_password, &stored_hash)? {
        return Ok(None);
    }

    repository::touch_last_login(&user.id).await?;

    // The admin claim always reflects the current configuration
    let mut user = user;
    user.is_admin = is_admin_email(&user.email);
    Ok(Some(user))
}

pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    let user = repository::get_by_id(id).await?;
    Ok(user.map(|mut u| {
        u.is_admin = is_admin_email(&u.email);
        u
    }))
}

/// Authorization rule: exactly one configured staff address administers
/// the store
pub fn is_admin_email(email: &str) -> bool {
    config::get().admin.email.trim().eq_ignore_ascii_case(email.trim())
}
