//! Operator commands behind `academy-cli`.
//!
//! The admin role can only be granted here; the HTTP API never sets it.

use academy_auth::IdentityPayload;
use academy_config::JwtConfig;
use anyhow::{Context, bail};

use crate::modules::users::model::ADMIN_ROLE;
use crate::modules::users::repository::UserRepository;

pub async fn grant_admin(users: &dyn UserRepository, email: &str) -> anyhow::Result<()> {
    let updated = users
        .set_role(email, Some(ADMIN_ROLE))
        .await
        .context("Failed to update user role")?;

    if !updated {
        bail!("No user with email {email}");
    }
    Ok(())
}

pub async fn revoke_admin(users: &dyn UserRepository, email: &str) -> anyhow::Result<()> {
    let updated = users
        .set_role(email, None)
        .await
        .context("Failed to update user role")?;

    if !updated {
        bail!("No user with email {email}");
    }
    Ok(())
}

/// Signs a token for `email` without going through the front end, for
/// smoke-testing protected routes.
pub fn issue_token(email: &str, jwt_config: &JwtConfig) -> anyhow::Result<String> {
    academy_auth::issue_token(&IdentityPayload::new(email), jwt_config).map_err(|e| e.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryUserRepository;

    #[tokio::test]
    async fn test_grant_then_revoke_admin() {
        let users = InMemoryUserRepository::new();
        users.seed_user("ops@example.com", None).await;

        grant_admin(&users, "ops@example.com").await.unwrap();
        let user = users.find_by_email("ops@example.com").await.unwrap().unwrap();
        assert!(user.is_admin());

        revoke_admin(&users, "ops@example.com").await.unwrap();
        let user = users.find_by_email("ops@example.com").await.unwrap().unwrap();
        assert!(!user.is_admin());
    }

    #[tokio::test]
    async fn test_grant_admin_unknown_email() {
        let users = InMemoryUserRepository::new();
        let error = grant_admin(&users, "ghost@example.com").await.unwrap_err();
        assert!(error.to_string().contains("ghost@example.com"));
    }

    #[test]
    fn test_issue_token_verifies() {
        let config = JwtConfig {
            secret: "cli_secret".to_string(),
            access_token_expiry: 60,
        };
        let token = issue_token("ops@example.com", &config).unwrap();
        let claims = academy_auth::verify_token(&token, &config).unwrap();
        assert_eq!(claims.email(), "ops@example.com");
    }
}
