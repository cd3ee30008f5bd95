use std::sync::Arc;

use crate::{
    application::services::jwt::{JwtService, JwtServiceConfig},
    domain::{errors::DomainError, models::User, repositories::UserRepository},
};

/// Admission check: verifies a bearer token and loads the principal it names.
pub struct AuthenticateRequestUseCase {
    user_repo: Arc<dyn UserRepository>,
    jwt: JwtService,
}

impl AuthenticateRequestUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_config: JwtServiceConfig) -> Self {
        let jwt = JwtService::new(jwt_config);
        Self { user_repo, jwt }
    }

    pub async fn execute(&self, token: &str) -> Result<User, DomainError> {
        let claims = self.jwt.verify(token).map_err(|err| {
            tracing::debug!(error = %err, "rejected bearer token");
            DomainError::Unauthenticated("Invalid token".to_string())
        })?;

        self.user_repo
            .get(&claims.sub)
            .await?
            .ok_or_else(|| DomainError::Unauthenticated("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::application::usecases::test_support::Fixture;
    use crate::domain::models::Role;

    fn jwt_config() -> JwtServiceConfig {
        JwtServiceConfig {
            secret: "test-secret".to_string(),
            expiration: Duration::from_secs(60),
        }
    }

    #[tokio::test]
    async fn resolves_subject_to_current_record() {
        let fixture = Fixture::new();
        let mut user = fixture.user("Grace", Role::User).await;
        let token = JwtService::new(jwt_config()).issue(&user).unwrap();

        // role changes are visible without reissuing the token
        user.role = Role::Admin;
        fixture.repo.update(&user).await.unwrap();

        let usecase = AuthenticateRequestUseCase::new(fixture.repo.clone(), jwt_config());
        let principal = usecase.execute(&token).await.unwrap();
        assert_eq!(principal.id, user.id);
        assert_eq!(principal.role, Role::Admin);
    }

    #[tokio::test]
    async fn unknown_subject_is_unauthenticated() {
        let fixture = Fixture::new();
        let user = fixture.user("Ghost", Role::User).await;
        let token = JwtService::new(jwt_config()).issue(&user).unwrap();
        fixture.repo.delete(&user.id).await.unwrap();

        let usecase = AuthenticateRequestUseCase::new(fixture.repo.clone(), jwt_config());
        let err = usecase.execute(&token).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated(ref m) if m == "User not found"));
    }

    #[tokio::test]
    async fn bad_token_is_unauthenticated() {
        let fixture = Fixture::new();
        let usecase = AuthenticateRequestUseCase::new(fixture.repo.clone(), jwt_config());
        let err = usecase.execute("garbage").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthenticated(ref m) if m == "Invalid token"));
    }
}
