use std::sync::Arc;

use crate::{
    application::services::password::PasswordService,
    domain::{
        errors::DomainError,
        models::{Role, User, normalize_email},
        repositories::UserRepository,
    },
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub struct RegisterUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    passwords: PasswordService,
}

pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, passwords: PasswordService) -> Self {
        Self {
            user_repo,
            passwords,
        }
    }

    pub async fn execute(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        let user = create_account(
            self.user_repo.as_ref(),
            &self.passwords,
            NewAccount {
                name: request.name,
                email: request.email,
                password: request.password,
                role: Role::User,
                is_active: true,
            },
        )
        .await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(user)
    }
}

pub(crate) struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub is_active: bool,
}

/// Validates, de-duplicates by email, hashes the password and stores the user.
pub(crate) async fn create_account(
    repo: &dyn UserRepository,
    passwords: &PasswordService,
    account: NewAccount,
) -> Result<User, DomainError> {
    let name = account.name.trim().to_string();
    if name.is_empty() {
        return Err(DomainError::Validation("Name is required".to_string()));
    }
    let email = normalize_email(&account.email);
    if !email.contains('@') {
        return Err(DomainError::Validation("A valid email is required".to_string()));
    }
    validate_password(&account.password)?;

    if repo.find_by_email(&email).await?.is_some() {
        return Err(DomainError::user_exists());
    }

    let password_hash = passwords.hash(&account.password).await?;
    let user = User::new(name, email, password_hash, account.role, account.is_active);
    // A concurrent request may take the email while we hash.
    repo.insert(&user)
        .await
        .map_err(|err| DomainError::from_write(err, DomainError::user_exists))?;
    Ok(user)
}

pub(crate) fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::test_support::Fixture;

    fn request(email: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            name: "  Linus ".to_string(),
            email: email.to_string(),
            password: "penguin".to_string(),
        }
    }

    #[tokio::test]
    async fn registers_plain_active_user() {
        let fixture = Fixture::new();
        let usecase = RegisterUserUseCase::new(fixture.repo.clone(), fixture.passwords.clone());

        let user = usecase.execute(request(" Linus@Example.com ")).await.unwrap();
        assert_eq!(user.name, "Linus");
        assert_eq!(user.email, "linus@example.com");
        assert_eq!(user.role, Role::User);
        assert!(user.is_active);
        assert_ne!(user.password_hash, "penguin");
        assert!(fixture.passwords.verify("penguin", &user.password_hash).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_case_insensitively() {
        let fixture = Fixture::new();
        let usecase = RegisterUserUseCase::new(fixture.repo.clone(), fixture.passwords.clone());
        usecase.execute(request("linus@example.com")).await.unwrap();

        let err = usecase.execute(request("LINUS@example.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_registrations_yield_one_conflict() {
        let fixture = Fixture::new();
        let usecase = RegisterUserUseCase::new(fixture.repo.clone(), fixture.passwords.clone());

        let (first, second) = tokio::join!(
            usecase.execute(request("race@example.com")),
            usecase.execute(request("race@example.com")),
        );

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(DomainError::AlreadyExists(_))))
        );
    }

    #[tokio::test]
    async fn rejects_short_password_and_blank_name() {
        let fixture = Fixture::new();
        let usecase = RegisterUserUseCase::new(fixture.repo.clone(), fixture.passwords.clone());

        let mut short = request("a@example.com");
        short.password = "12345".to_string();
        assert!(matches!(
            usecase.execute(short).await,
            Err(DomainError::Validation(_))
        ));

        let mut blank = request("b@example.com");
        blank.name = "   ".to_string();
        assert!(matches!(
            usecase.execute(blank).await,
            Err(DomainError::Validation(_))
        ));
    }
}
