use anyhow::Context;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;

use tokio::{sync::OnceCell, task};

/// Argon2id cost parameters.
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub memory_cost_kib: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Hashing is CPU bound, so both operations run on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct PasswordService {
    config: PasswordConfig,
    dummy_hash: Arc<OnceCell<String>>,
}

impl PasswordService {
    pub fn new(config: PasswordConfig) -> Self {
        Self {
            config,
            dummy_hash: Arc::default(),
        }
    }

    pub async fn hash(&self, password: &str) -> anyhow::Result<String> {
        let password = password.to_string();
        let config = self.config.clone();
        task::spawn_blocking(move || hash_password(&password, &config))
            .await
            .context("password hashing task panicked")?
    }

    pub async fn verify(&self, password: &str, password_hash: &str) -> anyhow::Result<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash)
                .map_err(|e| anyhow::anyhow!("invalid password hash format: {e}"))?;
            Ok::<bool, anyhow::Error>(
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
            )
        })
        .await
        .context("password verification task panicked")?
    }

    /// Spends the same work as [`verify`](Self::verify) when there is no
    /// stored hash to check against, so unknown accounts cannot be told
    /// apart by response time.
    pub async fn verify_dummy(&self, password: &str) -> anyhow::Result<()> {
        let dummy_hash = self
            .dummy_hash
            .get_or_try_init(|| self.hash("dummy-password"))
            .await?;
        self.verify(password, dummy_hash).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn has_dummy_hash(&self) -> bool {
        self.dummy_hash.initialized()
    }
}

fn hash_password(password: &str, config: &PasswordConfig) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(
        config.memory_cost_kib,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| anyhow::anyhow!("invalid argon2 params: {e}"))?;

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))
}

#[cfg(test)]
pub(crate) fn test_password_service() -> PasswordService {
    PasswordService::new(PasswordConfig {
        memory_cost_kib: 1024,
        time_cost: 1,
        parallelism: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_verifies_only_the_original_password() {
        let service = test_password_service();
        let hash = service.hash("hunter22").await.unwrap();

        assert_ne!(hash, "hunter22");
        assert!(hash.starts_with("$argon2id$"));
        assert!(service.verify("hunter22", &hash).await.unwrap());
        assert!(!service.verify("hunter23", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_gets_fresh_salt() {
        let service = test_password_service();
        let first = service.hash("secret1").await.unwrap();
        let second = service.hash("secret1").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn dummy_verification_builds_hash_once() {
        let service = test_password_service();
        assert!(!service.has_dummy_hash());

        service.verify_dummy("whatever").await.unwrap();
        let first = service.dummy_hash.get().cloned();
        service.clone().verify_dummy("other").await.unwrap();

        assert!(service.has_dummy_hash());
        assert_eq!(service.dummy_hash.get().cloned(), first);
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let service = test_password_service();
        assert!(service.verify("secret1", "plain-text").await.is_err());
    }
}
