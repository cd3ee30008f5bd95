use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::User;

#[derive(Clone)]
pub struct JwtServiceConfig {
    pub secret: String,
    pub expiration: Duration,
}

#[derive(Clone)]
pub struct JwtService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    config: JwtServiceConfig,
}

/// Only the subject is trusted; role and status are re-read from the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: usize,
    pub iat: usize,
}

impl JwtService {
    pub fn new(config: JwtServiceConfig) -> Self {
        let validation = Validation::default();
        let encoding = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding,
            decoding,
            validation,
            config,
        }
    }

    pub fn issue(&self, user: &User) -> anyhow::Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("failed to calculate current timestamp")?;
        let exp = now + self.config.expiration;
        let claims = Claims {
            sub: user.id,
            exp: exp.as_secs() as usize,
            iat: now.as_secs() as usize,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .context("failed to encode JWT")
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .context("failed to verify JWT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;

    fn service(secret: &str) -> JwtService {
        JwtService::new(JwtServiceConfig {
            secret: secret.to_string(),
            expiration: Duration::from_secs(3600),
        })
    }

    fn user() -> User {
        User::new(
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "hash".to_string(),
            Role::User,
            true,
        )
    }

    #[test]
    fn issued_token_carries_subject() {
        let jwt = service("secret");
        let user = user();
        let token = jwt.issue(&user).unwrap();

        let claims = jwt.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_foreign_signature() {
        let token = service("one").issue(&user()).unwrap();
        assert!(service("two").verify(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize;
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        assert!(service("secret").verify(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(service("secret").verify("not.a.jwt").is_err());
    }
}
