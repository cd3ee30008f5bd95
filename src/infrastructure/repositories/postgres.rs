use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres, postgres::PgPoolOptions};
use uuid::Uuid;

use crate::domain::{
    errors::EmailTaken,
    models::{Role, User, UserStats},
    repositories::UserRepository,
    value_objects::UserQuery,
};

pub type PgPool = Pool<Postgres>;

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to postgres")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("failed to run migrations")?;

    Ok(pool)
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

const USER_COLUMNS: &str =
    "id, name, email, password_hash, role, is_active, last_login, created_at, updated_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("failed to query user by email")?;
        record.map(User::try_from).transpose()
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("failed to query user by id")?;
        record.map(User::try_from).transpose()
    }

    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, name, email, password_hash, role, is_active, last_login, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(user.last_login)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| write_error(err, &user.email, "failed to insert user"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2,
                email = $3,
                password_hash = $4,
                role = $5,
                is_active = $6,
                last_login = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .bind(user.last_login)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|err| write_error(err, &user.email, "failed to update user"))?;
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("failed to delete user")?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, query: &UserQuery) -> anyhow::Result<(Vec<User>, u64)> {
        let pattern = query.search_term().map(like_pattern);
        let limit = i64::from(query.page.limit);
        let offset = i64::try_from(query.page.offset()).unwrap_or(i64::MAX);

        // A NULL pattern disables the filter.
        let rows = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE $1::TEXT IS NULL OR name ILIKE $1 OR email ILIKE $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .context("failed to list users")?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM users
            WHERE $1::TEXT IS NULL OR name ILIKE $1 OR email ILIKE $1
            "#,
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .context("failed to count users")?;

        let users = rows
            .into_iter()
            .map(User::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok((users, total as u64))
    }

    async fn stats(&self, active_since: DateTime<Utc>) -> anyhow::Result<UserStats> {
        let (total, active): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE is_active AND last_login >= $1)
            FROM users
            "#,
        )
        .bind(active_since)
        .fetch_one(&self.pool)
        .await
        .context("failed to compute user stats")?;

        Ok(UserStats {
            total_users: total as u64,
            active_users: active as u64,
            inactive_users: (total - active) as u64,
        })
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
    last_login: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = anyhow::Error;

    fn try_from(value: UserRecord) -> Result<Self, Self::Error> {
        let role = Role::from_str(&value.role)
            .ok_or_else(|| anyhow::anyhow!("unknown role {}", value.role))?;
        Ok(Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            role,
            is_active: value.is_active,
            last_login: value.last_login,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

/// The `users.email` UNIQUE constraint surfaces as [`EmailTaken`].
fn write_error(err: sqlx::Error, email: &str, context: &'static str) -> anyhow::Error {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            EmailTaken(email.to_string()).into()
        }
        other => anyhow::Error::new(other).context(context),
    }
}

/// Wraps a search term for ILIKE, escaping its own wildcards.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ann"), "%ann%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern(r"a\b"), r"%a\\b%");
    }
}
