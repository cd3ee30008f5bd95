use std::io::Error;
use std::sync::Arc;

use anyhow::Context;
use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dashboard::{
    application::{
        services::{
            jwt::JwtServiceConfig,
            password::{PasswordConfig, PasswordService},
        },
        usecases::bootstrap_admin::{BootstrapAdminRequest, BootstrapAdminUseCase},
    },
    build_app, build_state,
    config::Config,
    domain::repositories::UserRepository,
    infrastructure::repositories::{InMemoryUserRepository, PostgresUserRepository, postgres},
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(config).await.map_err(|err| {
        tracing::error!(error = ?err, "server failed");
        Error::other(err)
    })
}

async fn run(config: Config) -> anyhow::Result<()> {
    let server_url = config.server_url();
    let bind_addr = format!("{}:{}", config.host, config.port);

    let user_repo: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            let pool = postgres::connect(url, config.database_max_connections).await?;
            tracing::info!("connected to postgres");
            PostgresUserRepository::new(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let passwords = PasswordService::new(PasswordConfig::default());

    if let Some(admin) = config.admin {
        BootstrapAdminUseCase::new(user_repo.clone(), passwords.clone())
            .execute(BootstrapAdminRequest {
                name: admin.name,
                email: admin.email,
                password: admin.password,
            })
            .await
            .context("failed to bootstrap admin user")?;
    }

    let jwt_config = JwtServiceConfig {
        secret: config.jwt_secret,
        expiration: config.jwt_expiration,
    };
    let state = build_state(user_repo, jwt_config, passwords);

    tracing::info!("Starting server at {}", server_url);

    Server::new(TcpListener::bind(bind_addr))
        .run(build_app(state, server_url))
        .await
        .context("server error")
}
