use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{
    application::{
        services::{jwt::JwtServiceConfig, password::PasswordService},
        usecases::{
            authenticate_request::AuthenticateRequestUseCase,
            change_password::ChangePasswordUseCase, create_user::CreateUserUseCase,
            delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
            list_users::ListUsersUseCase, login::LoginUseCase,
            register_user::RegisterUserUseCase, update_user::UpdateUserUseCase,
            user_stats::UserStatsUseCase,
        },
    },
    domain::repositories::UserRepository,
    presentation::http::{
        endpoints::{
            auth::AuthEndpoints, health::HealthEndpoints, root::ApiState, stats::StatsEndpoints,
            users::UsersEndpoints,
        },
        errors::render_error,
    },
};

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub fn build_state(
    user_repo: Arc<dyn UserRepository>,
    jwt_config: JwtServiceConfig,
    passwords: PasswordService,
) -> Arc<ApiState> {
    Arc::new(ApiState {
        authenticate_usecase: Arc::new(AuthenticateRequestUseCase::new(
            user_repo.clone(),
            jwt_config.clone(),
        )),
        register_usecase: Arc::new(RegisterUserUseCase::new(
            user_repo.clone(),
            passwords.clone(),
        )),
        login_usecase: Arc::new(LoginUseCase::new(
            user_repo.clone(),
            passwords.clone(),
            jwt_config,
        )),
        list_users_usecase: Arc::new(ListUsersUseCase::new(user_repo.clone())),
        get_user_usecase: Arc::new(GetUserUseCase::new(user_repo.clone())),
        create_user_usecase: Arc::new(CreateUserUseCase::new(
            user_repo.clone(),
            passwords.clone(),
        )),
        update_user_usecase: Arc::new(UpdateUserUseCase::new(user_repo.clone())),
        change_password_usecase: Arc::new(ChangePasswordUseCase::new(
            user_repo.clone(),
            passwords,
        )),
        delete_user_usecase: Arc::new(DeleteUserUseCase::new(user_repo.clone())),
        user_stats_usecase: Arc::new(UserStatsUseCase::new(user_repo)),
    })
}

/// The API under `/api`, Swagger UI at `/`, JSON error bodies everywhere.
/// `state` is also attached as request data for the bearer checker.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            AuthEndpoints::new(state.clone()),
            UsersEndpoints::new(state.clone()),
            StatsEndpoints::new(state.clone()),
        ),
        "Dashboard API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{server_url}/api"));
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/", ui)
        .data(state)
        .with(Tracing)
        .catch_all_error(render_error)
}
