use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    authenticate_request::AuthenticateRequestUseCase, change_password::ChangePasswordUseCase,
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
    list_users::ListUsersUseCase, login::LoginUseCase, register_user::RegisterUserUseCase,
    update_user::UpdateUserUseCase, user_stats::UserStatsUseCase,
};

#[derive(Clone)]
pub struct ApiState {
    pub authenticate_usecase: Arc<AuthenticateRequestUseCase>,
    pub register_usecase: Arc<RegisterUserUseCase>,
    pub login_usecase: Arc<LoginUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub create_user_usecase: Arc<CreateUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub change_password_usecase: Arc<ChangePasswordUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
    pub user_stats_usecase: Arc<UserStatsUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Auth,
    Users,
    Stats,
}
