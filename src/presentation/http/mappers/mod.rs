use crate::{
    application::usecases::list_users::UserPage,
    domain::models::{User, UserStats},
    presentation::http::responses::{UserDto, UserListDto, UserStatsDto},
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        role: user.role.into(),
        is_active: user.is_active,
        last_login: user.last_login.map(|at| at.to_rfc3339()),
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}

pub fn map_page(page: &UserPage) -> UserListDto {
    UserListDto {
        users: page.users.iter().map(map_user).collect(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_users: page.total_users,
    }
}

pub fn map_stats(stats: &UserStats) -> UserStatsDto {
    UserStatsDto {
        total_users: stats.total_users,
        active_users: stats.active_users,
        inactive_users: stats.inactive_users,
    }
}
