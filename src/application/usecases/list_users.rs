use std::sync::Arc;

use crate::domain::{
    errors::DomainError, models::User, repositories::UserRepository, value_objects::UserQuery,
};

pub struct ListUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

#[derive(Debug)]
pub struct UserPage {
    pub users: Vec<User>,
    pub current_page: u32,
    pub total_pages: u64,
    pub total_users: u64,
}

impl ListUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, query: UserQuery) -> Result<UserPage, DomainError> {
        let (users, total_users) = self.user_repo.list(&query).await?;
        Ok(UserPage {
            users,
            current_page: query.page.page,
            total_pages: query.page.total_pages(total_users),
            total_users,
        })
    }
}
