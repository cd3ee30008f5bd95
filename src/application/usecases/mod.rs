pub mod authenticate_request;
pub mod bootstrap_admin;
pub mod change_password;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod login;
pub mod register_user;
pub mod update_user;
pub mod user_stats;
