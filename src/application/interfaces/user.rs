use crate::application::models::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the logged-in user
    async fn get_current_user(&self) -> Result<User, AppError>;

    /// Gets every user
    async fn get_users(&self) -> Result<Vec<User>, AppError>;
}
