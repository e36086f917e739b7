use crate::error::AppError;
use crate::model::requests::{Credentials, RegisterRequest};
use crate::model::responses::{AuthSession, MessageResponse, User};
use async_trait::async_trait;

/// Interface for the auth endpoints
///
/// These calls only talk to the server. Persisting the returned token is left to the
/// caller (see `App::sign_in`).
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in with the given credentials
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AppError>;

    /// Registers a new user
    async fn register(&self, user: &RegisterRequest) -> Result<AuthSession, AppError>;

    /// Logs out the current session
    async fn logout(&self) -> Result<MessageResponse, AppError>;

    /// Gets the authenticated user
    async fn get_current_user(&self) -> Result<User, AppError>;
}
