use crate::application::client::ApiClient;
use crate::application::interfaces::auth::AuthService;
use crate::error::AppError;
use crate::model::requests::{Credentials, RegisterRequest};
use crate::model::responses::{AuthSession, CurrentUser, MessageResponse, User};
use async_trait::async_trait;
use tracing::{debug, info};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const LOGOUT_PATH: &str = "/auth/logout";
const ME_PATH: &str = "/auth/me";

#[async_trait]
impl AuthService for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AppError> {
        info!("Logging in as {}", credentials.username);
        let session: AuthSession = self.post(LOGIN_PATH, credentials).await?;
        debug!("Login returned a token: {}", session.token.is_some());
        Ok(session)
    }

    async fn register(&self, user: &RegisterRequest) -> Result<AuthSession, AppError> {
        info!("Registering user {}", user.username);
        self.post(REGISTER_PATH, user).await
    }

    async fn logout(&self) -> Result<MessageResponse, AppError> {
        info!("Logging out");
        self.post_empty(LOGOUT_PATH).await
    }

    async fn get_current_user(&self) -> Result<User, AppError> {
        debug!("Getting current user");
        let current: CurrentUser = self.get(ME_PATH).await?;
        Ok(current.into_user())
    }
}
