use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginUser};

use crate::shared::api_utils::post_json;

/// `POST /user/login` through the gateway, which adds the fixed upstream headers.
pub async fn login(request: &LoginRequest) -> Result<LoginUser, ApiError> {
    log::info!("login attempt for {} (password: ******)", request.user_name);
    let body = post_json("/api/user/login", request).await?;
    Ok(LoginUser::from_body(&body))
}
