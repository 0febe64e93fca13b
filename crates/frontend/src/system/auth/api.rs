use contracts::system::auth::{LoginData, LoginRequest, LoginResponse};

use crate::shared::api_utils::{ApiClient, ApiError, Verb};

/// `POST /api/auth/login`; a 200 with `code != 200` is still a failed login.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginData, ApiError> {
    let response: LoginResponse = client
        .send_json(Verb::Post, "/api/auth/login", request)
        .await
        .map_err(|e| match e {
            // Wrong credentials come back as 401; that is not an expired session.
            ApiError::Unauthorized => ApiError::Server {
                status: 401,
                message: "Email atau password salah.".into(),
            },
            other => other,
        })?;

    response
        .into_result()
        .map_err(|message| ApiError::Server { status: 200, message })
}
