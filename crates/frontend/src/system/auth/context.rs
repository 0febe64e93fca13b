use contracts::system::auth::{LoginData, LoginRequest, Role, UserInfo};
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::config::{use_config, AppConfig};
use crate::shared::notify::{use_notifications, Notifications};

/// Logged-in user together with the bearer token sent on every request.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: UserInfo,
}

impl AuthSession {
    pub fn role(&self) -> Role {
        Role::parse(self.user.role.as_deref().unwrap_or_default())
    }
}

impl From<LoginData> for AuthSession {
    fn from(data: LoginData) -> Self {
        Self {
            token: data.token,
            user: data.user,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<AuthSession>>,
}

impl AuthContext {
    /// Restores a persisted session, if any.
    pub fn restore() -> Self {
        let session = storage::load_session().map(|(token, user)| {
            log::info!("restored session for {}", user.name);
            AuthSession { token, user }
        });
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn sign_in(&self, session: AuthSession) {
        storage::save_session(&session.token, &session.user);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.session.set(None);
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::restore());
    children()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// `Copy` handle that builds an [`ApiClient`] with the token of the moment.
#[derive(Clone, Copy)]
pub struct ApiHandle {
    config: StoredValue<AppConfig>,
    auth: AuthContext,
}

impl ApiHandle {
    pub fn client(&self) -> ApiClient {
        let token = self
            .auth
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()));
        ApiClient::new(&self.config.get_value(), token)
    }
}

pub fn use_api() -> ApiHandle {
    ApiHandle {
        config: StoredValue::new(use_config()),
        auth: use_auth(),
    }
}

/// Logs in and stores the new session.
pub async fn do_login(
    auth: AuthContext,
    client: ApiClient,
    request: LoginRequest,
) -> Result<(), String> {
    request.validate()?;
    let data = api::login(&client, &request)
        .await
        .map_err(|e| e.to_string())?;
    log::info!("login succeeded for {}", data.user.name);
    auth.sign_in(data.into());
    Ok(())
}

/// Turns API failures into notifications; a 401 also ends the session.
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    auth: AuthContext,
    notifications: Notifications,
}

impl ErrorReporter {
    pub fn report(&self, context: &str, err: ApiError) {
        match err {
            ApiError::Unauthorized => {
                log::warn!("{}: session expired", context);
                self.auth.sign_out();
                self.notifications.error(
                    "Sesi Habis",
                    "Sesi Anda telah berakhir. Silakan login kembali.",
                );
            }
            other => {
                log::warn!("{}: {}", context, other);
                self.notifications
                    .error(format!("Gagal {}", context), other.to_string());
            }
        }
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        auth: use_auth(),
        notifications: use_notifications(),
    }
}
