use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// The session object handed to components via context. Everything that
/// needs to know who is signed in talks to this — never to globals.
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
}

impl AuthSession {
    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.get().user_info
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().access_token.is_some()
    }

    /// Authorization: signed in as the configured admin address
    pub fn is_authorized(&self) -> bool {
        self.state
            .get()
            .user_info
            .as_ref()
            .map(|u| u.is_admin)
            .unwrap_or(false)
    }

    /// Sign in with e-mail and password. Any failure maps to one generic
    /// message so the form cannot reveal which field was wrong.
    pub async fn sign_in(self, email: String, password: String) -> Result<(), String> {
        let response = api::login(email, password)
            .await
            .map_err(|_| "Invalid e-mail or password".to_string())?;

        storage::save_access_token(&response.access_token);
        storage::save_refresh_token(&response.refresh_token);

        self.set_state.set(AuthState {
            access_token: Some(response.access_token),
            user_info: Some(response.user),
        });

        Ok(())
    }

    pub async fn sign_out(self) {
        if let Some(refresh_token) = storage::get_refresh_token() {
            let _ = api::logout(refresh_token).await;
        }

        storage::clear_tokens();
        self.set_state.set(AuthState::default());
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (state, set_state) = signal(AuthState::default());
    let session = AuthSession { state, set_state };

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            // Validate token by fetching current user
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(_) => {
                    // Token invalid, try refresh
                    if let Some(refresh_token) = storage::get_refresh_token() {
                        match api::refresh_token(refresh_token).await {
                            Ok(response) => {
                                storage::save_access_token(&response.access_token);

                                if let Ok(user_info) =
                                    api::get_current_user(&response.access_token).await
                                {
                                    set_state.set(AuthState {
                                        access_token: Some(response.access_token),
                                        user_info: Some(user_info),
                                    });
                                }
                            }
                            Err(_) => {
                                storage::clear_tokens();
                            }
                        }
                    } else {
                        storage::clear_tokens();
                    }
                }
            }
        });
    });

    provide_context(session);

    children()
}

/// Hook to access the session object
pub fn use_auth_session() -> AuthSession {
    use_context::<AuthSession>().expect("AuthProvider not found in component tree")
}
