//! Client wrappers for the auth endpoints. They persist and clear the session
//! so routes never touch the token directly.

use crate::{
    app_lib::{AppError, post_json_empty, post_json_response, storage},
    features::auth::types::{AuthMode, AuthResponse, Credentials, LogoutRequest, Session},
};

/// Signs in or registers depending on `mode` and stores the resulting session.
pub async fn authenticate(mode: AuthMode, credentials: &Credentials) -> Result<Session, AppError> {
    let (body, headers) = post_json_response(mode.path(), credentials).await?;
    let response = AuthResponse::from_body(&body);

    let session = Session::resolve(headers.get("authorization"), response, &credentials.email)
        .ok_or_else(|| {
            tracing::warn!(path = mode.path(), "auth response carried no token");
            AppError::Parse("Missing session token.".to_string())
        })?;

    storage::session().save(&session.token, &session.email);
    tracing::info!(path = mode.path(), "signed in");
    Ok(session)
}

/// Ends the session on the server, then forgets it locally. On failure the
/// local session is kept so the operator can retry.
pub async fn logout() -> Result<(), AppError> {
    let store = storage::session();
    let request = LogoutRequest {
        email: store.email().unwrap_or_default(),
    };

    post_json_empty("/logout", &request).await?;
    store.clear();
    tracing::info!("signed out");
    Ok(())
}
