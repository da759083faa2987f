//! Client helpers for the `/users` endpoints. Paths stay here so routes only
//! deal with typed values; the API enforces authorization.

use crate::{
    app_lib::{AppError, MultipartMethod, delete, get_json_with_headers, send_multipart},
    features::users::{
        pagination::{
            CURRENT_PAGE_HEADER, PER_PAGE_HEADER, PageInfo, TOTAL_PAGES_HEADER, TOTAL_USERS_HEADER,
        },
        types::{User, UserId, UserPage, ValidUser},
    },
};
use web_sys::{File, FormData};

/// Multipart field repeated once per uploaded avatar.
const AVATAR_FIELD: &str = "avatars";

/// Fetches one page of users along with its pagination headers.
pub async fn list_users(page: u32, limit: u32) -> Result<UserPage, AppError> {
    tracing::debug!(page, limit, "fetching users");
    let query = [("page", page.to_string()), ("limit", limit.to_string())];
    let (users, headers): (Vec<User>, _) = get_json_with_headers("/users", &query).await?;

    let info = PageInfo::from_headers(
        page,
        headers.get(CURRENT_PAGE_HEADER).as_deref(),
        headers.get(TOTAL_PAGES_HEADER).as_deref(),
        headers.get(TOTAL_USERS_HEADER).as_deref(),
        headers.get(PER_PAGE_HEADER).as_deref(),
    );
    Ok(UserPage { users, info })
}

/// Creates a user; avatars are uploaded in the same request.
pub async fn create_user(user: &ValidUser, avatars: &[File]) -> Result<User, AppError> {
    let form = build_form(user, avatars)?;
    let created = send_multipart(MultipartMethod::Post, "/users", form).await?;
    tracing::info!(avatars = avatars.len(), "user created");
    Ok(created)
}

/// Updates a user; new avatars are uploaded in the same request.
pub async fn update_user(id: &UserId, user: &ValidUser, avatars: &[File]) -> Result<User, AppError> {
    let form = build_form(user, avatars)?;
    let updated = send_multipart(MultipartMethod::Patch, &format!("/users/{id}"), form).await?;
    tracing::info!(%id, avatars = avatars.len(), "user updated");
    Ok(updated)
}

pub async fn delete_user(id: &UserId) -> Result<(), AppError> {
    delete(&format!("/users/{id}")).await?;
    tracing::info!(%id, "user deleted");
    Ok(())
}

fn build_form(user: &ValidUser, avatars: &[File]) -> Result<FormData, AppError> {
    let form_error = |_| AppError::Serialization("Failed to build the upload form.".to_string());

    let form = FormData::new().map_err(form_error)?;
    form.append_with_str("name", &user.name).map_err(form_error)?;
    form.append_with_str("email", &user.email).map_err(form_error)?;
    form.append_with_str("age", &user.age.to_string())
        .map_err(form_error)?;
    for file in avatars {
        form.append_with_blob_and_filename(AVATAR_FIELD, file, &file.name())
            .map_err(form_error)?;
    }
    Ok(form)
}
