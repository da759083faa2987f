//! Keeps the rendered page in sync after a mutation without refetching it.

use super::types::{User, UserId};
use crate::app_lib::AppError;

#[derive(Clone, Debug)]
pub enum UserChange {
    Created(User),
    Updated(User),
    Deleted(UserId),
}

/// Applies a successful mutation to the users currently on screen. Created
/// users are appended; updates replace the matching row (or are appended when
/// the row is no longer shown); deletions drop every row with that id.
pub fn apply_change(users: &mut Vec<User>, change: UserChange) {
    match change {
        UserChange::Created(user) => users.push(user),
        UserChange::Updated(user) => match users.iter_mut().find(|row| row.id == user.id) {
            Some(row) => *row = user,
            None => users.push(user),
        },
        UserChange::Deleted(id) => users.retain(|row| row.id != id),
    }
}

/// Banner text after a page fetch. A successful fetch clears whatever an
/// earlier failure left behind.
pub fn fetch_banner<T>(result: &Result<T, AppError>) -> Option<String> {
    result
        .as_ref()
        .err()
        .map(|err| format!("Error fetching users: {}", err.user_message()))
}

#[cfg(test)]
mod tests {
    use super::{UserChange, apply_change, fetch_banner};
    use crate::app_lib::AppError;
    use crate::features::users::types::{User, UserId};

    fn user(id: i64, name: &str) -> User {
        User {
            id: UserId::Number(id),
            name: name.to_string(),
            email: format!("{}@roster.dev", name.to_lowercase()),
            age: Some(30),
            avatars: None,
        }
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|user| user.name.as_str()).collect()
    }

    #[test]
    fn created_users_are_appended() {
        let mut users = vec![user(1, "Ada")];
        apply_change(&mut users, UserChange::Created(user(2, "Lin")));
        assert_eq!(names(&users), ["Ada", "Lin"]);
    }

    #[test]
    fn updates_replace_in_place() {
        let mut users = vec![user(1, "Ada"), user(2, "Lin"), user(3, "Bo")];
        apply_change(&mut users, UserChange::Updated(user(2, "Linh")));
        assert_eq!(names(&users), ["Ada", "Linh", "Bo"]);
    }

    #[test]
    fn deletes_remove_by_id() {
        let mut users = vec![user(1, "Ada"), user(2, "Lin")];
        apply_change(&mut users, UserChange::Deleted(UserId::Number(1)));
        assert_eq!(names(&users), ["Lin"]);

        apply_change(&mut users, UserChange::Deleted(UserId::Number(99)));
        assert_eq!(names(&users), ["Lin"]);
    }

    #[test]
    fn numeric_and_text_ids_do_not_collide() {
        let mut users = vec![user(1, "Ada")];
        apply_change(&mut users, UserChange::Deleted(UserId::Text("1".to_string())));
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn successful_fetch_clears_the_error_banner() {
        let failed: Result<(), AppError> =
            Err(AppError::Network("Unable to reach the server.".to_string()));
        assert_eq!(
            fetch_banner(&failed).as_deref(),
            Some("Error fetching users: Unable to reach the server.")
        );

        let recovered: Result<(), AppError> = Ok(());
        assert_eq!(fetch_banner(&recovered), None);
    }
}
