//! User list screen and the modals it opens.

mod checkout;
mod editor;
mod list;

pub(crate) use list::UsersListPage;
