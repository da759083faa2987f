mod alert;
mod button;
mod modal;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use modal::Modal;
pub(crate) use spinner::Spinner;
