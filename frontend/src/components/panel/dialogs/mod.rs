mod delete;
mod form;

pub use delete::delete_dialog;
pub use form::form_dialog;
