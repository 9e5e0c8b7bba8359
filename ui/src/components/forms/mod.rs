pub mod auth_form;
pub mod link_account;

pub use auth_form::AuthFormComponent;
pub use link_account::LinkAccountPanel;
