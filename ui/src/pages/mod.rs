//! Pages module for the application.
//!
//! One page per [`Route`](userdesk_business::Route):
//! - `login_page`: login form for visitors without a session
//! - `dashboard_page`: landing page after login
//! - `users_page`: the user-management table
//! - `not_found_page`: any unknown path

mod dashboard_page;
mod login_page;
mod not_found_page;
mod users_page;

pub use dashboard_page::dashboard_page;
pub use login_page::login_page;
pub use not_found_page::not_found_page;
pub use users_page::users_page;
