pub mod data_table;
mod login;
mod nav;

pub use data_table::data_table;
pub use login::login_widget;
pub use nav::{home_label, nav_bar};
