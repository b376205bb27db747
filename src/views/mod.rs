pub mod app;
pub mod shared;
pub mod home;
pub mod about;
pub mod services;
pub mod login;
pub mod reports;
pub mod help;
pub mod register;

pub use app::{render_app, render_page};
pub use home::render_home;
pub use about::render_about;
pub use services::{render_services, render_service_card, render_service_grid, CardStyle};
pub use login::render_login;
pub use reports::render_reports;
pub use help::render_help;
pub use register::render_register;
