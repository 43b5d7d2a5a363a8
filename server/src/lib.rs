mod app;

pub mod auth;
pub mod controllers;
pub mod extract;
pub mod services;
pub mod telemetry;

pub use self::app::App;
pub use self::controllers::build_axum_router;
