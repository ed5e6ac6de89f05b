//! Terminal driver: feeds engine events and stdin commands through the
//! coordinator and prints the resulting view.
mod app;
mod effects;
mod input;
mod logging;
mod render;

pub use app::run_app;
