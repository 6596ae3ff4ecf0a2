pub mod app;
pub mod config;
pub mod display;
pub mod form;
pub mod logging;
pub mod state;
pub mod utils;

pub use app::App;
pub use config::Settings;
