pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod labels;
pub mod view;

pub use app::*;
pub use cli::*;
pub use config::*;
pub use controller::*;
pub use labels::*;
pub use view::*;
