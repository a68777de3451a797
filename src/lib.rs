pub mod application;
pub mod domain;
pub mod entities;
pub mod infrastructure;

pub use application::*;
pub use domain::*;
pub use entities::*;
pub use infrastructure::*;
