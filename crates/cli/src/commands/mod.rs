pub mod check;
pub mod config;
pub mod export;

pub use check::*;
pub use config::*;
pub use export::*;
