pub mod aggregate;
pub mod app;
pub mod clean;
pub mod config;
pub mod day;
pub mod io;
pub mod model;
pub mod normalize;
pub mod sample;
pub mod zone;

mod error;
#[cfg(test)]
mod testing;

pub use error::ScootstatError;
