//! Domain models for the chairside scheduler.

mod appointment;
mod resource;
mod time;

pub use appointment::*;
pub use resource::*;
pub use time::*;
