pub mod booking;
pub mod employee;

pub use booking::*;
pub use employee::*;
