pub mod check_in;
pub mod gym;

pub use check_in::{CheckIn, NewCheckIn};
pub use gym::{Gym, NewGym};
