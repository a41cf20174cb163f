pub mod check_in;
pub mod gym;

pub use check_in::{CheckInInput, CheckInService};
pub use gym::GymService;
