pub mod check_in;
pub mod common;
pub mod gym;
