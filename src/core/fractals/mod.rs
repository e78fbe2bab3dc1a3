pub mod errors;
pub mod koch;
pub mod quadratic_koch;
pub mod seeds;
