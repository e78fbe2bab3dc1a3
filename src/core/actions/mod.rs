pub mod assemble_points;
pub mod check_budget;
pub mod expand_segments;
