pub mod generation_request;
pub mod point;
pub mod segment;
pub mod segment_set;
