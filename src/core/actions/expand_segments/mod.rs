pub mod expand_segments;
pub mod expand_segments_parallel_rayon;
pub mod expand_segments_parallel_scoped_threads;
pub mod expand_segments_serial;
pub mod partition_windows;
pub mod ports;
pub mod strategy;
