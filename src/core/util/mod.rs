pub mod calculate_partition_ranges;
pub mod calculate_workers_for_segment_partitioning;
