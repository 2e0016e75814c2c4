mod capacity_counters;

pub use capacity_counters::CapacityCounters;
