//----------------------------------------
// estimation mod
//----------------------------------------
pub mod interval;
pub mod sample_stats;
pub(crate) mod t_dist;
pub mod types;
