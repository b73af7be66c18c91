//! Block segmentation and log pre-filtering.

mod filter;
mod segmentation;

pub use filter::LogFilter;
pub use segmentation::{belongs_to, block_for_program, group_logs_by_block, segment, Block};
