//! # Ironlog Core Library
//!
//! This library provides the analytics engine behind Ironlog, a strength
//! training log. It turns raw workout sessions into training-load numbers
//! and cross-block comparisons. Everything here is pure computation over
//! caller-supplied data; the `ironlog` CLI is a thin layer that reads JSON
//! files and prints the results.
//!
//! ## Architecture
//!
//! - **Model**: Lenient input records (sets, exercise entries, workout logs,
//!   training blocks)
//! - **Taxonomy**: Exercise name to movement category and parent lift
//! - **Load**: E1RM estimation and the central/peripheral stress model
//! - **Blocks**: Segmentation of logs into training blocks and log filters
//! - **Analytics**: Variation impact, central-balance correlation,
//!   intensity zones, lift trajectories, progress series and the meta-block
//!   comparator
//!
//! ## Key Components
//!
//! - [`estimate_one_rep_max`]: RPE-adjusted Epley estimate
//! - [`StressModel`]: Seam for the per-set stress split
//! - [`segment`]: Logs to chronologically sorted blocks
//! - [`MetaBlockComparator`]: Competition-lift block comparison
//! - [`AnalyticsConfig`]: TOML configuration

pub mod analytics;
pub mod blocks;
pub mod config;
pub mod error;
pub mod load;
pub mod model;
pub mod taxonomy;

pub use analytics::{
    lift_progress, lift_trajectory, CentralBalanceCorrelator, CentralBalancePoint,
    IntensityHeatmapRow, IntensityZoneBinner, LiftProgressSeries, LiftTarget, LiftTrajectory,
    MetaBlockComparator, MetaBlockReport, VariationImpactAnalyzer, VariationImpactRow,
};
pub use blocks::{block_for_program, group_logs_by_block, segment, Block, LogFilter};
pub use config::AnalyticsConfig;
pub use error::{ConfigError, CoreError, FilterError, Result};
pub use load::{
    category_stress, compute_stress, estimate_one_rep_max, round_to, session_load,
    DefaultStressModel, StressModel, StressResult,
};
pub use model::{ExerciseEntry, SetRecord, TrainingBlock, WorkoutLog};
pub use taxonomy::{resolve_category, resolve_parent_lift, Category, CompetitionLift, Taxonomy};
