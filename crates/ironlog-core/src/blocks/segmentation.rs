//! Grouping logs into training blocks.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::load::{StressModel, StressResult};
use crate::model::{TrainingBlock, WorkoutLog};

/// The logs owned by one training block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<'a> {
    pub id: String,
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Input order until [`Block::sort_chronologically`] runs.
    pub logs: Vec<&'a WorkoutLog>,
}

impl<'a> Block<'a> {
    /// Empty block for a known program.
    pub fn for_program(program: &TrainingBlock) -> Self {
        Self {
            id: program.id.clone(),
            name: program.name.clone(),
            start_date: program.start_date.clone(),
            end_date: program.end_date.clone(),
            logs: Vec::new(),
        }
    }

    /// Block for a program id that has no program record. The id doubles as
    /// the label.
    pub fn unregistered(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            start_date: None,
            end_date: None,
            logs: Vec::new(),
        }
    }

    /// Stable sort by log date, ascending. Logs with unreadable dates sort
    /// first, in input order.
    pub fn sort_chronologically(&mut self) {
        self.logs.sort_by_key(|log| log.instant());
    }

    /// A sorted copy of the log list, leaving the block untouched.
    pub fn chronological_logs(&self) -> Vec<&'a WorkoutLog> {
        let mut logs = self.logs.clone();
        logs.sort_by_key(|log| log.instant());
        logs
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Stress summed over every valid set of every exercise in the block.
    pub fn stress(&self, model: &impl StressModel) -> StressResult {
        self.logs
            .iter()
            .flat_map(|log| log.exercises.iter())
            .flat_map(|entry| entry.sets.iter())
            .filter_map(|set| set.effort())
            .map(|(reps, rpe)| model.compute(reps, rpe))
            .sum()
    }
}

/// Group logs by owning block.
///
/// Logs are keyed strictly by `programId`. A log whose id has no matching
/// program still forms its own block. Legacy logs without an id are
/// matched by program name; logs matching nothing are dropped. Blocks
/// appear in the order their first log was seen and keep their logs in
/// input order.
pub fn group_logs_by_block<'a>(
    logs: impl IntoIterator<Item = &'a WorkoutLog>,
    programs: &[TrainingBlock],
) -> IndexMap<String, Block<'a>> {
    let mut blocks: IndexMap<String, Block<'a>> = IndexMap::new();

    for log in logs {
        let program = match (&log.program_id, &log.program_name) {
            (Some(id), _) => programs.iter().find(|p| &p.id == id).map(Ok).unwrap_or(Err(id)),
            (None, Some(name)) => match programs.iter().find(|p| &p.name == name) {
                Some(program) => Ok(program),
                None => {
                    tracing::debug!(log_id = %log.id, program_name = %name, "no block matches legacy program name");
                    continue;
                }
            },
            (None, None) => {
                tracing::debug!(log_id = %log.id, "log has no program reference");
                continue;
            }
        };

        let block = match program {
            Ok(program) => blocks
                .entry(program.id.clone())
                .or_insert_with(|| Block::for_program(program)),
            Err(id) => blocks
                .entry(id.clone())
                .or_insert_with(|| Block::unregistered(id)),
        };
        block.logs.push(log);
    }

    blocks
}

/// Group and sort in one pass. Every analytics entry point expects blocks
/// in this shape.
pub fn segment<'a>(
    logs: impl IntoIterator<Item = &'a WorkoutLog>,
    programs: &[TrainingBlock],
) -> Vec<Block<'a>> {
    group_logs_by_block(logs, programs)
        .into_values()
        .map(|mut block| {
            block.sort_chronologically();
            block
        })
        .collect()
}

/// Whether `log` belongs to `program` for the meta comparator: by id, else
/// by legacy name, else by falling inside the program's date window. A log
/// that names a different program never matches by date.
pub fn belongs_to(log: &WorkoutLog, program: &TrainingBlock, now: DateTime<Utc>) -> bool {
    if let Some(id) = &log.program_id {
        return id == &program.id;
    }
    if let Some(name) = &log.program_name {
        return name == &program.name;
    }
    match (program.window(now), log.instant()) {
        (Some((start, end)), Some(at)) => start <= at && at <= end,
        _ => false,
    }
}

/// The block of `program`, chronologically sorted, using [`belongs_to`].
pub fn block_for_program<'a>(
    logs: impl IntoIterator<Item = &'a WorkoutLog>,
    program: &TrainingBlock,
    now: DateTime<Utc>,
) -> Block<'a> {
    let mut block = Block::for_program(program);
    block.logs = logs
        .into_iter()
        .filter(|log| belongs_to(log, program, now))
        .collect();
    block.sort_chronologically();
    block
}
