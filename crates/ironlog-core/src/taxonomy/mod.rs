//! Exercise taxonomy.
//!
//! Maps an exercise name to a movement-pattern [`Category`] and to the
//! canonical parent lift it derives from. Lookup is exact against the
//! exercise table first, then falls back to the ordered name heuristics in
//! [`heuristics`]. Unknown names never fail; they degrade to a heuristic
//! bucket.

mod heuristics;
mod table;

pub use heuristics::{categorize, HeuristicRule, HEURISTIC_RULES};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Movement-pattern category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Knee")]
    Knee,
    #[serde(rename = "Hip")]
    Hip,
    #[serde(rename = "Horizontal Push")]
    HorizontalPush,
    #[serde(rename = "Vertical Push")]
    VerticalPush,
    #[serde(rename = "Horizontal Pull")]
    HorizontalPull,
    #[serde(rename = "Vertical Pull")]
    VerticalPull,
    #[serde(rename = "Isolation-Upper")]
    IsolationUpper,
    #[serde(rename = "Isolation-Lower")]
    IsolationLower,
    #[serde(rename = "Isolation")]
    Isolation,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Knee => "Knee",
            Category::Hip => "Hip",
            Category::HorizontalPush => "Horizontal Push",
            Category::VerticalPush => "Vertical Push",
            Category::HorizontalPull => "Horizontal Pull",
            Category::VerticalPull => "Vertical Pull",
            Category::IsolationUpper => "Isolation-Upper",
            Category::IsolationLower => "Isolation-Lower",
            Category::Isolation => "Isolation",
        }
    }

    /// Parent lift implied by the category when the exercise itself is not
    /// in the table.
    pub fn default_parent(&self) -> Option<&'static str> {
        match self {
            Category::Knee => Some("Squat"),
            Category::Hip => Some("Deadlift"),
            Category::HorizontalPush => Some("Bench Press"),
            Category::VerticalPush => Some("Overhead Press"),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the exercise table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub name: String,
    pub category: Category,
    pub parent: String,
}

/// Read-only exercise table.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    entries: BTreeMap<String, TaxonomyEntry>,
}

static STANDARD: LazyLock<Taxonomy> = LazyLock::new(|| {
    Taxonomy::from_entries(table::STANDARD_EXERCISES.iter().map(|(name, category, parent)| {
        TaxonomyEntry {
            name: name.to_string(),
            category: *category,
            parent: parent.to_string(),
        }
    }))
});

impl Taxonomy {
    /// The built-in table.
    pub fn standard() -> &'static Taxonomy {
        &STANDARD
    }

    pub fn from_entries(entries: impl IntoIterator<Item = TaxonomyEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.name.clone(), e)).collect(),
        }
    }

    /// The built-in table plus additional rows. Extra rows replace built-in
    /// rows of the same name.
    pub fn extended(extra: impl IntoIterator<Item = TaxonomyEntry>) -> Self {
        let mut taxonomy = Self::standard().clone();
        for entry in extra {
            taxonomy.entries.insert(entry.name.clone(), entry);
        }
        taxonomy
    }

    pub fn get(&self, name: &str) -> Option<&TaxonomyEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &TaxonomyEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup, then heuristics.
    pub fn resolve_category(&self, name: &str) -> Category {
        match self.entries.get(name) {
            Some(entry) => entry.category,
            None => categorize(name),
        }
    }

    /// Exact lookup, then the category's default parent, then the name
    /// itself.
    pub fn resolve_parent_lift(&self, name: &str) -> String {
        if let Some(entry) = self.entries.get(name) {
            return entry.parent.clone();
        }
        categorize(name)
            .default_parent()
            .map(str::to_string)
            .unwrap_or_else(|| name.to_string())
    }

    /// Whether an entry counts as the parent lift itself rather than a
    /// variation of it: the parent's own name, its competition label, or
    /// an explicit primary flag.
    pub fn is_parent_movement(&self, name: &str, flagged_primary: bool) -> bool {
        if flagged_primary {
            return true;
        }
        let parent = self.resolve_parent_lift(name);
        name == parent || CompetitionLift::from_label(name).is_some()
    }
}

/// Category of `name` against the built-in table.
pub fn resolve_category(name: &str) -> Category {
    Taxonomy::standard().resolve_category(name)
}

/// Parent lift of `name` against the built-in table.
pub fn resolve_parent_lift(name: &str) -> String {
    Taxonomy::standard().resolve_parent_lift(name)
}

/// The three competition lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLift {
    Squat,
    Bench,
    Deadlift,
}

impl CompetitionLift {
    pub const ALL: [CompetitionLift; 3] = [
        CompetitionLift::Squat,
        CompetitionLift::Bench,
        CompetitionLift::Deadlift,
    ];

    /// The exact entry name logged for the competition version of the lift.
    pub fn label(&self) -> &'static str {
        match self {
            CompetitionLift::Squat => "Competition Squat",
            CompetitionLift::Bench => "Competition Bench Press",
            CompetitionLift::Deadlift => "Competition Deadlift",
        }
    }

    /// Canonical parent lift name.
    pub fn parent(&self) -> &'static str {
        match self {
            CompetitionLift::Squat => "Squat",
            CompetitionLift::Bench => "Bench Press",
            CompetitionLift::Deadlift => "Deadlift",
        }
    }

    /// Categories whose exercises count as assistance work for this lift.
    pub fn assist_categories(&self) -> &'static [Category] {
        match self {
            CompetitionLift::Squat => &[Category::Knee, Category::Hip, Category::IsolationLower],
            CompetitionLift::Bench => &[
                Category::HorizontalPush,
                Category::VerticalPush,
                Category::IsolationUpper,
            ],
            CompetitionLift::Deadlift => &[Category::Hip, Category::Knee, Category::IsolationLower],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lift| lift.label() == label)
    }
}

impl fmt::Display for CompetitionLift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.parent())
    }
}

impl FromStr for CompetitionLift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Self::Squat),
            "bench" | "bench press" | "bench_press" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            other => Err(format!("Unknown competition lift: {}", other)),
        }
    }
}
