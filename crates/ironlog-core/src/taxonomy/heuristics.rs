//! Name heuristics for exercises missing from the table.
//!
//! Rules are evaluated top to bottom and the first match wins. "press"
//! appears in several movement names, so the bench rule must run before
//! the overhead rule.

use super::Category;

/// A substring rule: any needle found in the lower-cased name selects the
/// category.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicRule {
    pub needles: &'static [&'static str],
    pub category: Category,
}

impl HeuristicRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.needles.iter().any(|needle| lowered.contains(needle))
    }
}

pub const HEURISTIC_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        needles: &["squat", "lunge", "leg press", "leg-press"],
        category: Category::Knee,
    },
    HeuristicRule {
        needles: &["deadlift", "hinge", "good morning", "good-morning"],
        category: Category::Hip,
    },
    HeuristicRule {
        needles: &["bench", "push-up", "push up", "pushup"],
        category: Category::HorizontalPush,
    },
    HeuristicRule {
        needles: &["overhead", "press", "dip"],
        category: Category::VerticalPush,
    },
    HeuristicRule {
        needles: &["row"],
        category: Category::HorizontalPull,
    },
    HeuristicRule {
        needles: &["pull-up", "pull up", "pullup", "pulldown", "chin-up", "chin up", "chinup"],
        category: Category::VerticalPull,
    },
    HeuristicRule {
        needles: &["curl", "tricep", "lateral", "raise", "face-pull", "face pull"],
        category: Category::IsolationUpper,
    },
    HeuristicRule {
        needles: &["leg-ext", "leg ext", "leg-curl", "leg curl", "calf", "glute"],
        category: Category::IsolationLower,
    },
];

/// Category by heuristic alone. Falls back to [`Category::Isolation`].
pub fn categorize(name: &str) -> Category {
    let lowered = name.to_lowercase();
    HEURISTIC_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(Category::Isolation)
}
