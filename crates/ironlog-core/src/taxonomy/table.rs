//! The built-in exercise table.

use super::Category;

/// `(name, category, parent)` rows.
pub(super) const STANDARD_EXERCISES: &[(&str, Category, &str)] = &[
    // Knee dominant
    ("Squat", Category::Knee, "Squat"),
    ("Competition Squat", Category::Knee, "Squat"),
    ("Back Squat", Category::Knee, "Squat"),
    ("High Bar Squat", Category::Knee, "Squat"),
    ("Low Bar Squat", Category::Knee, "Squat"),
    ("Front Squat", Category::Knee, "Squat"),
    ("Pause Squat", Category::Knee, "Squat"),
    ("Tempo Squat", Category::Knee, "Squat"),
    ("Pin Squat", Category::Knee, "Squat"),
    ("Box Squat", Category::Knee, "Squat"),
    ("Safety Bar Squat", Category::Knee, "Squat"),
    ("Belt Squat", Category::Knee, "Squat"),
    ("Hack Squat", Category::Knee, "Squat"),
    ("Goblet Squat", Category::Knee, "Squat"),
    ("Leg Press", Category::Knee, "Squat"),
    ("Bulgarian Split Squat", Category::Knee, "Squat"),
    ("Walking Lunge", Category::Knee, "Squat"),
    ("Step Up", Category::Knee, "Squat"),
    // Hip dominant
    ("Deadlift", Category::Hip, "Deadlift"),
    ("Competition Deadlift", Category::Hip, "Deadlift"),
    ("Conventional Deadlift", Category::Hip, "Deadlift"),
    ("Sumo Deadlift", Category::Hip, "Deadlift"),
    ("Romanian Deadlift", Category::Hip, "Deadlift"),
    ("Stiff Leg Deadlift", Category::Hip, "Deadlift"),
    ("Deficit Deadlift", Category::Hip, "Deadlift"),
    ("Paused Deadlift", Category::Hip, "Deadlift"),
    ("Block Pull", Category::Hip, "Deadlift"),
    ("Rack Pull", Category::Hip, "Deadlift"),
    ("Good Morning", Category::Hip, "Deadlift"),
    ("Hip Thrust", Category::Hip, "Deadlift"),
    ("Back Extension", Category::Hip, "Deadlift"),
    // Horizontal push
    ("Bench Press", Category::HorizontalPush, "Bench Press"),
    ("Competition Bench Press", Category::HorizontalPush, "Bench Press"),
    ("Close Grip Bench Press", Category::HorizontalPush, "Bench Press"),
    ("Paused Bench Press", Category::HorizontalPush, "Bench Press"),
    ("Larsen Press", Category::HorizontalPush, "Bench Press"),
    ("Spoto Press", Category::HorizontalPush, "Bench Press"),
    ("Incline Bench Press", Category::HorizontalPush, "Bench Press"),
    ("Dumbbell Bench Press", Category::HorizontalPush, "Bench Press"),
    ("Floor Press", Category::HorizontalPush, "Bench Press"),
    ("Board Press", Category::HorizontalPush, "Bench Press"),
    ("Push Up", Category::HorizontalPush, "Bench Press"),
    // Vertical push
    ("Overhead Press", Category::VerticalPush, "Overhead Press"),
    ("Push Press", Category::VerticalPush, "Overhead Press"),
    ("Seated Dumbbell Press", Category::VerticalPush, "Overhead Press"),
    ("Z Press", Category::VerticalPush, "Overhead Press"),
    ("Dip", Category::VerticalPush, "Overhead Press"),
    // Horizontal pull
    ("Row", Category::HorizontalPull, "Row"),
    ("Barbell Row", Category::HorizontalPull, "Row"),
    ("Pendlay Row", Category::HorizontalPull, "Row"),
    ("Dumbbell Row", Category::HorizontalPull, "Row"),
    ("Seal Row", Category::HorizontalPull, "Row"),
    ("Chest Supported Row", Category::HorizontalPull, "Row"),
    ("Cable Row", Category::HorizontalPull, "Row"),
    // Vertical pull
    ("Pull Up", Category::VerticalPull, "Pull Up"),
    ("Chin Up", Category::VerticalPull, "Pull Up"),
    ("Weighted Pull Up", Category::VerticalPull, "Pull Up"),
    ("Lat Pulldown", Category::VerticalPull, "Pull Up"),
    // Isolation work is its own parent
    ("Bicep Curl", Category::IsolationUpper, "Bicep Curl"),
    ("Hammer Curl", Category::IsolationUpper, "Hammer Curl"),
    ("Tricep Pushdown", Category::IsolationUpper, "Tricep Pushdown"),
    ("Skull Crusher", Category::IsolationUpper, "Skull Crusher"),
    ("Lateral Raise", Category::IsolationUpper, "Lateral Raise"),
    ("Face Pull", Category::IsolationUpper, "Face Pull"),
    ("Rear Delt Fly", Category::IsolationUpper, "Rear Delt Fly"),
    ("Leg Extension", Category::IsolationLower, "Leg Extension"),
    ("Leg Curl", Category::IsolationLower, "Leg Curl"),
    ("Nordic Curl", Category::IsolationLower, "Nordic Curl"),
    ("Calf Raise", Category::IsolationLower, "Calf Raise"),
    ("Glute Bridge", Category::IsolationLower, "Glute Bridge"),
    ("Plank", Category::Isolation, "Plank"),
    ("Ab Wheel", Category::Isolation, "Ab Wheel"),
];
