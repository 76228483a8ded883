//! Built-in dashboard content used when no catalog file is supplied.

use crate::repository::{CatalogRecord, GoalRecord, ProfileRecord, ProgressRecord, TopicRecord};

fn topic(title: &str, description: &str, icon: &str, hue: &str) -> TopicRecord {
    TopicRecord {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: format!("bg-{hue}-100 text-{hue}-600"),
        dark_color: format!("dark:bg-{hue}-900/50 dark:text-{hue}-400"),
    }
}

fn progress(subject: &str, percentage: u32, color: &str) -> ProgressRecord {
    ProgressRecord {
        subject: subject.to_string(),
        percentage,
        color: color.to_string(),
    }
}

/// The mock catalog the dashboard ships with.
#[must_use]
pub fn mock_catalog() -> CatalogRecord {
    CatalogRecord {
        profile: ProfileRecord {
            name: "Alex".to_string(),
            avatar_initials: "AV".to_string(),
        },
        topics: vec![
            topic("Fun with Math", "Count, add, and solve cool puzzles!", "math", "sky"),
            topic(
                "Animal Kingdom",
                "Discover amazing animals and their homes.",
                "animal",
                "amber",
            ),
            topic(
                "Space Adventure",
                "Travel to planets, stars, and galaxies.",
                "space",
                "indigo",
            ),
            topic(
                "Creative Stories",
                "Build your own worlds and characters.",
                "story",
                "rose",
            ),
        ],
        progress: vec![
            progress("Math Puzzles", 75, "bg-green-500"),
            progress("Reading Challenge", 60, "bg-blue-500"),
            progress("Science Facts", 40, "bg-yellow-500"),
        ],
        weekly_goal: GoalRecord {
            goal_minutes: 300,
            achieved_minutes: 240,
            trend_percent: 15,
        },
    }
}
