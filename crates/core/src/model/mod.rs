mod goal;
mod profile;
mod progress;
mod theme;
mod topic;

pub use goal::{GOAL_RAMP_DURATION_MS, GOAL_RAMP_FPS, GoalRamp, WeeklyGoal};
pub use profile::LearnerProfile;
pub use progress::ProgressItem;
pub use theme::{ColorMode, ColorModeParseError};
pub use topic::{Topic, TopicError, TopicIcon};
