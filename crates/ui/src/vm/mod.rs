mod fact_vm;
mod goal_vm;
mod progress_vm;
mod topic_vm;

pub use fact_vm::{FactModalVm, GENERATE_LABEL, GENERATING_LABEL};
pub use goal_vm::{GoalGaugeVm, gauge_svg};
pub use progress_vm::{ProgressBarVm, map_progress_bars};
pub use topic_vm::TopicCardVm;
