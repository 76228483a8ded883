use std::f64::consts::PI;

use learnify_core::model::WeeklyGoal;

const GAUGE_RADIUS: f64 = 90.0;
const GAUGE_STROKE: f64 = 20.0;

/// Static labels of the weekly goal card. The animated counter is kept
/// separately by the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalGaugeVm {
    pub percentage: u8,
    pub show_trophy: bool,
    pub studied_label: String,
    pub trend_label: String,
    pub trend_up: bool,
}

impl GoalGaugeVm {
    #[must_use]
    pub fn new(goal: WeeklyGoal, trend_percent: i32) -> Self {
        let trend_label = match trend_percent {
            0 => "Holding steady this week".to_string(),
            up if up > 0 => format!("Trending up by {up}% this week"),
            down => format!("Trending down by {}% this week", down.unsigned_abs()),
        };
        Self {
            percentage: goal.percentage(),
            show_trophy: goal.trophy_earned(),
            studied_label: format!(
                "You've studied {} out of {} minutes.",
                goal.achieved_minutes(),
                goal.goal_minutes()
            ),
            trend_label,
            trend_up: trend_percent > 0,
        }
    }
}

/// Radial gauge drawn clockwise from twelve o'clock, filled to `displayed`
/// percent (clamped to 100).
#[must_use]
pub fn gauge_svg(displayed: u8) -> String {
    let circumference = 2.0 * PI * GAUGE_RADIUS;
    let filled = circumference * f64::from(displayed.min(100)) / 100.0;
    let center = GAUGE_RADIUS + GAUGE_STROKE / 2.0;
    let size = center * 2.0;
    format!(
        concat!(
            r#"<svg class="gauge-svg" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}">"#,
            r#"<defs><linearGradient id="goalGradient" x1="0" y1="0" x2="0" y2="1">"#,
            r##"<stop offset="0%" stop-color="#22c55e"/><stop offset="100%" stop-color="#86efac"/>"##,
            "</linearGradient></defs>",
            r#"<circle class="gauge-track" cx="{c}" cy="{c}" r="{r}" fill="none" stroke-width="{w}"/>"#,
            r#"<circle class="gauge-bar pulse-animation-green" cx="{c}" cy="{c}" r="{r}" fill="none" "#,
            r#"stroke="url(#goalGradient)" stroke-width="{w}" stroke-linecap="round" "#,
            r#"stroke-dasharray="{filled:.2} {circumference:.2}" transform="rotate(-90 {c} {c})"/>"#,
            "</svg>"
        ),
        size = size,
        c = center,
        r = GAUGE_RADIUS,
        w = GAUGE_STROKE,
        filled = filled,
        circumference = circumference,
    )
}
