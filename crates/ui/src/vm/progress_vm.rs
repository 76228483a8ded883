use learnify_core::model::ProgressItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBarVm {
    pub subject: String,
    pub percent_label: String,
    pub fill_style: String,
    pub fill_class: String,
}

impl From<&ProgressItem> for ProgressBarVm {
    fn from(item: &ProgressItem) -> Self {
        let percentage = item.percentage();
        Self {
            subject: item.subject().to_string(),
            percent_label: format!("{percentage}%"),
            fill_style: format!("width: {percentage}%"),
            fill_class: format!("progress-fill {}", item.color()),
        }
    }
}

#[must_use]
pub fn map_progress_bars(items: &[ProgressItem]) -> Vec<ProgressBarVm> {
    items.iter().map(ProgressBarVm::from).collect()
}
