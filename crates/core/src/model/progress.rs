/// A named completion metric shown in the progress panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressItem {
    subject: String,
    percentage: u8,
    color: String,
}

impl ProgressItem {
    /// Creates a progress item. Percentages above 100 are clamped.
    #[must_use]
    pub fn new(subject: impl Into<String>, percentage: u32, color: impl Into<String>) -> Self {
        let percentage = u8::try_from(percentage.min(100)).unwrap_or(100);
        Self {
            subject: subject.into(),
            percentage,
            color: color.into(),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Always within `0..=100`.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}
