/// The learner greeted by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnerProfile {
    name: String,
    avatar_initials: String,
}

impl LearnerProfile {
    #[must_use]
    pub fn new(name: impl Into<String>, avatar_initials: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_initials: avatar_initials.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar_initials(&self) -> &str {
        &self.avatar_initials
    }
}
