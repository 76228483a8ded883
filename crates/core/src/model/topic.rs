use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("topic title cannot be empty")]
    EmptyTitle,

    #[error("unknown topic icon: {0}")]
    UnknownIcon(String),
}

//
// ─── ICON ──────────────────────────────────────────────────────────────────────
//

/// Symbolic reference to the glyph drawn on a topic card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicIcon {
    Math,
    Animal,
    Space,
    Story,
}

impl TopicIcon {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Animal => "animal",
            Self::Space => "space",
            Self::Story => "story",
        }
    }
}

impl fmt::Display for TopicIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicIcon {
    type Err = TopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "math" => Ok(Self::Math),
            "animal" => Ok(Self::Animal),
            "space" => Ok(Self::Space),
            "story" => Ok(Self::Story),
            other => Err(TopicError::UnknownIcon(other.to_string())),
        }
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A subject card shown on the dashboard.
///
/// The title doubles as the identity of the topic, so it is used as the
/// render key and must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    title: String,
    description: String,
    icon: TopicIcon,
    color: String,
    dark_color: String,
}

impl Topic {
    /// # Errors
    ///
    /// Returns `TopicError::EmptyTitle` if the title is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: TopicIcon,
        color: impl Into<String>,
        dark_color: impl Into<String>,
    ) -> Result<Self, TopicError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(TopicError::EmptyTitle);
        }

        Ok(Self {
            title,
            description: description.into(),
            icon,
            color: color.into(),
            dark_color: dark_color.into(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> TopicIcon {
        self.icon
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn dark_color(&self) -> &str {
        &self.dark_color
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
