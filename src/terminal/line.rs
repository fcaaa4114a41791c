/// Transcript line model
///
/// A line is text tagged with a kind for styling. Some lines also carry a
/// widget, which tells the front-end to draw something interactive instead of
/// (or on top of) the text.

use crate::content::{Project, SocialLink};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of what the user typed
    Command,
    Plain,
    Error,
    Success,
    Warning,
}

/// Interactive payloads a line can carry. Closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", content = "data", rename_all = "kebab-case")]
pub enum Widget {
    ProjectDetail(Project),
    SocialLink(SocialLink),
}

impl Widget {
    /// Stable name the front-end switches on
    pub fn reference(&self) -> &'static str {
        match self {
            Widget::ProjectDetail(_) => "project-detail",
            Widget::SocialLink(_) => "social-link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputLine {
    pub kind: LineKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<Widget>,
}

impl OutputLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            created_at: Utc::now(),
            widget: None,
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(LineKind::Command, text)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(LineKind::Plain, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(LineKind::Warning, text)
    }

    pub fn blank() -> Self {
        Self::plain("")
    }

    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = Some(widget);
        self
    }

    pub fn widget_ref(&self) -> Option<&'static str> {
        self.widget.as_ref().map(Widget::reference)
    }
}

/// What running one command produced
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub succeeded: bool,
    pub lines: Vec<OutputLine>,
}

impl CommandResult {
    pub fn success(lines: Vec<OutputLine>) -> Self {
        Self {
            succeeded: true,
            lines,
        }
    }

    pub fn failure(lines: Vec<OutputLine>) -> Self {
        Self {
            succeeded: false,
            lines,
        }
    }

    pub fn empty() -> Self {
        Self::success(Vec::new())
    }
}
