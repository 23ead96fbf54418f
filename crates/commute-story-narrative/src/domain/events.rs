//! Events describing narrative state transitions.

use serde::Serialize;
use uuid::Uuid;

/// Emitted when the current chapter is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterChanged {
    /// Correlation ID of the command that caused the change.
    pub correlation_id: Uuid,
    /// Value before the write.
    pub previous: i64,
    /// Value after the write.
    pub current: i64,
}

/// Emitted when the scroll progress is written.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollProgressed {
    /// Correlation ID of the command that caused the change.
    pub correlation_id: Uuid,
    /// Value before the write.
    pub previous: f64,
    /// Value after the write.
    pub current: f64,
}

/// Transition produced by a narrative command handler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NarrativeEvent {
    /// The current chapter was written.
    ChapterChanged(ChapterChanged),
    /// The scroll progress was written.
    ScrollProgressed(ScrollProgressed),
}

impl NarrativeEvent {
    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ChapterChanged(_) => "narrative.chapter_changed",
            Self::ScrollProgressed(_) => "narrative.scroll_progressed",
        }
    }

    /// Returns the correlation ID carried by the event.
    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        match self {
            Self::ChapterChanged(e) => e.correlation_id,
            Self::ScrollProgressed(e) => e.correlation_id,
        }
    }
}
