//! Commands issued by the scroll tracker.

use uuid::Uuid;

/// Command to make `chapter` the current chapter.
///
/// The index is written as given, even if it names no chapter.
#[derive(Debug, Clone, Copy)]
pub struct GoToChapter {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The new current-chapter index.
    pub chapter: i64,
}

impl GoToChapter {
    /// Log name of this command.
    pub const COMMAND_TYPE: &'static str = "narrative.go_to_chapter";
}

/// Command to record a new scroll position as a document fraction.
#[derive(Debug, Clone, Copy)]
pub struct ReportScrollProgress {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The new progress value, nominally in `0.0..=1.0`. Not clamped.
    pub progress: f64,
}

impl ReportScrollProgress {
    /// Log name of this command.
    pub const COMMAND_TYPE: &'static str = "narrative.report_scroll_progress";
}
