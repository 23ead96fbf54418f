//! Command handlers for the narrative state.
//!
//! These are the entry points the scroll tracker calls. Each handler writes
//! one cell without validating the value, notifies observers through the
//! write, and returns the resulting transition.

use tracing::{info, trace};

use crate::domain::commands::{GoToChapter, ReportScrollProgress};
use crate::domain::events::{ChapterChanged, NarrativeEvent, ScrollProgressed};
use crate::domain::state::NarrativeState;

/// Handles the `GoToChapter` command: writes the current-chapter cell.
pub fn handle_go_to_chapter(command: &GoToChapter, state: &NarrativeState) -> NarrativeEvent {
    let cell = state.current_chapter();
    let previous = cell.read();
    cell.set(command.chapter);

    info!(
        command_type = GoToChapter::COMMAND_TYPE,
        correlation_id = %command.correlation_id,
        previous,
        current = command.chapter,
        "current chapter changed"
    );

    NarrativeEvent::ChapterChanged(ChapterChanged {
        correlation_id: command.correlation_id,
        previous,
        current: command.chapter,
    })
}

/// Handles the `ReportScrollProgress` command: writes the scroll-progress
/// cell.
pub fn handle_report_scroll_progress(
    command: &ReportScrollProgress,
    state: &NarrativeState,
) -> NarrativeEvent {
    let cell = state.scroll_progress();
    let previous = cell.read();
    cell.set(command.progress);

    // Scroll events arrive per frame.
    trace!(
        command_type = ReportScrollProgress::COMMAND_TYPE,
        correlation_id = %command.correlation_id,
        previous,
        current = command.progress,
        "scroll progress changed"
    );

    NarrativeEvent::ScrollProgressed(ScrollProgressed {
        correlation_id: command.correlation_id,
        previous,
        current: command.progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use commute_story_test_support::RecordingObserver;
    use uuid::Uuid;

    #[test]
    fn test_go_to_chapter_writes_cell_and_returns_transition() {
        // Arrange
        let state = NarrativeState::new();
        let correlation_id = Uuid::new_v4();
        let command = GoToChapter {
            correlation_id,
            chapter: 5,
        };

        // Act
        let event = handle_go_to_chapter(&command, &state);

        // Assert
        assert_eq!(state.current_chapter().read(), 5);
        assert_eq!(
            event,
            NarrativeEvent::ChapterChanged(ChapterChanged {
                correlation_id,
                previous: 1,
                current: 5,
            })
        );
    }

    #[test]
    fn test_go_to_chapter_notifies_subscribers() {
        // Arrange
        let state = NarrativeState::new();
        let recorder = RecordingObserver::<i64>::new();
        let _sub = state.current_chapter().subscribe(recorder.callback());

        // Act
        handle_go_to_chapter(
            &GoToChapter {
                correlation_id: Uuid::new_v4(),
                chapter: 2,
            },
            &state,
        );

        // Assert
        assert_eq!(recorder.values(), vec![1, 2]);
    }

    #[test]
    fn test_go_to_chapter_accepts_out_of_range_index() {
        // Arrange
        let state = NarrativeState::new();

        // Act
        let event = handle_go_to_chapter(
            &GoToChapter {
                correlation_id: Uuid::new_v4(),
                chapter: 99,
            },
            &state,
        );

        // Assert
        assert_eq!(state.current_chapter().read(), 99);
        assert_eq!(event.event_type(), "narrative.chapter_changed");
    }

    #[test]
    fn test_report_scroll_progress_writes_unclamped_value() {
        // Arrange
        let state = NarrativeState::new();
        let correlation_id = Uuid::new_v4();
        let recorder = RecordingObserver::<f64>::new();
        let _sub = state.scroll_progress().subscribe(recorder.callback());

        // Act
        let event = handle_report_scroll_progress(
            &ReportScrollProgress {
                correlation_id,
                progress: 1.25,
            },
            &state,
        );

        // Assert
        assert!((state.scroll_progress().read() - 1.25).abs() < f64::EPSILON);
        assert_eq!(recorder.call_count(), 2);
        match event {
            NarrativeEvent::ScrollProgressed(payload) => {
                assert_eq!(payload.correlation_id, correlation_id);
                assert!(payload.previous.abs() < f64::EPSILON);
                assert!((payload.current - 1.25).abs() < f64::EPSILON);
            }
            other => panic!("expected ScrollProgressed, got {other:?}"),
        }
    }

    #[test]
    fn test_report_scroll_progress_leaves_chapter_untouched() {
        let state = NarrativeState::new();

        handle_report_scroll_progress(
            &ReportScrollProgress {
                correlation_id: Uuid::new_v4(),
                progress: 0.7,
            },
            &state,
        );

        assert_eq!(state.current_chapter().read(), 1);
    }
}
