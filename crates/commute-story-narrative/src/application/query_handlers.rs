//! Query handlers for the narrative state.
//!
//! Read-only views for display components, e.g. a table of contents.

use commute_story_core::error::StoryError;
use serde::Serialize;
use tracing::warn;

use crate::domain::chapters::ChapterDescriptor;
use crate::domain::state::NarrativeState;

/// Read-only view of one chapter for a table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterView {
    /// The chapter identifier.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Display subtitle.
    pub subtitle: String,
    /// Whether this is the current chapter.
    pub is_active: bool,
}

impl ChapterView {
    fn from_descriptor(chapter: &ChapterDescriptor, current: i64) -> Self {
        Self {
            id: chapter.id,
            title: chapter.title.clone(),
            subtitle: chapter.subtitle.clone(),
            is_active: i64::from(chapter.id) == current,
        }
    }
}

/// Snapshot of both cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NarrativeStateView {
    /// Current chapter index.
    pub current_chapter: i64,
    /// Current scroll progress.
    pub scroll_progress: f64,
}

/// Returns every chapter in order, flagging the current one.
///
/// If the current index names no chapter, no entry is flagged.
#[must_use]
pub fn get_chapters(state: &NarrativeState) -> Vec<ChapterView> {
    let current = state.current_chapter().read();
    state
        .chapters()
        .iter()
        .map(|chapter| ChapterView::from_descriptor(chapter, current))
        .collect()
}

/// Resolves the current chapter index against the catalog.
///
/// # Errors
///
/// Returns `StoryError::ChapterNotFound` if the current index names no
/// chapter.
pub fn get_active_chapter(state: &NarrativeState) -> Result<ChapterView, StoryError> {
    let current = state.current_chapter().read();
    let chapter = state.catalog().get(current).inspect_err(|_| {
        warn!(current, chapters = state.chapters().len(), "current chapter is out of range");
    })?;
    Ok(ChapterView::from_descriptor(chapter, current))
}

/// Returns the current values of both cells.
#[must_use]
pub fn get_state(state: &NarrativeState) -> NarrativeStateView {
    NarrativeStateView {
        current_chapter: state.current_chapter().read(),
        scroll_progress: state.scroll_progress().read(),
    }
}
