//! The shared narrative state handed to every consumer.

use std::sync::Arc;

use commute_story_core::observable::Observable;

use super::chapters::{ChapterCatalog, ChapterDescriptor};
use crate::config::NarrativeConfig;

/// Log name of the current-chapter cell.
pub const CURRENT_CHAPTER_CELL: &str = "current_chapter";

/// Log name of the scroll-progress cell.
pub const SCROLL_PROGRESS_CELL: &str = "scroll_progress";

/// Chapter catalog plus the two observable cells of the presentation.
///
/// Cloning is cheap and yields a handle onto the same cells, so one state
/// can be passed to the scroll tracker and to each display component.
#[derive(Debug, Clone)]
pub struct NarrativeState {
    catalog: Arc<ChapterCatalog>,
    current_chapter: Observable<i64>,
    scroll_progress: Observable<f64>,
}

impl NarrativeState {
    /// Creates the state with the built-in catalog and default values.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&NarrativeConfig::default())
    }

    /// Creates the state with the built-in catalog and the given start
    /// values.
    #[must_use]
    pub fn with_config(config: &NarrativeConfig) -> Self {
        Self::with_catalog(ChapterCatalog::commute_story(), config)
    }

    /// Creates the state around an arbitrary catalog.
    #[must_use]
    pub fn with_catalog(catalog: ChapterCatalog, config: &NarrativeConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            current_chapter: Observable::new(CURRENT_CHAPTER_CELL, config.initial_chapter),
            scroll_progress: Observable::new(SCROLL_PROGRESS_CELL, config.initial_scroll_progress),
        }
    }

    /// The chapters in presentation order.
    #[must_use]
    pub fn chapters(&self) -> &[ChapterDescriptor] {
        self.catalog.as_slice()
    }

    /// The catalog, for lookups by id.
    #[must_use]
    pub fn catalog(&self) -> &ChapterCatalog {
        &self.catalog
    }

    /// The current-chapter cell. Writes are not checked against the catalog.
    #[must_use]
    pub fn current_chapter(&self) -> &Observable<i64> {
        &self.current_chapter
    }

    /// The scroll-progress cell. Writes are not clamped.
    #[must_use]
    pub fn scroll_progress(&self) -> &Observable<f64> {
        &self.scroll_progress
    }
}

impl Default for NarrativeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_new_state_has_default_values() {
        let state = NarrativeState::new();

        assert_eq!(state.current_chapter().read(), 1);
        assert!(state.scroll_progress().read().abs() < f64::EPSILON);
        assert_eq!(state.chapters().len(), 10);
    }

    #[test]
    fn test_with_config_uses_initial_values() {
        // Arrange
        let config = NarrativeConfig {
            initial_chapter: 6,
            initial_scroll_progress: 0.5,
        };

        // Act
        let state = NarrativeState::with_config(&config);

        // Assert
        assert_eq!(state.current_chapter().read(), 6);
        assert!((state.scroll_progress().read() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_catalog_exposes_given_chapters() {
        let catalog = ChapterCatalog::new(vec![ChapterDescriptor::new(1, "Only", "One")]).unwrap();

        let state = NarrativeState::with_catalog(catalog, &NarrativeConfig::default());

        assert_eq!(state.chapters().len(), 1);
        assert_eq!(state.catalog().get(1).unwrap().title, "Only");
    }

    #[test]
    fn test_clones_share_cells() {
        // Arrange
        let state = NarrativeState::new();
        let tracker_handle = state.clone();

        // Act
        tracker_handle.current_chapter().set(3);
        tracker_handle.scroll_progress().set(0.3);

        // Assert
        assert_eq!(state.current_chapter().read(), 3);
        assert!((state.scroll_progress().read() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cells_are_named_for_logging() {
        let state = NarrativeState::new();
        assert_eq!(state.current_chapter().name(), CURRENT_CHAPTER_CELL);
        assert_eq!(state.scroll_progress().name(), SCROLL_PROGRESS_CELL);
    }

    #[test]
    fn test_cells_are_independent() {
        // Arrange
        let state = NarrativeState::new();
        let chapter_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&chapter_calls);
        let _sub = state.current_chapter().subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Act
        state.scroll_progress().set(0.9);

        // Assert
        assert_eq!(chapter_calls.load(Ordering::SeqCst), 1);
    }
}
