//! Initial values for the narrative cells.

use commute_story_core::error::StoryError;
use serde::{Deserialize, Serialize};

/// Environment variable holding the initial chapter index.
pub const INITIAL_CHAPTER_VAR: &str = "COMMUTE_STORY_INITIAL_CHAPTER";

/// Environment variable holding the initial scroll progress.
pub const INITIAL_SCROLL_PROGRESS_VAR: &str = "COMMUTE_STORY_INITIAL_SCROLL_PROGRESS";

/// Chapter index the presentation opens on.
pub const DEFAULT_CHAPTER: i64 = 1;

/// Scroll progress at the top of the document.
pub const DEFAULT_SCROLL_PROGRESS: f64 = 0.0;

/// Starting values for a `NarrativeState`.
///
/// Values are taken as given: no range check against the catalog, no
/// clamping of the progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Initial value of the current-chapter cell.
    pub initial_chapter: i64,
    /// Initial value of the scroll-progress cell.
    pub initial_scroll_progress: f64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            initial_chapter: DEFAULT_CHAPTER,
            initial_scroll_progress: DEFAULT_SCROLL_PROGRESS,
        }
    }
}

impl NarrativeConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Config` if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, StoryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to the
    /// defaults for variables that are not set.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Config` if a variable is set but does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StoryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_chapter = match lookup(INITIAL_CHAPTER_VAR) {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                StoryError::Config(format!("{INITIAL_CHAPTER_VAR} must be an integer: {e}"))
            })?,
            None => DEFAULT_CHAPTER,
        };

        let initial_scroll_progress = match lookup(INITIAL_SCROLL_PROGRESS_VAR) {
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| {
                StoryError::Config(format!(
                    "{INITIAL_SCROLL_PROGRESS_VAR} must be a number: {e}"
                ))
            })?,
            None => DEFAULT_SCROLL_PROGRESS,
        };

        Ok(Self {
            initial_chapter,
            initial_scroll_progress,
        })
    }
}
