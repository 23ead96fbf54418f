//! Chapter descriptors and the fixed chapter catalog.

use commute_story_core::error::StoryError;
use serde::Serialize;

/// Static record describing one narrative section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterDescriptor {
    /// 1-based position of the chapter in the catalog.
    pub id: u32,
    /// Short display title.
    pub title: String,
    /// Short display subtitle.
    pub subtitle: String,
}

impl ChapterDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Number of chapters in the commuting presentation.
pub const CHAPTER_COUNT: usize = 10;

const COMMUTE_STORY_CHAPTERS: [(u32, &str, &str); CHAPTER_COUNT] = [
    (1, "The Time Thief", "How Commutes Steal Your Life"),
    (2, "The Money Drain", "The True Cost of Getting to Work"),
    (3, "The Carbon Footprint", "Environmental Impact of Commuting"),
    (4, "Geography of Inequality", "Where You Live Matters"),
    (5, "Who Suffers Most?", "Unequal Burden of Commuting"),
    (6, "Well-being Equation", "How Commutes Affect Happiness"),
    (7, "Productivity Paradox", "The Hidden Economic Cost"),
    (8, "Remote Work Revolution", "A New Way Forward"),
    (9, "Cities That Got It Right", "Success Stories"),
    (10, "Your Choice, Your Impact", "Take Action Today"),
];

/// Ordered, immutable sequence of chapters.
///
/// Ids are contiguous from 1 and equal each chapter's position. There is no
/// mutation path once a catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChapterCatalog {
    chapters: Vec<ChapterDescriptor>,
}

impl ChapterCatalog {
    /// Builds a catalog from `chapters`, checking the catalog invariants.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::InvalidCatalog` if the list is empty, if any id
    /// differs from its 1-based position, or if a title or subtitle is blank.
    pub fn new(chapters: Vec<ChapterDescriptor>) -> Result<Self, StoryError> {
        if chapters.is_empty() {
            return Err(StoryError::InvalidCatalog(
                "catalog must contain at least one chapter".to_owned(),
            ));
        }

        for (position, chapter) in (1_u32..).zip(&chapters) {
            if chapter.id != position {
                return Err(StoryError::InvalidCatalog(format!(
                    "chapter at position {position} has id {}",
                    chapter.id
                )));
            }
            if chapter.title.trim().is_empty() {
                return Err(StoryError::InvalidCatalog(format!(
                    "chapter {position} has a blank title"
                )));
            }
            if chapter.subtitle.trim().is_empty() {
                return Err(StoryError::InvalidCatalog(format!(
                    "chapter {position} has a blank subtitle"
                )));
            }
        }

        Ok(Self { chapters })
    }

    /// The ten chapters of the commuting presentation.
    #[must_use]
    pub fn commute_story() -> Self {
        Self {
            chapters: COMMUTE_STORY_CHAPTERS
                .iter()
                .map(|&(id, title, subtitle)| ChapterDescriptor::new(id, title, subtitle))
                .collect(),
        }
    }

    /// All chapters in order.
    #[must_use]
    pub fn as_slice(&self) -> &[ChapterDescriptor] {
        &self.chapters
    }

    /// Looks up a chapter by id.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::ChapterNotFound` if no chapter has this id.
    pub fn get(&self, id: i64) -> Result<&ChapterDescriptor, StoryError> {
        usize::try_from(id)
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| self.chapters.get(index))
            .ok_or(StoryError::ChapterNotFound(id))
    }

    /// Returns whether `id` names a chapter in this catalog.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_ok()
    }

    /// Number of chapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always `false` for a catalog built through [`ChapterCatalog::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Iterates the chapters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChapterDescriptor> {
        self.chapters.iter()
    }
}

impl Default for ChapterCatalog {
    fn default() -> Self {
        Self::commute_story()
    }
}

impl<'a> IntoIterator for &'a ChapterCatalog {
    type Item = &'a ChapterDescriptor;
    type IntoIter = std::slice::Iter<'a, ChapterDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.chapters.iter()
    }
}
