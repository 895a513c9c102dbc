//! Recipe generator screen state.

use api::{ApiError, GeneratedRecipe, Recipe};

use crate::Redirect;

/// Split a comma-separated ingredient list, trimming each entry.
///
/// Order is kept and empty entries (e.g. from a trailing comma) are passed on
/// as empty strings.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Save progress for the recipe currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Unsaved,
    Saving,
    Saved,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum GeneratorState {
    #[default]
    Idle,
    Generating,
    Error(String),
    Ready {
        recipe: GeneratedRecipe,
        save: SaveStatus,
    },
}

impl GeneratorState {
    pub fn is_generating(&self) -> bool {
        matches!(self, GeneratorState::Generating)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GeneratorState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// The recipe on screen, if it has any content.
    pub fn recipe(&self) -> Option<&GeneratedRecipe> {
        match self {
            GeneratorState::Ready { recipe, .. } if recipe.has_content() => Some(recipe),
            _ => None,
        }
    }

    pub fn save_status(&self) -> Option<&SaveStatus> {
        match self {
            GeneratorState::Ready { save, .. } => Some(save),
            _ => None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.save_status() == Some(&SaveStatus::Saved)
    }

    pub fn can_save(&self) -> bool {
        self.recipe().is_some()
            && matches!(
                self.save_status(),
                Some(SaveStatus::Unsaved | SaveStatus::Failed(_))
            )
    }

    /// Start a generation. Blank input and a request already in flight are no-ops.
    /// Any previous result and its saved flag are dropped.
    pub fn begin_generate(&mut self, raw: &str) -> Option<Vec<String>> {
        if raw.trim().is_empty() || self.is_generating() {
            return None;
        }
        *self = GeneratorState::Generating;
        Some(parse_ingredients(raw))
    }

    pub fn finish_generate(&mut self, result: Result<GeneratedRecipe, ApiError>) -> Option<Redirect> {
        match result {
            Ok(recipe) => {
                *self = GeneratorState::Ready {
                    recipe,
                    save: SaveStatus::Unsaved,
                };
                None
            }
            Err(e) if e.is_auth() => {
                *self = GeneratorState::Idle;
                Some(Redirect::Auth)
            }
            Err(e) => {
                *self = GeneratorState::Error(e.message);
                None
            }
        }
    }

    /// Mark the current recipe as saving and hand back a copy to send.
    pub fn begin_save(&mut self) -> Option<GeneratedRecipe> {
        if !self.can_save() {
            return None;
        }
        match self {
            GeneratorState::Ready { recipe, save } => {
                *save = SaveStatus::Saving;
                Some(recipe.clone())
            }
            _ => None,
        }
    }

    /// Apply a save result. Ignored unless a save is in flight.
    pub fn finish_save(&mut self, result: Result<Option<Recipe>, ApiError>) -> Option<Redirect> {
        let GeneratorState::Ready { save, .. } = self else {
            return None;
        };
        if *save != SaveStatus::Saving {
            return None;
        }
        match result {
            Ok(saved) => {
                match saved {
                    Some(recipe) => tracing::info!("Saved recipe {}", recipe.id),
                    None => tracing::info!("Saved recipe"),
                }
                *save = SaveStatus::Saved;
                None
            }
            Err(e) if e.is_auth() => {
                *save = SaveStatus::Unsaved;
                Some(Redirect::Auth)
            }
            Err(e) => {
                *save = SaveStatus::Failed(e.message);
                None
            }
        }
    }
}
