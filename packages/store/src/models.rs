//! # Domain models for recipes and credentials
//!
//! Defines the data exchanged with the recipe backend. These types are
//! `Serialize + Deserialize` with the backend's JSON field names, so the API
//! client can send and decode them directly.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Recipe`] | A recipe saved on the backend. Carries its identifier (`_id` on the wire), the markdown `content`, and optional `nutrition` markdown and `image_url`. |
//! | [`GeneratedRecipe`] | The unsaved result of a generation request (`recipe`, `nutrition`, `imageUrl` on the wire). |
//! | [`RecipeId`] | Opaque backend identifier of a saved recipe. |
//! | [`Credentials`] | Email and password, held only for the duration of a submit. |
//!
//! ## Titles
//!
//! [`extract_title`] finds the first line starting with `"# "` and returns the
//! trimmed text after it. [`Recipe::title`] and [`GeneratedRecipe::title`] fall back
//! to [`UNTITLED_RECIPE`] and [`GENERATED_RECIPE`] respectively.

use serde::{Deserialize, Serialize};

/// Title shown for a saved recipe whose markdown has no H1 line.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// Title shown for a generated recipe whose markdown has no H1 line.
pub const GENERATED_RECIPE: &str = "Generated Recipe";

/// Text of the first markdown H1 line, without the marker and trimmed.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Backend identifier of a saved recipe.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A recipe persisted by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Backend identifier: "_id" on the wire
    #[serde(rename = "_id", alias = "id")]
    pub id: RecipeId,
    /// Markdown body, normally starting with "# <title>"
    #[serde(default)]
    pub content: String,
    /// Optional markdown fragment with nutritional information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<String>,
    /// Optional illustration URL
    #[serde(default, rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Recipe {
    /// Display title derived from the content.
    pub fn title(&self) -> &str {
        extract_title(&self.content).unwrap_or(UNTITLED_RECIPE)
    }

    /// Nutrition markdown when present and not blank.
    pub fn nutrition(&self) -> Option<&str> {
        non_empty(&self.nutrition)
    }

    /// Image URL when present and not blank.
    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }
}

/// A freshly generated, not yet saved recipe.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    /// Markdown body: "recipe" on the wire
    #[serde(rename = "recipe", default)]
    pub content: String,
    #[serde(default)]
    pub nutrition: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl GeneratedRecipe {
    /// Display title derived from the content.
    pub fn title(&self) -> &str {
        extract_title(&self.content).unwrap_or(GENERATED_RECIPE)
    }

    /// Whether there is any recipe body to show or save.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn nutrition(&self) -> Option<&str> {
        non_empty(&self.nutrition)
    }

    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }
}

/// Sign-in or sign-up form values.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields filled in.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
