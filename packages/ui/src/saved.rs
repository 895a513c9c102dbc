//! Saved recipes screen state.
//!
//! Holds the list fetched on mount plus the two-step delete flow: a delete is
//! first *requested* (the confirmation modal opens), then *confirmed* (the request
//! goes out). A successful delete removes the item locally without re-fetching.

use api::{ApiError, Recipe, RecipeId};

use crate::Redirect;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Failed(String),
    Loaded,
}

/// What the screen should render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SavedView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    List(&'a [Recipe]),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedRecipes {
    status: LoadStatus,
    recipes: Vec<Recipe>,
    pending_delete: Option<RecipeId>,
    deleting: Option<RecipeId>,
    notice: Option<String>,
}

impl SavedRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SavedView<'_> {
        match &self.status {
            LoadStatus::Loading => SavedView::Loading,
            LoadStatus::Failed(e) => SavedView::Error(e),
            LoadStatus::Loaded if self.recipes.is_empty() => SavedView::Empty,
            LoadStatus::Loaded => SavedView::List(&self.recipes),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Error from the last failed delete, shown above the list.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Recipe>, ApiError>) -> Option<Redirect> {
        match result {
            Ok(recipes) => {
                tracing::debug!("Loaded {} saved recipes", recipes.len());
                self.recipes = recipes;
                self.status = LoadStatus::Loaded;
                None
            }
            Err(e) if e.is_auth() => Some(Redirect::Auth),
            Err(e) => {
                self.status = LoadStatus::Failed(e.message);
                None
            }
        }
    }

    /// Recipe awaiting confirmation, if the modal is open.
    pub fn pending_delete(&self) -> Option<&Recipe> {
        let id = self.pending_delete.as_ref()?;
        self.recipes.iter().find(|r| &r.id == id)
    }

    pub fn is_deleting(&self, id: &RecipeId) -> bool {
        self.deleting.as_ref() == Some(id)
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: RecipeId) {
        if self.deleting.is_none() && self.recipes.iter().any(|r| r.id == id) {
            self.pending_delete = Some(id);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete. Returns the id to send to the backend.
    pub fn confirm_delete(&mut self) -> Option<RecipeId> {
        let id = self.pending_delete.take()?;
        self.deleting = Some(id.clone());
        self.notice = None;
        Some(id)
    }

    pub fn finish_delete(&mut self, id: &RecipeId, result: Result<(), ApiError>) -> Option<Redirect> {
        if self.deleting.as_ref() == Some(id) {
            self.deleting = None;
        }
        match result {
            Ok(()) => {
                self.remove(id);
                None
            }
            Err(e) if e.is_auth() => Some(Redirect::Auth),
            Err(e) => {
                self.notice = Some(e.message);
                None
            }
        }
    }

    /// Drop `id` from the list, keeping the order of the rest.
    pub fn remove(&mut self, id: &RecipeId) {
        self.recipes.retain(|r| &r.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, VALID_TOKEN};
    use api::{ErrorKind, RecipeApi};

    async fn loaded(api: &FakeApi) -> SavedRecipes {
        let mut saved = SavedRecipes::new();
        assert_eq!(saved.view(), SavedView::Loading);
        let result = api.list_recipes(VALID_TOKEN).await;
        assert_eq!(saved.finish_load(result), None);
        saved
    }

    async fn delete(saved: &mut SavedRecipes, api: &FakeApi, id: &str) -> Option<Redirect> {
        saved.request_delete(RecipeId::from(id));
        let id = saved.confirm_delete()?;
        let result = api.delete_recipe(&id, VALID_TOKEN).await;
        saved.finish_delete(&id, result)
    }

    fn ids(saved: &SavedRecipes) -> Vec<&str> {
        saved.recipes().iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_list_keeps_backend_order() {
        let api = FakeApi::new().with_recipes(&["# B", "# A", "# C"]);
        let saved = loaded(&api).await;
        match saved.view() {
            SavedView::List(recipes) => {
                let titles: Vec<_> = recipes.iter().map(|r| r.title()).collect();
                assert_eq!(titles, vec!["B", "A", "C"]);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_list_is_not_an_error() {
        let api = FakeApi::new();
        let saved = loaded(&api).await;
        assert_eq!(saved.view(), SavedView::Empty);
    }

    #[tokio::test]
    async fn test_load_failure_shows_error() {
        let api = FakeApi::new();
        api.fail_next_with(ErrorKind::Server, "Failed to fetch recipes.");
        let mut saved = SavedRecipes::new();
        let result = api.list_recipes(VALID_TOKEN).await;
        saved.finish_load(result);
        assert_eq!(saved.view(), SavedView::Error("Failed to fetch recipes."));
    }

    #[tokio::test]
    async fn test_load_with_rejected_token_redirects() {
        let api = FakeApi::new();
        let mut saved = SavedRecipes::new();
        let result = api.list_recipes("expired").await;
        assert_eq!(saved.finish_load(result), Some(Redirect::Auth));
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_id_and_keeps_order() {
        let api = FakeApi::new().with_recipes(&["# One", "# Two", "# Three", "# Four"]);
        let mut saved = loaded(&api).await;
        let calls_before = api.calls.get();

        assert_eq!(delete(&mut saved, &api, "r2").await, None);

        assert_eq!(ids(&saved), vec!["r1", "r3", "r4"]);
        // One DELETE, no re-fetch
        assert_eq!(api.calls.get(), calls_before + 1);
        assert_eq!(api.stored().len(), 3);
    }

    #[tokio::test]
    async fn test_deleting_last_recipe_shows_empty_state() {
        let api = FakeApi::new().with_recipes(&["# Only"]);
        let mut saved = loaded(&api).await;
        delete(&mut saved, &api, "r1").await;
        assert_eq!(saved.view(), SavedView::Empty);
    }

    #[tokio::test]
    async fn test_cancelled_delete_sends_nothing() {
        let api = FakeApi::new().with_recipes(&["# One", "# Two"]);
        let mut saved = loaded(&api).await;
        let calls_before = api.calls.get();

        saved.request_delete(RecipeId::from("r1"));
        assert_eq!(saved.pending_delete().map(|r| r.title()), Some("One"));
        saved.cancel_delete();

        assert!(saved.pending_delete().is_none());
        assert_eq!(saved.confirm_delete(), None);
        assert_eq!(ids(&saved), vec!["r1", "r2"]);
        assert_eq!(api.calls.get(), calls_before);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list_and_sets_notice() {
        let api = FakeApi::new().with_recipes(&["# One", "# Two"]);
        let mut saved = loaded(&api).await;

        api.fail_next_with(ErrorKind::Server, "Failed to delete recipe.");
        delete(&mut saved, &api, "r1").await;

        assert_eq!(ids(&saved), vec!["r1", "r2"]);
        assert_eq!(saved.notice(), Some("Failed to delete recipe."));
        assert!(!saved.is_deleting(&RecipeId::from("r1")));

        saved.dismiss_notice();
        assert!(saved.notice().is_none());
    }

    #[test]
    fn test_unknown_id_is_not_pending() {
        let mut saved = SavedRecipes::new();
        saved.request_delete(RecipeId::from("missing"));
        assert!(saved.pending_delete().is_none());
        assert_eq!(saved.confirm_delete(), None);
    }

    #[tokio::test]
    async fn test_confirm_marks_deleting() {
        let api = FakeApi::new().with_recipes(&["# One"]);
        let mut saved = loaded(&api).await;
        saved.request_delete(RecipeId::from("r1"));
        let id = saved.confirm_delete().unwrap();
        assert!(saved.is_deleting(&id));

        // No second delete while one is in flight
        saved.request_delete(RecipeId::from("r1"));
        assert!(saved.pending_delete().is_none());
    }
}
