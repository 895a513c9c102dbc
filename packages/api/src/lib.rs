//! # API crate — HTTP client for the recipe backend
//!
//! Every screen of the web client reaches the backend through this crate. The
//! [`RecipeApi`] trait names the six operations the app needs; [`ApiClient`] is the
//! `reqwest` implementation, and tests substitute in-memory fakes.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: URL building, bearer auth, status handling, JSON decoding |
//! | [`endpoint`] | [`Endpoint`]: method, path, protection and fallback message per operation |
//! | [`error`] | [`ApiError`] / [`ErrorKind`]: the single error type every call returns |
//!
//! ## Failure policy
//!
//! A non-success status becomes one [`ApiError`] whose message is the backend's
//! `error` or `message` field, or a fixed per-endpoint fallback. There are no
//! retries and no timeouts beyond the transport's own.

use std::future::Future;

use serde::Deserialize;

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::{ApiError, ErrorKind};
pub use store::{Credentials, GeneratedRecipe, Recipe, RecipeId};

/// Successful sign-in payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

/// The operations the client performs against the recipe backend.
pub trait RecipeApi {
    /// `POST /api/signin`
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SignInResponse, ApiError>>;

    /// `POST /api/signup`. Returns the confirmation message; never a session.
    fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<String, ApiError>>;

    /// `POST /api/generate-recipe`
    fn generate_recipe(
        &self,
        ingredients: &[String],
        token: &str,
    ) -> impl Future<Output = Result<GeneratedRecipe, ApiError>>;

    /// `GET /api/recipes`, in backend order.
    fn list_recipes(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<Recipe>, ApiError>>;

    /// `POST /api/recipes`. Any success status means the recipe was stored; the
    /// stored copy is returned when the backend echoes it.
    fn save_recipe(
        &self,
        recipe: &GeneratedRecipe,
        token: &str,
    ) -> impl Future<Output = Result<Option<Recipe>, ApiError>>;

    /// `DELETE /api/recipes/:id`
    fn delete_recipe(
        &self,
        id: &RecipeId,
        token: &str,
    ) -> impl Future<Output = Result<(), ApiError>>;
}
