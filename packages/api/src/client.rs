//! `reqwest`-backed [`RecipeApi`] implementation.

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::AppConfig;

use crate::{
    ApiError, Credentials, Endpoint, GeneratedRecipe, Recipe, RecipeApi, RecipeId,
    SignInResponse,
};

/// Shown after sign-up when the backend sends no message of its own.
pub const DEFAULT_SIGN_UP_MESSAGE: &str = "Account created. Please sign in.";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    ingredients: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveRecipeRequest<'a> {
    content: &'a str,
    nutrition: Option<&'a str>,
    image_url: Option<&'a str>,
}

#[derive(Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    message: String,
}

/// The save endpoint may answer with the recipe itself or wrap it.
#[derive(Deserialize)]
#[serde(untagged)]
enum SaveResponse {
    Wrapped { recipe: Recipe },
    Bare(Recipe),
}

impl From<SaveResponse> for Recipe {
    fn from(response: SaveResponse) -> Self {
        match response {
            SaveResponse::Wrapped { recipe } | SaveResponse::Bare(recipe) => recipe,
        }
    }
}

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint. `id` is appended as one encoded path segment.
    pub fn url(&self, endpoint: Endpoint, id: Option<&RecipeId>) -> Result<Url, ApiError> {
        let invalid = |detail: String| {
            tracing::error!("Invalid backend URL {}: {}", self.base_url, detail);
            ApiError::unknown(format!("Invalid backend URL: {detail}"))
        };
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
            .map_err(|e| invalid(e.to_string()))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|()| invalid("base URL cannot carry a path".to_string()))?
                .push(id.as_str());
        }
        Ok(url)
    }

    fn request(
        &self,
        endpoint: Endpoint,
        id: Option<&RecipeId>,
        token: Option<&str>,
    ) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(endpoint.method(), self.url(endpoint, id)?);
        if !endpoint.requires_token() {
            return Ok(builder);
        }
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(ApiError::missing_token)?;
        Ok(builder.bearer_auth(token))
    }

    async fn send(&self, endpoint: Endpoint, builder: RequestBuilder) -> Result<Response, ApiError> {
        tracing::debug!("{} {}", endpoint.method(), endpoint.path());

        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{:?} request failed: {}", endpoint, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(endpoint, status.as_u16(), &body);
        tracing::warn!("{:?} returned {}: {}", endpoint, status, err.message);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(endpoint: Endpoint, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!("{:?} response could not be decoded: {}", endpoint, e);
            ApiError::unknown(format!("Unexpected response from server: {e}"))
        })
    }
}

impl RecipeApi for ApiClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        let endpoint = Endpoint::SignIn;
        let builder = self.request(endpoint, None, None)?.json(credentials);
        let response = self.send(endpoint, builder).await?;
        Self::decode(endpoint, response).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let endpoint = Endpoint::SignUp;
        let builder = self.request(endpoint, None, None)?.json(credentials);
        let response = self.send(endpoint, builder).await?;
        let body: SignUpResponse = Self::decode(endpoint, response).await?;
        if body.message.trim().is_empty() {
            Ok(DEFAULT_SIGN_UP_MESSAGE.to_string())
        } else {
            Ok(body.message)
        }
    }

    async fn generate_recipe(
        &self,
        ingredients: &[String],
        token: &str,
    ) -> Result<GeneratedRecipe, ApiError> {
        let endpoint = Endpoint::GenerateRecipe;
        let builder = self
            .request(endpoint, None, Some(token))?
            .json(&GenerateRequest { ingredients });
        let response = self.send(endpoint, builder).await?;
        Self::decode(endpoint, response).await
    }

    async fn list_recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError> {
        let endpoint = Endpoint::ListRecipes;
        let builder = self.request(endpoint, None, Some(token))?;
        let response = self.send(endpoint, builder).await?;
        Self::decode(endpoint, response).await
    }

    async fn save_recipe(
        &self,
        recipe: &GeneratedRecipe,
        token: &str,
    ) -> Result<Option<Recipe>, ApiError> {
        let endpoint = Endpoint::SaveRecipe;
        let body = SaveRecipeRequest {
            content: &recipe.content,
            nutrition: recipe.nutrition.as_deref(),
            image_url: recipe.image_url.as_deref(),
        };
        let builder = self.request(endpoint, None, Some(token))?.json(&body);
        let response = self.send(endpoint, builder).await?;
        // The status alone decides success; the body may be a bare confirmation
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<SaveResponse>(&body) {
            Ok(saved) => Ok(Some(saved.into())),
            Err(e) => {
                tracing::debug!("Save response carried no recipe: {}", e);
                Ok(None)
            }
        }
    }

    async fn delete_recipe(&self, id: &RecipeId, token: &str) -> Result<(), ApiError> {
        let endpoint = Endpoint::DeleteRecipe;
        let builder = self.request(endpoint, Some(id), Some(token))?;
        self.send(endpoint, builder).await?;
        Ok(())
    }
}
