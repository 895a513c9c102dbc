use reqwest::Method;

/// The backend operations the client knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    SignIn,
    SignUp,
    GenerateRecipe,
    ListRecipes,
    SaveRecipe,
    DeleteRecipe,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListRecipes => Method::GET,
            Endpoint::DeleteRecipe => Method::DELETE,
            _ => Method::POST,
        }
    }

    /// Path below the base URL. [`Endpoint::DeleteRecipe`] takes the recipe id as
    /// one more segment, added by the client.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::SignIn => "/api/signin",
            Endpoint::SignUp => "/api/signup",
            Endpoint::GenerateRecipe => "/api/generate-recipe",
            Endpoint::ListRecipes | Endpoint::SaveRecipe | Endpoint::DeleteRecipe => "/api/recipes",
        }
    }

    /// Whether the call carries a bearer token.
    pub fn requires_token(&self) -> bool {
        !matches!(self, Endpoint::SignIn | Endpoint::SignUp)
    }

    /// Message shown when a failed response carries no usable text.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::SignIn | Endpoint::SignUp => "Something went wrong.",
            Endpoint::GenerateRecipe => "Failed to generate recipe.",
            Endpoint::ListRecipes => "Failed to fetch recipes.",
            Endpoint::SaveRecipe => "Failed to save recipe.",
            Endpoint::DeleteRecipe => "Failed to delete recipe.",
        }
    }
}
