//! In-memory backend used by the view-model tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use api::{
    ApiError, Credentials, ErrorKind, GeneratedRecipe, Recipe, RecipeApi, RecipeId,
    SignInResponse,
};

pub const VALID_TOKEN: &str = "token-for-tests";

#[derive(Default)]
pub struct FakeApi {
    users: RefCell<HashMap<String, String>>,
    recipes: RefCell<Vec<Recipe>>,
    next_id: Cell<u32>,
    pub generated: RefCell<GeneratedRecipe>,
    pub last_ingredients: RefCell<Vec<String>>,
    pub sign_up_response: RefCell<Option<String>>,
    pub fail_next: RefCell<Option<ApiError>>,
    pub calls: Cell<u32>,
    /// Answer saves with a bare confirmation instead of the stored recipe.
    pub silent_save: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        *api.generated.borrow_mut() = GeneratedRecipe {
            content: "# Garlic Rice\n\n- rice\n- garlic".to_string(),
            nutrition: Some("320 kcal".to_string()),
            image_url: Some("https://img.example.com/rice.png".to_string()),
        };
        api
    }

    pub fn with_user(self, email: &str, password: &str) -> Self {
        self.users
            .borrow_mut()
            .insert(email.to_string(), password.to_string());
        self
    }

    pub fn with_recipes(self, contents: &[&str]) -> Self {
        for content in contents {
            self.insert(content);
        }
        self
    }

    pub fn fail_next_with(&self, kind: ErrorKind, message: &str) {
        *self.fail_next.borrow_mut() = Some(ApiError::new(kind, message));
    }

    pub fn stored(&self) -> Vec<Recipe> {
        self.recipes.borrow().clone()
    }

    fn insert(&self, content: &str) -> Recipe {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let recipe = Recipe {
            id: RecipeId(format!("r{id}")),
            content: content.to_string(),
            nutrition: None,
            image_url: None,
        };
        self.recipes.borrow_mut().push(recipe.clone());
        recipe
    }

    fn begin(&self, token: Option<&str>) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(err) = self.fail_next.borrow_mut().take() {
            return Err(err);
        }
        match token {
            Some(t) if t != VALID_TOKEN => Err(ApiError::new(ErrorKind::Auth, "Invalid token")),
            _ => Ok(()),
        }
    }
}

impl RecipeApi for FakeApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInResponse, ApiError> {
        self.begin(None)?;
        match self.users.borrow().get(&credentials.email) {
            Some(pw) if *pw == credentials.password => Ok(SignInResponse {
                token: VALID_TOKEN.to_string(),
            }),
            _ => Err(ApiError::new(ErrorKind::Server, "Invalid email or password")),
        }
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<String, ApiError> {
        self.begin(None)?;
        if self.users.borrow().contains_key(&credentials.email) {
            return Err(ApiError::new(ErrorKind::Server, "User already exists"));
        }
        self.users
            .borrow_mut()
            .insert(credentials.email.clone(), credentials.password.clone());
        Ok(self
            .sign_up_response
            .borrow()
            .clone()
            .unwrap_or_else(|| "User created successfully".to_string()))
    }

    async fn generate_recipe(
        &self,
        ingredients: &[String],
        token: &str,
    ) -> Result<GeneratedRecipe, ApiError> {
        self.begin(Some(token))?;
        *self.last_ingredients.borrow_mut() = ingredients.to_vec();
        Ok(self.generated.borrow().clone())
    }

    async fn list_recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError> {
        self.begin(Some(token))?;
        Ok(self.stored())
    }

    async fn save_recipe(
        &self,
        recipe: &GeneratedRecipe,
        token: &str,
    ) -> Result<Option<Recipe>, ApiError> {
        self.begin(Some(token))?;
        let saved = self.insert(&recipe.content);
        Ok((!self.silent_save.get()).then_some(saved))
    }

    async fn delete_recipe(&self, id: &RecipeId, token: &str) -> Result<(), ApiError> {
        self.begin(Some(token))?;
        self.recipes.borrow_mut().retain(|r| &r.id != id);
        Ok(())
    }
}
