pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::AppConfig;
pub use models::{Credentials, GeneratedRecipe, Recipe, RecipeId};
pub use session::{Session, SessionStore, EMAIL_KEY, TOKEN_KEY};
