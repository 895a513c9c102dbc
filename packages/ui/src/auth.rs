//! Sign-in / sign-up form state.
//!
//! The form is a small state machine: a [`AuthMode`] (which form is shown) times an
//! [`AuthStatus`] (what the last submit did). Views drive it with
//! [`AuthForm::begin_submit`], run [`authenticate`], and hand the result to
//! [`AuthForm::finish_submit`].

use api::{ApiError, Credentials, RecipeApi};
use store::{Session, SessionStore};

use crate::Redirect;

/// Which of the two forms is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back!",
            AuthMode::SignUp => "Create Your Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to continue",
            AuthMode::SignUp => "Get started with your personal recipe AI",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? ",
            AuthMode::SignUp => "Already have an account? ",
        }
    }

    /// Label of the button that switches to the other form.
    pub fn toggle_label(self) -> &'static str {
        self.toggled().short_label()
    }

    fn short_label(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Idle,
    Submitting,
    Error(String),
    Message(String),
}

/// What a successful submit did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Token and email were written to the session.
    SignedIn,
    /// Account created; carries the backend's confirmation.
    Registered(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub status: AuthStatus,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where to send a visitor who already has a session.
    pub fn redirect_on_mount(session: &Session) -> Option<Redirect> {
        session.is_authenticated().then_some(Redirect::Generator)
    }

    pub fn is_submitting(&self) -> bool {
        self.status == AuthStatus::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Message(m) => Some(m),
            _ => None,
        }
    }

    /// Switch forms, dropping any error or confirmation shown.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if !self.is_submitting() {
            self.status = AuthStatus::Idle;
        }
    }

    /// Validate and enter `Submitting`. Returns the mode to submit in, or `None`
    /// when nothing should be sent.
    pub fn begin_submit(&mut self, credentials: &Credentials) -> Option<AuthMode> {
        if self.is_submitting() {
            return None;
        }
        if !credentials.is_complete() {
            let err = ApiError::validation("Please enter your email and password.");
            self.status = AuthStatus::Error(err.message);
            return None;
        }
        self.status = AuthStatus::Submitting;
        Some(self.mode)
    }

    /// Apply the result of [`authenticate`].
    pub fn finish_submit(&mut self, result: Result<AuthOutcome, ApiError>) -> Option<Redirect> {
        match result {
            Ok(AuthOutcome::SignedIn) => {
                self.status = AuthStatus::Idle;
                Some(Redirect::Generator)
            }
            Ok(AuthOutcome::Registered(message)) => {
                self.status = AuthStatus::Message(message);
                self.mode = AuthMode::SignIn;
                None
            }
            Err(e) => {
                self.status = AuthStatus::Error(e.message);
                None
            }
        }
    }
}

/// Call the endpoint for `mode`. Only a successful sign-in touches the session.
pub async fn authenticate(
    api: &impl RecipeApi,
    session: &impl SessionStore,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<AuthOutcome, ApiError> {
    match mode {
        AuthMode::SignIn => {
            let response = api.sign_in(credentials).await?;
            session.set(&response.token, &credentials.email);
            tracing::info!("Signed in as {}", credentials.email);
            Ok(AuthOutcome::SignedIn)
        }
        AuthMode::SignUp => {
            let message = api.sign_up(credentials).await?;
            tracing::info!("Registered {}", credentials.email);
            Ok(AuthOutcome::Registered(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::require_session;
    use crate::testing::{FakeApi, VALID_TOKEN};
    use store::MemoryStore;

    async fn submit(
        form: &mut AuthForm,
        api: &FakeApi,
        session: &MemoryStore,
        credentials: &Credentials,
    ) -> Option<Redirect> {
        let mode = form.begin_submit(credentials)?;
        assert!(form.is_submitting());
        let result = authenticate(api, session, mode, credentials).await;
        form.finish_submit(result)
    }

    #[test]
    fn test_initial_state() {
        let form = AuthForm::new();
        assert_eq!(form.mode, AuthMode::SignIn);
        assert_eq!(form.status, AuthStatus::Idle);
    }

    #[test]
    fn test_existing_session_redirects_once_on_mount() {
        let session = MemoryStore::new();
        assert_eq!(AuthForm::redirect_on_mount(&session.get()), None);
        session.set("tok", "a@b.c");
        assert_eq!(
            AuthForm::redirect_on_mount(&session.get()),
            Some(Redirect::Generator)
        );
    }

    #[tokio::test]
    async fn test_sign_in_stores_session_and_unlocks_generator() {
        let api = FakeApi::new().with_user("cook@example.com", "pw");
        let session = MemoryStore::new();
        let mut form = AuthForm::new();

        let next = submit(
            &mut form,
            &api,
            &session,
            &Credentials::new("cook@example.com", "pw"),
        )
        .await;

        assert_eq!(next, Some(Redirect::Generator));
        assert_eq!(session.get().token(), Some(VALID_TOKEN));
        assert_eq!(session.get().email(), Some("cook@example.com"));
        // Generator guard now lets the user through
        assert_eq!(require_session(&session.get()), None);
    }

    #[tokio::test]
    async fn test_bad_credentials_show_error_and_store_nothing() {
        let api = FakeApi::new().with_user("cook@example.com", "pw");
        let session = MemoryStore::new();
        let mut form = AuthForm::new();

        let next = submit(
            &mut form,
            &api,
            &session,
            &Credentials::new("cook@example.com", "wrong"),
        )
        .await;

        assert_eq!(next, None);
        assert_eq!(form.mode, AuthMode::SignIn);
        assert_eq!(form.error(), Some("Invalid email or password"));
        assert!(!session.get().is_authenticated());
        assert_eq!(require_session(&session.get()), Some(Redirect::Auth));
    }

    #[tokio::test]
    async fn test_sign_up_shows_message_flips_mode_and_never_writes_token() {
        let api = FakeApi::new();
        *api.sign_up_response.borrow_mut() = Some("Account created!".to_string());
        let session = MemoryStore::new();
        let mut form = AuthForm::new();
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);

        let next = submit(
            &mut form,
            &api,
            &session,
            &Credentials::new("new@example.com", "secret"),
        )
        .await;

        assert_eq!(next, None);
        assert_eq!(form.mode, AuthMode::SignIn);
        assert_eq!(form.message(), Some("Account created!"));
        assert!(session.get().token.is_none());
        assert!(session.get().email.is_none());
    }

    #[tokio::test]
    async fn test_sign_up_failure_keeps_mode() {
        let api = FakeApi::new().with_user("taken@example.com", "pw");
        let session = MemoryStore::new();
        let mut form = AuthForm::new();
        form.toggle_mode();

        submit(
            &mut form,
            &api,
            &session,
            &Credentials::new("taken@example.com", "pw2"),
        )
        .await;

        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.error(), Some("User already exists"));
        assert!(!session.get().is_authenticated());
    }

    #[tokio::test]
    async fn test_empty_fields_are_blocked_client_side() {
        let api = FakeApi::new();
        let session = MemoryStore::new();
        let mut form = AuthForm::new();

        let next = submit(&mut form, &api, &session, &Credentials::new("", "pw")).await;

        assert_eq!(next, None);
        assert!(form.error().is_some());
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn test_toggle_resets_error_and_message() {
        let mut form = AuthForm {
            mode: AuthMode::SignIn,
            status: AuthStatus::Error("boom".to_string()),
        };
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.status, AuthStatus::Idle);

        form.status = AuthStatus::Message("created".to_string());
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignIn);
        assert_eq!(form.status, AuthStatus::Idle);
    }

    #[test]
    fn test_no_double_submit() {
        let mut form = AuthForm::new();
        let creds = Credentials::new("a@b.c", "pw");
        assert_eq!(form.begin_submit(&creds), Some(AuthMode::SignIn));
        assert_eq!(form.begin_submit(&creds), None);
    }

    #[test]
    fn test_copy_follows_mode() {
        assert_eq!(AuthMode::SignIn.submit_label(), "Sign In");
        assert_eq!(AuthMode::SignUp.submit_label(), "Create Account");
        assert_eq!(AuthMode::SignIn.toggle_label(), "Sign Up");
        assert_eq!(AuthMode::SignUp.toggle_label(), "Sign In");
    }
}
