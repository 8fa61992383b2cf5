//! Global Application State
//!
//! Reactive store built on Leptos signals. The store is the sole owner of
//! all entities; views keep only transient form drafts and merge them in
//! through the command methods here. Commands are synchronous; the
//! simulated network delay around login, registration, and prediction
//! lives in the pages, which keeps every state transition directly
//! testable.

use leptos::*;

use crate::model::{predict, seed, Favorite, Features, Neighborhood, Prediction, Property, Role, User};
use crate::state::page::Page;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Registered accounts, seeded with the demo users
    pub users: RwSignal<Vec<User>>,
    /// Property listings (static seed data)
    pub properties: RwSignal<Vec<Property>>,
    /// Favorited (user, property) pairs
    pub favorites: RwSignal<Vec<Favorite>>,
    /// Append-only prediction log
    pub predictions: RwSignal<Vec<Prediction>>,
    /// Neighborhood reference table
    pub neighborhoods: RwSignal<Vec<Neighborhood>>,
    /// The signed-in user, if any. Exactly one session exists app-wide.
    pub session: RwSignal<Option<User>>,
    /// Currently rendered page
    pub page: RwSignal<Page>,
    /// Mobile navigation overlay; closes on every navigation
    pub mobile_menu: RwSignal<bool>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Registration form draft, merged into the store on submit.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

impl GlobalState {
    pub fn new() -> Self {
        GlobalState {
            users: create_rw_signal(seed::users()),
            properties: create_rw_signal(seed::properties()),
            favorites: create_rw_signal(Vec::new()),
            predictions: create_rw_signal(Vec::new()),
            neighborhoods: create_rw_signal(seed::neighborhoods()),
            session: create_rw_signal(None),
            page: create_rw_signal(Page::Home),
            mobile_menu: create_rw_signal(false),
            success: create_rw_signal(None),
        }
    }

    // ============ Session ============

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|user| user.is_some())
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.get()
    }

    /// Scan the user list for an exact, case-sensitive credential match.
    /// The session is set only on success.
    pub fn login(&self, email: &str, password: &str) -> Result<(), String> {
        let found = self.users.with(|users| {
            users
                .iter()
                .find(|u| u.email == email && u.password == password)
                .cloned()
        });
        match found {
            Some(user) => {
                self.session.set(Some(user));
                self.navigate(Page::Dashboard);
                Ok(())
            }
            None => Err("Invalid email or password".to_string()),
        }
    }

    pub fn logout(&self) {
        self.session.set(None);
        self.navigate(Page::Home);
    }

    /// Append a new account and send the visitor to the login page.
    /// Registration does not authenticate.
    pub fn register(&self, form: RegisterForm) -> Result<User, String> {
        if form.password != form.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        if self
            .users
            .with(|users| users.iter().any(|u| u.email == form.email))
        {
            return Err("Email already exists".to_string());
        }

        let user = User {
            id: self.users.with(Vec::len) as u32 + 1,
            email: form.email,
            password: form.password,
            role: form.role,
            name: form.name,
            phone: form.phone,
        };
        self.users.update(|users| users.push(user.clone()));
        self.navigate(Page::Login);
        Ok(user)
    }

    /// Merge edited contact details into the user list and the session copy.
    pub fn save_profile(&self, name: String, email: String, phone: String) {
        let Some(mut user) = self.current_user() else {
            return;
        };
        user.name = name;
        user.email = email;
        user.phone = phone;

        self.users.update(|users| {
            if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
                *existing = user.clone();
            }
        });
        self.session.set(Some(user));
    }

    // ============ Navigation ============

    /// Switch pages unconditionally and close the mobile overlay.
    pub fn navigate(&self, page: Page) {
        self.page.set(page);
        self.mobile_menu.set(false);
    }

    // ============ Favorites ============

    /// Flip the favorite pair for the session user. Does nothing while
    /// logged out: no favorite may exist without a session user.
    pub fn toggle_favorite(&self, property_id: u32) {
        let Some(user) = self.current_user() else {
            return;
        };
        self.favorites.update(|favorites| {
            let existing = favorites
                .iter()
                .position(|f| f.user_id == user.id && f.property_id == property_id);
            match existing {
                Some(index) => {
                    favorites.remove(index);
                }
                None => favorites.push(Favorite {
                    user_id: user.id,
                    property_id,
                }),
            }
        });
    }

    pub fn is_favorite(&self, property_id: u32) -> bool {
        let Some(user) = self.current_user() else {
            return false;
        };
        self.favorites.with(|favorites| {
            favorites
                .iter()
                .any(|f| f.user_id == user.id && f.property_id == property_id)
        })
    }

    // ============ Predictions ============

    /// Run the estimator and append the result to the log for the session
    /// user. The uniform noise source feeding the confidence score is
    /// injected so tests can pin it; the UI passes `js_sys::Math::random`.
    pub fn record_prediction(
        &self,
        features: Features,
        noise: impl FnOnce() -> f64,
    ) -> Option<Prediction> {
        let user = self.current_user()?;
        let prediction = Prediction {
            id: self.predictions.with(Vec::len) as u32 + 1,
            user_id: user.id,
            features,
            price: predict::estimate(&features),
            confidence: predict::confidence_from(noise()),
            timestamp: chrono::Utc::now(),
        };
        self.predictions
            .update(|log| log.push(prediction.clone()));
        Some(prediction)
    }

    pub fn predictions_for(&self, user_id: u32) -> Vec<Prediction> {
        self.predictions.with(|log| {
            log.iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect()
        })
    }

    // ============ Derived stats ============

    pub fn listings_for(&self, dealer_id: u32) -> usize {
        self.properties
            .with(|properties| properties.iter().filter(|p| p.dealer_id == dealer_id).count())
    }

    pub fn favorites_for(&self, user_id: u32) -> usize {
        self.favorites
            .with(|favorites| favorites.iter().filter(|f| f.user_id == user_id).count())
    }

    /// Mean listing price across the market, in dollars.
    pub fn average_price(&self) -> f64 {
        self.properties.with(|properties| {
            if properties.is_empty() {
                return 0.0;
            }
            let total: u64 = properties.iter().map(|p| u64::from(p.price)).sum();
            total as f64 / properties.len() as f64
        })
    }

    // ============ Notifications ============

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_state(test: impl FnOnce(GlobalState)) {
        let runtime = create_runtime();
        test(GlobalState::new());
        runtime.dispose();
    }

    #[test]
    fn login_requires_an_exact_credential_match() {
        with_state(|state| {
            assert!(state.login("dealer@example.com", "wrong").is_err());
            assert!(state.login("Dealer@example.com", "password123").is_err());
            assert!(!state.is_authenticated());
            assert_eq!(state.page.get(), Page::Home);

            assert!(state.login("dealer@example.com", "password123").is_ok());
            assert_eq!(
                state.current_user().map(|u| u.name),
                Some("John Dealer".to_string())
            );
            assert_eq!(state.page.get(), Page::Dashboard);
        });
    }

    #[test]
    fn logout_clears_the_session_and_returns_home() {
        with_state(|state| {
            state.login("customer@example.com", "password123").unwrap();
            state.logout();
            assert!(!state.is_authenticated());
            assert_eq!(state.page.get(), Page::Home);
        });
    }

    fn sample_form() -> RegisterForm {
        RegisterForm {
            name: "Sam Renter".into(),
            phone: "+1-555-0199".into(),
            email: "sam@example.com".into(),
            password: "hunter2".into(),
            confirm_password: "hunter2".into(),
            role: Role::Customer,
        }
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        with_state(|state| {
            let form = RegisterForm {
                confirm_password: "hunter3".into(),
                ..sample_form()
            };
            assert_eq!(state.register(form), Err("Passwords do not match".into()));
            assert_eq!(state.users.with(Vec::len), 2);
        });
    }

    #[test]
    fn registration_rejects_taken_emails() {
        with_state(|state| {
            let form = RegisterForm {
                email: "dealer@example.com".into(),
                ..sample_form()
            };
            assert_eq!(state.register(form), Err("Email already exists".into()));
            assert_eq!(state.users.with(Vec::len), 2);
        });
    }

    #[test]
    fn registration_appends_a_user_with_a_fresh_id() {
        with_state(|state| {
            let user = state.register(sample_form()).unwrap();
            assert_eq!(user.id, 3);
            assert_eq!(state.users.with(Vec::len), 3);
            let holders = state
                .users
                .with(|users| users.iter().filter(|u| u.id == user.id).count());
            assert_eq!(holders, 1);

            // Registration lands on the login page without a session.
            assert_eq!(state.page.get(), Page::Login);
            assert!(!state.is_authenticated());

            // The new credentials work.
            assert!(state.login("sam@example.com", "hunter2").is_ok());
        });
    }

    #[test]
    fn favorite_toggle_is_an_idempotent_pair() {
        with_state(|state| {
            state.login("customer@example.com", "password123").unwrap();

            state.toggle_favorite(1);
            assert!(state.is_favorite(1));
            assert!(!state.is_favorite(2));

            state.toggle_favorite(1);
            assert!(!state.is_favorite(1));
            assert_eq!(state.favorites.with(Vec::len), 0);
        });
    }

    #[test]
    fn favorites_require_a_session_user() {
        with_state(|state| {
            state.toggle_favorite(1);
            assert_eq!(state.favorites.with(Vec::len), 0);
            assert!(!state.is_favorite(1));
        });
    }

    #[test]
    fn predictions_append_for_the_session_user() {
        with_state(|state| {
            state.login("customer@example.com", "password123").unwrap();

            let first = state
                .record_prediction(Features::example(), || 0.5)
                .unwrap();
            assert_eq!(first.id, 1);
            assert_eq!(first.user_id, 2);
            assert_eq!(first.price, predict::PRICE_FLOOR);
            assert!((first.confidence - 0.85).abs() < 1e-12);

            let second = state
                .record_prediction(Features::example(), || 0.0)
                .unwrap();
            assert_eq!(second.id, 2);
            assert_eq!(second.price, first.price);
            assert_eq!(second.confidence, 0.70);

            assert_eq!(state.predictions_for(2).len(), 2);
            assert!(state.predictions_for(1).is_empty());
        });
    }

    #[test]
    fn predictions_need_a_session() {
        with_state(|state| {
            assert!(state
                .record_prediction(Features::example(), || 0.5)
                .is_none());
            assert_eq!(state.predictions.with(Vec::len), 0);
        });
    }

    #[test]
    fn profile_saves_update_the_list_and_the_session() {
        with_state(|state| {
            state.login("customer@example.com", "password123").unwrap();
            state.save_profile(
                "Jane Q. Customer".into(),
                "jane@example.com".into(),
                "+1-555-042".into(),
            );

            let session = state.current_user().unwrap();
            assert_eq!(session.name, "Jane Q. Customer");
            assert_eq!(session.email, "jane@example.com");

            let stored = state
                .users
                .with(|users| users.iter().find(|u| u.id == 2).cloned())
                .unwrap();
            assert_eq!(stored, session);
        });
    }

    #[test]
    fn navigation_closes_the_mobile_overlay() {
        with_state(|state| {
            state.mobile_menu.set(true);
            state.navigate(Page::Properties);
            assert_eq!(state.page.get(), Page::Properties);
            assert!(!state.mobile_menu.get());
        });
    }

    #[test]
    fn dealer_stats_come_from_the_listing_table() {
        with_state(|state| {
            assert_eq!(state.listings_for(1), 2);
            assert_eq!(state.listings_for(2), 0);
            assert_eq!(state.average_price(), 1_025_000.0);
        });
    }
}
