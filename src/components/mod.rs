//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod breadcrumb;
pub mod chatbot;
pub mod nav;
pub mod property_card;
pub mod theme;
pub mod toast;

pub use breadcrumb::Breadcrumb;
pub use chatbot::Chatbot;
pub use nav::Nav;
pub use property_card::PropertyCard;
pub use theme::ThemeToggle;
pub use toast::Toast;
