//! Dashboard client logic, independent of how it is rendered.
//!
//! UI events resolve to intents ([`intents`]), intents run against the
//! evaluation service ([`Dashboard`]) and come back as a [`Screen`] for the
//! current [`Section`].

mod breakdown;
mod controller;
pub mod intents;
mod notify;
mod results;
mod summary;
mod upload;
mod view;

pub use breakdown::{DetailView, OutcomeView};
pub use controller::{Dashboard, EvaluateView, ResultsView, Screen, UploadView, View};
pub use intents::UiEvent;
pub use notify::Notification;
pub use summary::DashboardSummary;
pub use view::{NavItem, Section};
