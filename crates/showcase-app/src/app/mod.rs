//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers:
//! - `comparison_service`: the persisted comparison list
//! - `notifications`: transient user notices
//! - `query_service`: catalog browsing and comparison views
//! - `recommendation_service`: the AI advisor round-trip

pub mod comparison_service;
pub mod notifications;
pub mod query_service;
pub mod recommendation_service;

pub use comparison_service::{AddOutcome, ComparisonList};
pub use notifications::{Notice, NoticeKind, NoticeVariant, Notifier, ToastQueue};
pub use query_service::{categories, compare_selection, CategorySummary, ComparisonView};
pub use recommendation_service::run_recommendation;
