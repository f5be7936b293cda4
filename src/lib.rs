//! Survey intake
//!
//! Collects student survey responses through a validated form, keeps them in
//! a local key-value store and derives three email summaries from them.

pub mod configuration;
pub mod controller;
pub mod error_handling;
pub mod form_session;
pub mod storage;
pub mod summary;

pub use controller::Controller;
pub use form_session::FormSession;
pub use storage::{RecordStore, Storage, SurveyRecord};
