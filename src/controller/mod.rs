//! HTTP controllers.
//!
//! A controller holds its collaborators as `Arc`s resolved from the container,
//! exposes `base_path()` and `router(Arc<Self>)` for mounting, and keeps each
//! handler a thin call into its service.

mod portfolio;

pub use portfolio::{PortfolioController, SUBJECT_ID};
