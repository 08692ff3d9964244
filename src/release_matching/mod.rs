//! Release matching core
//!
//! Reconciles a locally observed software inventory against the release
//! catalog and assigns every item a [`domain::Classification`].
//!
//! Everything in here is synchronous and side-effect free apart from the
//! injected diagnostics reporter; a [`services::CatalogIndex`] can be shared
//! across threads while classifying.
pub mod domain;
pub mod policies;
pub mod services;
