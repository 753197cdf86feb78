//! # Picsum API
//!
//! Client and view-state machinery for the Lorem Picsum image API.
//!
//! This crate holds everything the gallery UI does not need a browser for:
//! - The [`Photo`] wire model with its display fallbacks
//! - [`PicsumClient`], a thin reqwest wrapper over the public endpoints
//! - The paginated list and single-item view states ([`ListState`],
//!   [`DetailState`]) together with the request-generation token
//!   ([`GenerationCounter`]) that discards stale responses
//!
//! ## Platform Separation
//!
//! No Dioxus types appear here. The application crate owns rendering and
//! event wiring; this crate owns the state transitions, so they stay
//! testable on the host without a renderer.

pub mod client;
pub mod error;
pub mod models;
pub mod pager;

pub use client::{GalleryConfig, PicsumClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::ApiError;
pub use models::Photo;
pub use pager::{DetailState, GenerationCounter, ListState, PageOutcome};
