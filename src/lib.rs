//! Browser front-end for the e-learning platform.
//!
//! A Leptos single-page shell that routes `/` to a component fetching the
//! lecture materials collection from the API and rendering it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
