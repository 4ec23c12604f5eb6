//! Tekstra coding club website: a client-side rendered Leptos app.

pub mod app;
pub mod canvas;
pub mod components;
pub mod config;
pub mod data;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod models;
pub mod pages;
pub mod routes;

pub use app::App;
