//! PitchAI — site backend and onboarding flow.

pub mod auth;
pub mod config;
pub mod content;
pub mod demo;
pub mod error;
pub mod onboarding;
pub mod store;
