//! Models loaded from outside the application.

pub mod config;
