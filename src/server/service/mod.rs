//! Business logic orchestration between controllers and the data layer.
//!
//! Domain services (`subscriber`, `message`, `audio`, `mosque`, `auth`) work
//! with domain models and repositories. Infrastructure clients
//! (`rate_limit`, `whatsapp`, `storage`) wrap external hosted services and
//! are constructed once at startup, then handed to handlers through
//! `AppState`.

pub mod auth;
pub mod audio;
pub mod message;
pub mod mosque;
pub mod rate_limit;
pub mod storage;
pub mod subscriber;
pub mod whatsapp;
