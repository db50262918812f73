//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let mosque = factory::mosque::create_mosque(&db).await?;
//!     let subscriber = factory::subscriber::create_subscriber(&db, mosque.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let subscriber = factory::subscriber::SubscriberFactory::new(&db, mosque.id)
//!     .phone("+27821234567")
//!     .status("paused")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `mosque` - Create mosque tenants
//! - `admin_user` - Create admin accounts
//! - `subscriber` - Create subscribers
//! - `message` - Create draft and scheduled messages
//! - `prayer_time` - Create prayer timetable days
//! - `audio` - Create audio collections and files
//! - `helpers` - Unique id generation

pub mod admin_user;
pub mod audio;
pub mod helpers;
pub mod message;
pub mod mosque;
pub mod prayer_time;
pub mod subscriber;

// Re-export commonly used factory functions for concise usage
pub use admin_user::create_admin_user;
pub use audio::{create_audio_file, create_collection};
pub use message::create_message;
pub use mosque::create_mosque;
pub use prayer_time::create_prayer_day;
pub use subscriber::create_subscriber;
