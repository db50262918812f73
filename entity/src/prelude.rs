pub use super::admin_user::Entity as AdminUser;
pub use super::audio_collection::Entity as AudioCollection;
pub use super::audio_file::Entity as AudioFile;
pub use super::message::Entity as Message;
pub use super::mosque::Entity as Mosque;
pub use super::prayer_time::Entity as PrayerTime;
pub use super::subscriber::Entity as Subscriber;
