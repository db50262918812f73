pub mod prelude;

pub mod admin_user;
pub mod audio_collection;
pub mod audio_file;
pub mod message;
pub mod mosque;
pub mod prayer_time;
pub mod subscriber;
