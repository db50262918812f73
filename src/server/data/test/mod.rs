mod admin_user;
mod audio;
mod message;
mod mosque;
mod prayer_time;
mod subscriber;
