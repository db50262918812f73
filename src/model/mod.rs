pub mod admin;
pub mod api;
pub mod audio;
pub mod message;
pub mod mosque;
pub mod phone;
pub mod prayer;
pub mod subscriber;
