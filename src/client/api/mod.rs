#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod audio;

#[cfg(feature = "web")]
pub mod auth;

#[cfg(feature = "web")]
pub mod message;

#[cfg(feature = "web")]
pub mod mosque;

#[cfg(feature = "web")]
pub mod settings;

#[cfg(feature = "web")]
pub mod subscribe;

#[cfg(feature = "web")]
pub mod subscriber;
