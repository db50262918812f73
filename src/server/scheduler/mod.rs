pub mod message_dispatch;
