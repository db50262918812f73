//! Domain models and operation-specific parameter types.
//!
//! These sit between the entity models returned by SeaORM and the DTOs sent
//! over the wire. Repositories convert entities into domain models at the
//! data-layer boundary; controllers convert domain models into DTOs.

pub mod admin_user;
pub mod audio;
pub mod message;
pub mod mosque;
pub mod prayer_time;
pub mod subscriber;
