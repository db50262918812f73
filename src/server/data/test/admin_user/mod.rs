use crate::server::{data::admin_user::AdminUserRepository, model::admin_user::CreateAdminUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
