use crate::server::{data::mosque::MosqueRepository, model::mosque::UpdateMosqueParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_default;
mod update;
