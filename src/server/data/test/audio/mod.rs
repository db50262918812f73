use crate::server::{
    data::audio::AudioRepository,
    model::audio::{CreateAudioFileParam, CreateCollectionParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod collections;
mod files;
