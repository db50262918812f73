use crate::server::{
    data::message::MessageRepository,
    model::message::{CreateMessageParam, UpdateMessageParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_due_scheduled;
mod get_paginated;
mod mark_sent;
mod update;
