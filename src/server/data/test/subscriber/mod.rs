use crate::server::{
    data::subscriber::SubscriberRepository,
    model::subscriber::{
        SetPushSubscriptionParam, SubscriberStatus, UpdateSubscriberParam, UpsertSubscriberParam,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_active_by_category;
mod get_paginated;
mod insert_batch;
mod set_push_subscription;
mod set_status_by_phone;
mod update;
mod upsert;

fn upsert_param(mosque_id: i32, phone: &str) -> UpsertSubscriberParam {
    UpsertSubscriberParam {
        mosque_id,
        phone: phone.to_string(),
        notify_announcements: true,
        notify_prayer_reminders: false,
        notify_audio: false,
    }
}
