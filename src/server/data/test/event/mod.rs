use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, EventFilter, UpdateEventParams},
};
use chrono::{Duration, TimeZone, Utc};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod set_featured;
mod update;
