use crate::server::{
    data::news::NewsRepository,
    model::news::{CreateNewsParams, UpdateNewsParams},
};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod list;
mod update;
