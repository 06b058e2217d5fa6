use crate::server::data::profile::{CreateProfileParams, ProfileRepository, UpdateProfileParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{customer::CustomerFactory, profile::ProfileFactory},
};

mod create;
mod query;
mod update;
