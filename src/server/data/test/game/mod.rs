use crate::server::data::game::GameRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
