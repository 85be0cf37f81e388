use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParam};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod cascade_delete;
mod create;
