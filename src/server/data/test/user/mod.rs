use crate::server::data::user::UserRepository;
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_reviewers_by_game_id;
