use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_by_username;
