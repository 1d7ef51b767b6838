use crate::server::{data::form::FormRepository, model::form::CreateFormParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_author;
mod find_by_id;
mod update_fields;
