use crate::server::{
    data::submission::SubmissionRepository, model::submission::CreateSubmissionParam,
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_form;
