pub mod prelude;

pub mod form;
pub mod submission;
pub mod user;
