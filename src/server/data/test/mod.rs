mod form;
mod submission;
mod user;
