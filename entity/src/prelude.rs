pub use super::form::Entity as Form;
pub use super::submission::Entity as Submission;
pub use super::user::Entity as User;
