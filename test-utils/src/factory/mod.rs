//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories for dependent
//! entities take the id of their parent, so tests create rows top-down:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let form = factory::create_form(db, user.id).await?;
//! let submission = factory::create_submission(db, form.id).await?;
//!
//! // Or all three at once
//! let (user, form, submission) = factory::helpers::create_submission_with_dependencies(db).await?;
//! ```

pub mod form;
pub mod helpers;
pub mod submission;
pub mod user;

pub use form::create_form;
pub use submission::create_submission;
pub use user::create_user;
