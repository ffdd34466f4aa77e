//! Authorization for question access
//!
//! Policy decisions live in [`QuestionPolicy`](crate::domains::questions::QuestionPolicy)
//! as plain boolean functions. This module wraps them in a fluent API that
//! turns a denial into an [`AuthError`]:
//!
//! ```rust
//! use questions_core::common::{Actor, QuestionAbility, UserId};
//! use questions_core::domains::questions::Question;
//!
//! let owner = UserId::new();
//! let question = Question::new(None, owner, "What are you building?");
//!
//! Actor::viewer(Some(owner))
//!     .can(QuestionAbility::Answer)
//!     .on(&question)
//!     .check()?;
//! # Ok::<(), questions_core::common::AuthError>(())
//! ```

mod ability;
mod builder;
mod errors;

pub use ability::QuestionAbility;
pub use builder::{AbilityBuilder, Actor, Authorization};
pub use errors::AuthError;
