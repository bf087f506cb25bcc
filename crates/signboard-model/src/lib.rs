//! Signage domain objects.
//!
//! The exportable family of the signage service: each type declares its
//! visible fields through [`signboard_export::Exportable`], which drives
//! both API serialization and structural diffing.
//!
//! # Key Types
//!
//! - [`User`] — Account with group memberships; password hash is private
//! - [`Slide`] — A single display slide with markup and scheduling fields
//! - [`Queue`] — Named, owned sequence of slides

pub mod queue;
pub mod slide;
pub mod user;

pub use queue::Queue;
pub use slide::Slide;
pub use user::User;
