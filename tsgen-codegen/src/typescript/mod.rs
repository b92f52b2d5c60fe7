//! TypeScript code generation modules.

pub mod fields;
pub mod interfaces;

pub use fields::{FieldResolver, ResolvedField};
pub use interfaces::InterfaceRenderer;
