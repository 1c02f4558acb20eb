//! Table reservation types
//!
//! This module provides the types exchanged with the table store:
//! - Actions: Typed commands that drive one state transition each
//! - Orders: The ordered choices recorded for a reserved table
//! - View-models: Read-only projections handed to the presentation layer

pub mod action;
pub mod order;

// Re-exports
pub use action::{TableAction, TableActionKind};
pub use order::{OrderViewModel, TableOrder};
