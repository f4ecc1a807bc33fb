//! Drag-and-drop UI tree builder.
//!
//! The design is a forest of [`Node`]s edited through a [`Session`]; the
//! [`codegen`] module turns it into a TSX component whose styling is
//! expressed as utility classes by [`classes`].

pub mod classes;
pub mod codegen;
pub mod config;
pub mod error;
pub mod factory;
pub mod node;
pub mod session;
pub mod tree;

pub use config::{BuilderConfig, CodegenFormat, CodegenOptions};
pub use error::TreeError;
pub use node::{Kind, Node, NodeId, NodePatch, Props, Style, StyleField};
pub use session::{DragPayload, Session};
