//! Errors raised by the tree engine and drop handling.
//!
//! None of these reach the user directly: the [`Session`](crate::session::Session)
//! logs them and leaves the canvas unchanged.

use crate::node::{Kind, NodeId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("target container not found: {0}")]
    ContainerNotFound(NodeId),

    #[error("node {id} is a {kind} and cannot hold children")]
    NotAContainer { id: NodeId, kind: Kind },

    #[error("node id already present in tree: {0}")]
    DuplicateId(NodeId),

    #[error("unknown component kind: {0:?}")]
    UnknownKind(String),

    #[error("malformed drag payload: {0}")]
    MalformedPayload(String),
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
