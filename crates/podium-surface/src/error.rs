//! Surface error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("cannot insert a node into itself or its own descendant")]
    HierarchyViolation,
}
