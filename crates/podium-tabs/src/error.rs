//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("node is not a tab-group container: <{0}>")]
    NotAContainer(String),
}
