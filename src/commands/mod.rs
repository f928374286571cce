//! Command implementations
//!
//! One module per subcommand, each exposing a `run` function called from
//! `main`. Shared input validation lives in [`helpers`].

pub mod add;
pub mod helpers;
pub mod list;
pub mod remove;
