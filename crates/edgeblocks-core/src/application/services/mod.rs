//! Application services - one per block.
//!
//! Each service resolves its block's configuration, fetches through the
//! injected ports, and mounts markup built by `crate::domain::views`.

pub mod adventure_list;
pub mod category_list;

pub use adventure_list::{ADVENTURES_LIST_BLOCK, AdventureListBlock};
pub use category_list::{CATEGORY_LIST_BLOCK, CategoryListBlock};
