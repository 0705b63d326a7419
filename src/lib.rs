//! Slowtris (workspace facade crate).
//!
//! This package keeps a stable `slowtris::{core,store,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use slowtris_core as core;
pub use slowtris_input as input;
pub use slowtris_store as store;
pub use slowtris_term as term;
pub use slowtris_types as types;
