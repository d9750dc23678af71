//! Test helpers module
//!
//! Mock backend, sample payloads and the shared test context.
//! Not every test binary uses every helper.
#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;
pub mod test_data;

pub use backend_mock::*;
pub use test_context::*;
pub use test_data::*;
