//! Demo screens for the `lumo-demo` binary

pub mod showcase;

pub use showcase::{showcase_view, ShowcaseDemo};
