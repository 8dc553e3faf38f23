//! Exercises the `metatype` surface the way a downstream crate sees it:
//! macros expanded outside their defining crates, nothing but the prelude
//! imported.

mod laws;
