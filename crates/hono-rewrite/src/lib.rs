//! Rewrites supertest request chains in TypeScript test sources into Hono's
//! `app.request(path, { ... })` form.
//!
//! The rewrite is purely textual: a short, fixed list of regular expressions
//! is applied in order over the whole document. Shapes the rules don't
//! recognise are left alone.

pub mod convert;
pub mod error;
pub mod rewriter;
pub mod rules;

pub use convert::convert_file;
pub use error::ConvertError;
pub use rewriter::{RewriteReport, rewrite, rewrite_with_report};
