//! # Mailsmith HTML Compiler
//!
//! Pure Document → HTML encoding under legacy email-client constraints:
//! nested table layout, attribute sizing on images, inline styles only.
//!
//! Compilation is deterministic: identical documents produce
//! byte-identical output, because preview, test send, and persistence
//! all rely on output equality.

mod compiler;


pub use compiler::{compile_to_html, CompileOptions};
