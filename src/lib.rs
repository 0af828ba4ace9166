//! Programmatic generation of Ninja build files.
//!
//! This crate provides a small builder-style object model for describing a
//! Ninja build graph — rules, build edges, variables, and pools — and renders
//! it into the line-oriented syntax consumed by the Ninja executable. It does
//! not run builds, resolve dependencies, or parse existing build files; it
//! only serialises what the caller has configured.
//!
//! # Examples
//!
//! ```rust
//! use ninjafile::NinjaFile;
//!
//! let mut ninja = NinjaFile::new();
//! ninja.required_version("1.3").build_dir("out");
//! ninja
//!     .rule("cc")
//!     .run("gcc -MMD -c $in -o $out")
//!     .depfile("$out.d");
//! ninja.edge("out/foo.o").using("cc").from("src/foo.c");
//! ninja.by_default("out/foo.o");
//!
//! let text = ninja.to_string();
//! assert!(text.contains("build out/foo.o: cc src/foo.c\n"));
//! ```

pub mod edge;
pub mod escape;
pub mod file;
pub mod paths;
mod render;
pub mod rule;
pub mod variable;

pub use edge::Edge;
pub use escape::{escape, unescape};
pub use file::{NinjaFile, PersistError};
pub use paths::IntoPaths;
pub use rule::Rule;
pub use variable::Variable;
