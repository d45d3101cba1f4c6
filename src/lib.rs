//! ImportScope - static checker for default imports of modules without a default export
//!
//! This crate finds `import Foo from './module'` statements in JavaScript and
//! TypeScript projects and reports those whose target module has no default
//! export, listing the named exports it offers instead.

pub mod analysis;
pub mod check;
pub mod logging;
pub mod project;
pub mod report;
