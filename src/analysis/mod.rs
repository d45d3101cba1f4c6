//! Source code analysis module for ImportScope.
//!
//! This module walks JavaScript/TypeScript syntax trees to find the default
//! imports that the [`check`](crate::check) module verifies.
//!
//! # Features
//!
//! - Parse ES6 default imports (`import foo from './foo'`)
//! - Parse mixed imports (`import foo, { bar } from './foo'`)
//! - Parse TypeScript type-only default imports (`import type Foo from './foo'`)
//! - Record the 1-indexed position of every default binding
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use importscope::analysis::ImportAnalyzer;
//!
//! let mut analyzer = ImportAnalyzer::new()?;
//! for occurrence in analyzer.default_imports(Path::new("src/App.tsx"))? {
//!     println!("{} from {}", occurrence.local, occurrence.specifier);
//! }
//! ```

pub mod imports;

// Re-export main types for convenience
pub use imports::{tree_sitter_language, AnalysisError, AnalysisResult, ImportAnalyzer};
