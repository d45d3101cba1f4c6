//! Default-import consistency check.
//!
//! Given a default import such as `import Card from './Widget'`, decide
//! whether the referenced module actually has a default export, and if not,
//! report which named exports it offers instead.
//!
//! The check runs in four stages per occurrence:
//!
//! - [`filter`] rejects package and asset specifiers, and non-source targets
//! - [`resolve`] maps a relative specifier to a file, probing extensions
//! - [`surface`] lexically extracts the target's default and named exports
//! - [`policy`] ties the stages together and produces at most one [`Diagnostic`]
//!
//! # Example
//!
//! ```ignore
//! use importscope::check::{check_default_import, ImportOccurrence};
//!
//! let occurrence = ImportOccurrence::new("Card", "./Widget", "/project/src/App.jsx");
//! if let Some(diag) = check_default_import(&occurrence) {
//!     println!("{}", diag);
//! }
//! ```

pub mod diagnostic;
pub mod filter;
pub mod policy;
pub mod resolve;
pub mod surface;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticKind, ImportOccurrence};
pub use filter::{is_checkable_file_type, is_out_of_scope, SourceKind, SOURCE_EXTENSIONS};
pub use policy::{
    check_default_import, evaluate, CheckOutcome, FreshSurfaces, SkipReason, SurfaceCache,
    SurfaceSource,
};
pub use resolve::{resolve, ResolvedTarget};
pub use surface::{has_default_export, named_exports, ExportSurface};
