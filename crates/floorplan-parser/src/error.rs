//! Diagnostics for the floorplan parser.
//!
//! Every phase (lexing, parsing, validation) reports problems as
//! [`Diagnostic`]s carrying an [`ErrorCode`], labeled source spans and
//! optional help. A failed parse returns all of them wrapped in a
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use floorplan_parser::error::{Diagnostic, ErrorCode};
//! # use floorplan_parser::Span;
//! let diag = Diagnostic::error("room `Kitchen` is defined multiple times")
//!     .with_code(ErrorCode::E202)
//!     .with_label(Span::new(100..107), "duplicate definition")
//!     .with_secondary_label(Span::new(20..27), "first defined here")
//!     .with_help("room names must be unique across all floors");
//!
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E202]: room `Kitchen` is defined multiple times"
//! );
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
