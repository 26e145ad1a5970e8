//! # Floorplan Parser
//!
//! Parser for the floorplan description language. This crate provides the
//! parsing pipeline from source text to the semantic floor plan model.
//!
//! ## Usage
//!
//! ```
//! # use floorplan_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         floorplan
//!         floor ground {
//!             room Kitchen at (0,0) size (4 x 3) walls [top: solid, right: door]
//!             room Hall at (4,0) size (2 x 3) walls [left: door] label "Entrance"
//!         }
//!         connect Kitchen.right to Hall.left door at 50%
//!     "#;
//!
//!     let floorplan = parse(source)?;
//!     assert_eq!(floorplan.rooms().count(), 2);
//!     Ok(())
//! }
//! ```

mod elaborate;
pub mod error;
mod lexer;
mod parser;
mod parser_types;
mod span;
mod tokens;
mod validate;

pub use span::Span;

use log::{debug, trace};

use floorplan_core::semantic::Floorplan;

use error::ParseError;

/// Parse source text into a semantic floor plan.
///
/// This is the main entry point for parsing floorplan source code.
/// It orchestrates the complete parsing pipeline:
///
/// 1. **Tokenize** - Convert source text to tokens, collecting every lexer error
/// 2. **Parse** - Build the spanned AST from tokens
/// 3. **Validate** - Check directions, names, positions, swings and sizes
/// 4. **Elaborate** - Transform to the semantic model
///
/// # Returns
///
/// Returns the parsed [`Floorplan`] on success, or a [`ParseError`] holding
/// every diagnostic of the first failing phase.
///
/// # Example
///
/// ```
/// # use floorplan_parser::parse;
/// let floorplan = parse("floorplan").unwrap();
/// assert!(floorplan.is_empty());
///
/// let err = parse("floorplan floor f { room A at (0,0) size (0 x 1) walls [] }").unwrap_err();
/// assert_eq!(err.diagnostics()[0].code().map(|c| c.as_str()), Some("E205"));
/// ```
pub fn parse(source: &str) -> Result<Floorplan, ParseError> {
    // Step 1: Tokenize
    let tokens = lexer::tokenize(source)?;
    trace!(tokens = tokens.len(); "Tokenized source");

    // Step 2: Parse
    let ast = parser::build_floorplan(&tokens)?;

    // Step 3: Validate
    validate::validate_floorplan(&ast)?;

    // Step 4: Elaborate
    let floorplan = elaborate::elaborate(&ast)?;
    debug!(
        floors = floorplan.floors().len(),
        connections = floorplan.connections().len();
        "Parsed floorplan"
    );
    Ok(floorplan)
}
