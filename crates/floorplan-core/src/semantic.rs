//! Semantic floor plan model types.
//!
//! This module contains the representation of a floor plan after parsing and
//! validation. The values are immutable once built and are consumed read-only
//! by connection resolution and rendering.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ lexer
//! Tokens
//!     ↓ parser
//! Parser AST - syntactic structure with spans
//!     ↓ validate + elaborate
//! Semantic Model (these types)
//!     ↓ resolve + render
//! SVG
//! ```
//!
//! # Organization
//!
//! - [`floorplan`] - Root structures: [`Floorplan`], [`Floor`]
//! - [`room`] - Rooms and walls: [`Room`], [`RoomKind`], [`WallSet`], [`WallSpec`], [`WallType`], [`Direction`]
//! - [`connection`] - Links between rooms: [`Connection`], [`Endpoint`], [`Swing`]

pub mod connection;
pub mod floorplan;
pub mod room;

pub use connection::*;
pub use floorplan::*;
pub use room::*;
