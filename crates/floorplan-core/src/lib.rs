//! Floorplan Core Types and Definitions
//!
//! This crate provides the foundational types for the floorplan description
//! language. It includes:
//!
//! - **Semantic**: The floor plan model produced by the parser ([`semantic`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Drawable primitives for walls, rooms and labels ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
