//! Lumo Core Primitives
//!
//! This crate provides the foundational value types for the Lumo UI scaffold:
//!
//! - **Colors**: RGBA colors with hex parsing and interpolation
//! - **Geometry**: Points, sizes, rectangles, corner radii, and shadows
//! - **Event Dispatch**: Unified event handling for pointer and lifecycle events
//!
//! # Example
//!
//! ```rust
//! use lumo_core::Color;
//!
//! let brand = Color::from_hex(0x0096DB);
//! let hover = Color::lerp(&brand, &Color::BLACK, 0.1);
//!
//! assert_eq!(brand.a, 1.0);
//! assert!(hover.r < brand.r);
//! ```

pub mod color;
pub mod events;
pub mod geometry;

pub use color::Color;
pub use events::{Event, EventData, EventDispatcher, EventHandler, EventType};
pub use geometry::{CornerRadius, Point, Rect, Shadow, Size};
