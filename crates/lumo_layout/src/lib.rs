//! Lumo Layout Engine
//!
//! Flexbox layout powered by Taffy, plus the element vocabulary built on
//! top of it: fluent `div()`/`text()` builders, an id-keyed element
//! registry, and click routing over computed bounds.
//!
//! # Example
//!
//! ```rust,ignore
//! use lumo_layout::prelude::*;
//!
//! let registry = ElementRegistry::new();
//! let ui = div()
//!     .w(400.0).h(300.0)
//!     .flex_col().gap(16.0).p(24.0)
//!     .child(text("Hello Lumo!").size(24.0).id("title"))
//!     .child(div().id("cta").h(40.0).on_click(|_| {}));
//!
//! let mut tree = UiTree::from_element(&ui, &registry);
//! tree.compute_layout(400.0, 300.0);
//! tree.click(30.0, 80.0);
//! ```

pub mod div;
pub mod element;
pub mod registry;
pub mod router;
pub mod text;
pub mod text_measure;
pub mod tree;
pub mod ui_tree;

pub use div::{div, ClickHandler, Div, ElementBuilder, ElementIdentity, TextRenderInfo};
pub use element::{ElementBounds, RenderProps};
pub use registry::{ElementRegistry, RegisteredElement, SharedElementRegistry};
pub use router::{node_target, ClickRouter};
pub use text::{text, Text};
pub use text_measure::{HeuristicTextMeasurer, TextLayoutOptions, TextMeasurer, TextMetrics};
pub use tree::{LayoutNodeId, LayoutTree};
pub use ui_tree::{ElementType, HitPath, RenderNode, TextData, UiTree};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::div::{div, Div, ElementBuilder};
    pub use crate::element::{ElementBounds, RenderProps};
    pub use crate::registry::{ElementRegistry, SharedElementRegistry};
    pub use crate::text::{text, Text};
    pub use crate::tree::{LayoutNodeId, LayoutTree};
    pub use crate::ui_tree::{ElementType, RenderNode, UiTree};

    // Core types
    pub use lumo_core::{Color, Point, Rect, Size};
}
