//! # Nodes, elements and scenes
//!
//! A state flow is a horizontal row of nodes joined by dividers. Each node
//! carries two labels: a *state* painted under it and a *content*
//! description painted over it. This crate holds the vocabulary shared by
//! the layout engine and its hosts:
//!
//! - [`Node`]: the capability set a flow element exposes.
//! - [`Element`]: a host view (intrinsic size, margins, laid-out bounds)
//!   that may or may not carry a `Node`.
//! - [`Scene`]: the draw commands a frame produces.
//! - [`TextMeasurer`]: the seam through which label widths are measured.
//!
//! ```rust
//! use stateflow_core::*;
//!
//! let placed: Element = NodeImage::new(40, 40)
//!     .with_state("done")
//!     .content_description("Submitted")
//!     .into();
//!
//! let node = placed.as_node().unwrap();
//! assert_eq!(node.state(), "done");
//! assert_eq!(node.content(), "Submitted");
//! assert!(placed.is_image_like());
//! ```
//!
//! Host views without the capability are still representable, so the
//! container can reject them with a useful message:
//!
//! ```rust
//! use stateflow_core::*;
//!
//! let label = Element::plain("TextView", IntSize::new(80, 20));
//! assert!(label.as_node().is_none());
//! assert_eq!(label.type_name(), "TextView");
//! ```

pub mod color;
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod node;
pub mod paint;
pub mod prelude;
pub mod scene;

pub use color::*;
pub use config::*;
pub use element::*;
pub use error::*;
pub use geometry::*;
pub use measure::*;
pub use node::*;
pub use paint::*;
pub use scene::*;
