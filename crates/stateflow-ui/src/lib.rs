//! Horizontal state-flow container.
//!
//! [`StateFlowLayout`] is the stateful adapter a host render loop drives
//! phase by phase; [`render`] runs a whole cycle on owned elements and
//! returns the resulting [`Frame`].

pub mod flow;
pub mod linear;
pub mod render;

pub use flow::{StateFlowLayout, TAG, label_x};
pub use linear::Gravity;
pub use render::{Frame, render, render_with};
