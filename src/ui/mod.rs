//! # User Interface Module
//!
//! Placement presets and widget primitives on top of the text rasterizer.
//!
//! ## Modules
//!
//! - `layout`: Screen layouts (EV3 stopwatch)
//! - `widgets`: `Widget` trait and the redraw-on-change `Label`
//!
//! ## Example
//!
//! ```ignore
//! use fbglyph::ui::{Layout, widgets::*};
//!
//! let layout = Layout::ev3();
//! let mut title = Label::new(layout.title, "00:00.000");
//! title.render(&mut matrix);
//! writer.flush(&mut matrix);
//! ```

pub mod layout;
pub mod widgets;
pub use layout::Layout;
pub use widgets::{Label, Widget};
