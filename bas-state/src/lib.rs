pub mod config;
pub mod content;
pub mod motion;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod section;

pub mod prelude {
    pub use super::config::{RevealConfig, TrackerConfig};
    pub use super::motion::{Ease, FrameGate, Glyph, Motion, Parallax, Pose, ScrollRange, Transition};
    pub use super::nav::{MobileMenu, NavStyle};
    pub use super::reveal::RevealState;
    pub use super::scroll::{ScrollState, ScrollTracker, TrackerUpdate};
    pub use super::section::{Section, SectionId, SectionIdErr, SECTIONS};
}
