pub mod use_parallax;
pub mod use_reveal;
pub mod use_scroll_tracker;
