pub mod icons;
pub mod navbar;
pub mod scroll_indicator;
