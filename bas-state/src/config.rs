pub const NAV_THRESHOLD_PX: f64 = 50.0;
pub const PROBE_FRACTION: f64 = 0.5;
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Scroll depth past which the navigation bar turns opaque. Strictly greater than.
    pub nav_threshold_px: f64,
    /// Where the probe sits inside the viewport, 0.0 top and 1.0 bottom.
    pub probe_fraction: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            nav_threshold_px: NAV_THRESHOLD_PX,
            probe_fraction: PROBE_FRACTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub root_margin: String,
    pub threshold: Option<f64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: String::from(REVEAL_ROOT_MARGIN),
            threshold: None,
        }
    }
}
