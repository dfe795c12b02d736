//! Animation parameters.
//!
//! Nothing here runs a frame loop. A [`Motion`] renders to inline CSS for
//! its initial or settled pose plus a `transition`, and the browser does the
//! interpolation. Scroll-linked values ([`Parallax`]) are recomputed on
//! scroll and written without a transition.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    EaseOut,
    /// Slight overshoot, stands in for a spring.
    Spring,
}

impl Display for Ease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ease::EaseOut => "ease-out",
            Ease::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: Ease,
}

impl Transition {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            ease: Ease::EaseOut,
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// `base + index * step`, the per-element stagger.
    pub fn stagger(mut self, base_ms: u32, step_ms: u32, index: usize) -> Self {
        self.delay_ms = stagger(base_ms, step_ms, index);
        self
    }

    pub fn css(&self) -> String {
        let part = |property: &str| {
            format!(
                "{} {}ms {} {}ms",
                property, self.duration_ms, self.ease, self.delay_ms
            )
        };
        format!("transition: {}, {};", part("opacity"), part("transform"))
    }
}

pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms.saturating_add(step_ms.saturating_mul(index as u32))
}

/// Visual offsets. `None` leaves the property alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rotate_x: Option<f64>,
    pub scale: Option<f64>,
}

impl Pose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn rotate_x(mut self, deg: f64) -> Self {
        self.rotate_x = Some(deg);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Same properties at their resting values.
    pub fn settled(&self) -> Pose {
        Pose {
            opacity: self.opacity.map(|_| 1.0),
            x: self.x.map(|_| 0.0),
            y: self.y.map(|_| 0.0),
            rotate_x: self.rotate_x.map(|_| 0.0),
            scale: self.scale.map(|_| 1.0),
        }
    }

    pub fn transform(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({}px, {}px, 0)",
                num(self.x.unwrap_or(0.0)),
                num(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(deg) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", num(deg)));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({})", num(scale)));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.opacity {
            css += &format!("opacity: {};", num(opacity));
        }
        if let Some(transform) = self.transform() {
            if !css.is_empty() {
                css.push(' ');
            }
            css += &format!("transform: {};", transform);
        }
        css
    }
}

fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        String::from("0")
    } else {
        rounded.to_string()
    }
}

/// Initial pose plus the transition that settles it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    pub initial: Pose,
    pub transition: Transition,
}

impl Motion {
    pub fn new(initial: Pose, transition: Transition) -> Self {
        Self {
            initial,
            transition,
        }
    }

    pub fn fade_up(distance: f64, duration_ms: u32, delay_ms: u32) -> Self {
        Self::new(
            Pose::new().opacity(0.0).y(distance),
            Transition::new(duration_ms).delay(delay_ms),
        )
    }

    pub fn fade_x(distance: f64, duration_ms: u32, delay_ms: u32) -> Self {
        Self::new(
            Pose::new().opacity(0.0).x(distance),
            Transition::new(duration_ms).delay(delay_ms),
        )
    }

    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed {
            self.initial.settled()
        } else {
            self.initial
        }
    }

    pub fn style(&self, revealed: bool) -> String {
        let pose = self.pose(revealed).css();
        let transition = self.transition.css();
        if pose.is_empty() {
            transition
        } else {
            format!("{} {}", pose, transition)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

impl Edge {
    pub fn fraction(&self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::End => 1.0,
        }
    }
}

/// "`target` edge of the element meets `container` edge of the viewport".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOffset {
    pub target: Edge,
    pub container: Edge,
}

impl ScrollOffset {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    /// From the element's top at the viewport top until its bottom leaves.
    pub const LEAVING: ScrollRange = ScrollRange {
        start: ScrollOffset::new(Edge::Start, Edge::Start),
        end: ScrollOffset::new(Edge::End, Edge::Start),
    };

    /// From the element's top entering at the bottom until its bottom leaves at the top.
    pub const PASSING: ScrollRange = ScrollRange {
        start: ScrollOffset::new(Edge::Start, Edge::End),
        end: ScrollOffset::new(Edge::End, Edge::Start),
    };

    /// `rect_top` is the element's top relative to the viewport, as
    /// `getBoundingClientRect` reports it. Clamped to `[0, 1]`.
    pub fn progress(&self, rect_top: f64, height: f64, viewport_height: f64) -> f64 {
        let distance = |offset: &ScrollOffset| {
            rect_top + offset.target.fraction() * height
                - offset.container.fraction() * viewport_height
        };
        let start = distance(&self.start);
        let span = start - distance(&self.end);
        if span.abs() < f64::EPSILON {
            return 0.0;
        }
        (start / span).clamp(0.0, 1.0)
    }
}

/// Clamped piecewise-linear mapping of `value` from `input` to `output`.
pub fn interpolate(input: &[f64], output: &[f64], value: f64) -> f64 {
    let len = input.len().min(output.len());
    if len == 0 {
        return 0.0;
    }
    if value <= input[0] {
        return output[0];
    }
    if value >= input[len - 1] {
        return output[len - 1];
    }
    for i in 0..len - 1 {
        let (from, to) = (input[i], input[i + 1]);
        if value >= from && value <= to {
            let width = to - from;
            if width <= 0.0 {
                return output[i + 1];
            }
            let t = (value - from) / width;
            return output[i] + (output[i + 1] - output[i]) * t;
        }
    }
    output[len - 1]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub input: &'static [f64],
    pub output: &'static [f64],
}

impl Track {
    pub fn at(&self, progress: f64) -> f64 {
        interpolate(self.input, self.output, progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub range: ScrollRange,
    pub x: Option<Track>,
    pub y: Option<Track>,
    pub opacity: Option<Track>,
    pub scale: Option<Track>,
}

impl Parallax {
    pub const HERO: Parallax = Parallax {
        range: ScrollRange::LEAVING,
        x: None,
        y: Some(Track {
            input: &[0.0, 1.0],
            output: &[0.0, 300.0],
        }),
        opacity: Some(Track {
            input: &[0.0, 0.5],
            output: &[1.0, 0.0],
        }),
        scale: Some(Track {
            input: &[0.0, 0.5],
            output: &[1.0, 0.8],
        }),
    };

    pub const ABOUT: Parallax = Parallax {
        range: ScrollRange::PASSING,
        x: None,
        y: Some(Track {
            input: &[0.0, 1.0],
            output: &[100.0, -100.0],
        }),
        opacity: Some(Track {
            input: &[0.0, 0.3, 0.7, 1.0],
            output: &[0.0, 1.0, 1.0, 0.0],
        }),
        scale: None,
    };

    pub const BITART: Parallax = Parallax {
        range: ScrollRange::PASSING,
        x: Some(Track {
            input: &[0.0, 1.0],
            output: &[-100.0, 100.0],
        }),
        y: None,
        opacity: None,
        scale: None,
    };

    pub fn pose_at(&self, progress: f64) -> Pose {
        Pose {
            opacity: self.opacity.map(|t| t.at(progress)),
            x: self.x.map(|t| t.at(progress)),
            y: self.y.map(|t| t.at(progress)),
            rotate_x: None,
            scale: self.scale.map(|t| t.at(progress)),
        }
    }

    pub fn style(&self, rect_top: f64, height: f64, viewport_height: f64) -> String {
        let progress = self.range.progress(rect_top, height, viewport_height);
        self.pose_at(progress).css()
    }
}

/// One animated character of a split headline.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub is_space: bool,
    pub motion: Motion,
}

pub const NBSP: char = '\u{00A0}';

/// Splits `line` into per-character motions staggered by `step_ms`.
/// Spaces become non-breaking so they keep their width inside inline-blocks.
pub fn split_glyphs(line: &str, base_ms: u32, step_ms: u32) -> Vec<Glyph> {
    line.chars()
        .enumerate()
        .map(|(index, c)| {
            let is_space = c == ' ';
            Glyph {
                text: if is_space { NBSP.to_string() } else { c.to_string() },
                is_space,
                motion: Motion::new(
                    Pose::new().opacity(0.0).y(50.0),
                    Transition::new(500)
                        .stagger(base_ms, step_ms, index)
                        .ease(Ease::Spring),
                ),
            }
        })
        .collect()
}

/// Coalesces scroll events into at most one recompute per animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller has to schedule a frame; false while one is
    /// already pending.
    pub fn request(&mut self) -> bool {
        let schedule = !self.pending;
        self.pending = true;
        schedule
    }

    /// Called from the frame callback before recomputing.
    pub fn run(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pose_css() {
        let pose = Pose::new().opacity(0.0).y(50.0).rotate_x(10.0);
        assert_eq!(
            pose.css(),
            "opacity: 0; transform: translate3d(0px, 50px, 0) rotateX(10deg);"
        );
        assert_eq!(
            pose.settled().css(),
            "opacity: 1; transform: translate3d(0px, 0px, 0) rotateX(0deg);"
        );
        assert_eq!(Pose::new().css(), "");
        assert_eq!(Pose::new().scale(0.8).css(), "transform: scale(0.8);");
    }

    #[test]
    fn settled_keeps_only_set_properties() {
        let pose = Pose::new().x(-100.0);
        assert_eq!(pose.settled(), Pose::new().x(0.0));
    }

    #[test]
    fn motion_style_switches_pose_keeps_transition() {
        let motion = Motion::fade_up(50.0, 800, 200);
        assert_eq!(
            motion.style(false),
            "opacity: 0; transform: translate3d(0px, 50px, 0); \
             transition: opacity 800ms ease-out 200ms, transform 800ms ease-out 200ms;"
        );
        assert!(motion.style(true).starts_with("opacity: 1;"));
        assert!(motion.style(true).ends_with(&motion.transition.css()));
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger(300, 50, 0), 300);
        assert_eq!(stagger(300, 50, 4), 500);
        assert_eq!(stagger(1200, 100, 5), 1700);
        assert_eq!(Transition::new(600).stagger(0, 100, 3).delay_ms, 300);
    }

    #[test]
    fn progress_leaving() {
        let range = ScrollRange::LEAVING;
        assert!(close(range.progress(0.0, 1000.0, 800.0), 0.0));
        assert!(close(range.progress(-500.0, 1000.0, 800.0), 0.5));
        assert!(close(range.progress(-1000.0, 1000.0, 800.0), 1.0));
        assert!(close(range.progress(200.0, 1000.0, 800.0), 0.0));
        assert!(close(range.progress(-3000.0, 1000.0, 800.0), 1.0));
    }

    #[test]
    fn progress_passing() {
        let range = ScrollRange::PASSING;
        assert!(close(range.progress(800.0, 400.0, 800.0), 0.0));
        assert!(close(range.progress(200.0, 400.0, 800.0), 0.5));
        assert!(close(range.progress(-400.0, 400.0, 800.0), 1.0));
    }

    #[test]
    fn progress_degenerate() {
        let range = ScrollRange {
            start: ScrollOffset::new(Edge::Start, Edge::Start),
            end: ScrollOffset::new(Edge::Start, Edge::Start),
        };
        assert_eq!(range.progress(10.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn interpolate_clamps_and_segments() {
        let input = [0.0, 0.3, 0.7, 1.0];
        let output = [0.0, 1.0, 1.0, 0.0];
        assert!(close(interpolate(&input, &output, -1.0), 0.0));
        assert!(close(interpolate(&input, &output, 0.15), 0.5));
        assert!(close(interpolate(&input, &output, 0.5), 1.0));
        assert!(close(interpolate(&input, &output, 0.85), 0.5));
        assert!(close(interpolate(&input, &output, 2.0), 0.0));

        assert!(close(interpolate(&[0.0, 0.5], &[1.0, 0.8], 0.25), 0.9));
        assert!(close(interpolate(&[0.0, 0.5], &[1.0, 0.8], 0.9), 0.8));
        assert_eq!(interpolate(&[], &[], 0.3), 0.0);
    }

    #[test]
    fn hero_parallax() {
        let top = Parallax::HERO.pose_at(0.0);
        assert_eq!(top.css(), "opacity: 1; transform: translate3d(0px, 0px, 0) scale(1);");

        let half = Parallax::HERO.pose_at(0.5);
        assert!(close(half.y.unwrap_or_default(), 150.0));
        assert!(close(half.opacity.unwrap_or_default(), 0.0));
        assert!(close(half.scale.unwrap_or_default(), 0.8));
    }

    #[test]
    fn bitart_parallax_slides() {
        assert_eq!(
            Parallax::BITART.style(800.0, 400.0, 800.0),
            "transform: translate3d(-100px, 0px, 0);"
        );
        assert_eq!(
            Parallax::BITART.style(200.0, 400.0, 800.0),
            "transform: translate3d(0px, 0px, 0);"
        );
    }

    #[test]
    fn glyphs() {
        let glyphs = split_glyphs("ART BELONGS", 300, 50);
        assert_eq!(glyphs.len(), 11);
        assert_eq!(glyphs[0].text, "A");
        assert_eq!(glyphs[0].motion.transition.delay_ms, 300);
        assert!(glyphs[3].is_space);
        assert_eq!(glyphs[3].text, "\u{00A0}");
        assert_eq!(glyphs[10].motion.transition.delay_ms, 800);
        assert_eq!(glyphs[10].motion.transition.ease, Ease::Spring);
    }

    #[test]
    fn frame_gate_coalesces_bursts() {
        let mut gate = FrameGate::default();
        assert!(!gate.is_pending());

        assert!(gate.request());
        for _ in 0..10 {
            assert!(!gate.request());
        }
        assert!(gate.is_pending());

        gate.run();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }
}
