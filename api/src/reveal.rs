// scroll-reveal policy and styling
//
// the observer itself lives in the webapp, this decides what an intersection change
// means for visibility and how a hidden or visible element is styled

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_DISTANCE_PX: f64 = 50.0;
pub const DEFAULT_DURATION_S: f64 = 0.7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    // stays visible once it has been seen
    Once,
    // hides again on leaving the viewport so it animates on every re-entry
    #[default]
    Repeat,
}

impl RevealMode {
    pub fn next(&self, visible: bool, intersecting: bool) -> bool {
        match self {
            RevealMode::Once => visible || intersecting,
            RevealMode::Repeat => intersecting,
        }
    }
}

// direction the element travels as it comes into view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub mode: RevealMode,
    pub direction: Direction,
    pub distance: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        RevealOptions {
            threshold: DEFAULT_THRESHOLD,
            mode: RevealMode::default(),
            direction: Direction::default(),
            distance: DEFAULT_DISTANCE_PX,
            duration: DEFAULT_DURATION_S,
            delay: 0.0,
        }
    }
}

impl RevealOptions {
    pub fn once() -> Self {
        RevealOptions {
            mode: RevealMode::Once,
            ..Default::default()
        }
    }

    pub fn direction(self, direction: Direction) -> Self {
        RevealOptions { direction, ..self }
    }

    pub fn delay(self, delay: f64) -> Self {
        RevealOptions { delay, ..self }
    }

    pub fn threshold(self, threshold: f64) -> Self {
        RevealOptions { threshold, ..self }
    }

    // intersection observers reject anything outside [0, 1]
    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }

    // offset while hidden, in px
    pub fn offset(&self, visible: bool) -> (f64, f64) {
        if visible {
            return (0.0, 0.0);
        }

        match self.direction {
            Direction::Up => (0.0, self.distance),
            Direction::Down => (0.0, -self.distance),
            Direction::Left => (self.distance, 0.0),
            Direction::Right => (-self.distance, 0.0),
        }
    }

    pub fn style(&self, visible: bool) -> String {
        let opacity = if visible { 1 } else { 0 };
        let (x, y) = self.offset(visible);
        let (duration, delay) = (self.duration, self.delay);

        format!(
            "opacity: {opacity}; transform: translate({x}px, {y}px); \
             transition: opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_stays_visible() {
        let mode = RevealMode::Once;

        assert!(!mode.next(false, false));
        assert!(mode.next(false, true));
        assert!(mode.next(true, false));
    }

    #[test]
    fn repeat_follows_the_viewport() {
        let mode = RevealMode::Repeat;

        assert!(mode.next(false, true));
        assert!(!mode.next(true, false));
        assert!(mode.next(true, true));
    }

    #[test]
    fn hidden_offset_opposes_travel() {
        let base = RevealOptions::default();

        assert_eq!(base.offset(false), (0.0, 50.0));
        assert_eq!(base.direction(Direction::Down).offset(false), (0.0, -50.0));
        assert_eq!(base.direction(Direction::Left).offset(false), (50.0, 0.0));
        assert_eq!(base.direction(Direction::Right).offset(false), (-50.0, 0.0));
        assert_eq!(base.direction(Direction::Right).offset(true), (0.0, 0.0));
    }

    #[test]
    fn style_reflects_visibility() {
        let options = RevealOptions::once().delay(0.2);

        assert_eq!(
            options.style(false),
            "opacity: 0; transform: translate(0px, 50px); \
             transition: opacity 0.7s ease-out 0.2s, transform 0.7s ease-out 0.2s;"
        );
        assert!(options.style(true).starts_with("opacity: 1; transform: translate(0px, 0px);"));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealOptions::default().threshold(1.5).clamped_threshold(), 1.0);
        assert_eq!(RevealOptions::default().threshold(-0.5).clamped_threshold(), 0.0);
        assert_eq!(
            RevealOptions::default().threshold(f64::NAN).clamped_threshold(),
            DEFAULT_THRESHOLD
        );
        assert_eq!(RevealOptions::default().clamped_threshold(), DEFAULT_THRESHOLD);
    }
}
