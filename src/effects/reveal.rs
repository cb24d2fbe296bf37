/// Easing shared by every entrance animation on the page.
pub const EASE_OUT: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

// Browsers report a crossing ratio a hair under the threshold.
const RATIO_SLACK: f64 = 1e-3;

/// Entrance animation of a block that appears when it scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    /// Starting offset, in pixels, the block travels from.
    pub from_x: f64,
    pub from_y: f64,
    pub duration: f64,
    pub delay: f64,
    /// Fraction of the block that must be visible before it animates.
    pub amount: f64,
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self {
            from_x: 0.0,
            from_y: 18.0,
            duration: 0.65,
            delay: 0.0,
            amount: 0.25,
        }
    }
}

impl RevealMotion {
    /// Side entrance used for list rows.
    pub fn slide(delay: f64) -> Self {
        Self {
            from_x: 18.0,
            from_y: 0.0,
            duration: 0.55,
            delay,
            amount: 0.35,
        }
    }

    pub fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn threshold(&self) -> f64 {
        self.amount.clamp(0.0, 1.0)
    }

    /// An observer entry counts only once enough of the block is on screen.
    /// The observer's first callback fires on `observe` for any overlap.
    pub fn is_seen(&self, intersecting: bool, ratio: f64) -> bool {
        intersecting && ratio + RATIO_SLACK >= self.threshold()
    }

    pub fn css(&self, visible: bool) -> String {
        let transition = format!(
            "transition: opacity {d}s {e} {l}s, transform {d}s {e} {l}s;",
            d = self.duration,
            e = EASE_OUT,
            l = self.delay.max(0.0),
        );
        if visible {
            format!("opacity: 1; transform: translate3d(0px, 0px, 0px); {}", transition)
        } else {
            format!(
                "opacity: 0; transform: translate3d({}px, {}px, 0px); {}",
                self.from_x, self.from_y, transition
            )
        }
    }
}
