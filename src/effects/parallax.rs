use super::interpolate::interpolate;

pub const DEFAULT_SCROLL_RANGE: f64 = 520.0;

/// Scroll offset of the middle opacity control point. Fixed, it does not
/// follow `scroll_range`.
pub const OPACITY_KNEE: f64 = 180.0;

const TEXT_LIFT: f64 = -180.0;
const SHADOW_LIFT: f64 = -38.0;
const SHADOW_DRIFT: f64 = 14.0;
const BLUR_PX: (f64, f64) = (10.0, 44.0);
const SCALE: (f64, f64) = (1.02, 1.30);
const OPACITY: [f64; 3] = [0.30, 0.22, 0.0];

pub const SHADOW_ORIGIN: &str = "50% 70%";

/// Style values of one heading and its blurred duplicate at a scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxStyle {
    pub text_y: f64,
    pub shadow_x: f64,
    pub shadow_y: f64,
    pub shadow_blur: f64,
    pub shadow_scale: f64,
    pub shadow_opacity: f64,
}

impl ParallaxStyle {
    pub fn at(scroll_y: f64, scroll_range: f64) -> Self {
        let domain = [0.0, scroll_range];
        let linear = |from: f64, to: f64| interpolate(scroll_y, &domain, &[from, to]);

        Self {
            text_y: linear(0.0, TEXT_LIFT),
            shadow_x: linear(0.0, SHADOW_DRIFT),
            shadow_y: linear(0.0, SHADOW_LIFT),
            shadow_blur: linear(BLUR_PX.0, BLUR_PX.1),
            shadow_scale: linear(SCALE.0, SCALE.1),
            shadow_opacity: interpolate(scroll_y, &[0.0, OPACITY_KNEE, scroll_range], &OPACITY),
        }
    }

    pub fn text_css(&self) -> String {
        format!("transform: translate3d(0px, {:.3}px, 0px);", self.text_y)
    }

    pub fn shadow_css(&self) -> String {
        format!(
            "transform: translate3d({:.3}px, {:.3}px, 0px) scale({:.4}); \
             transform-origin: {}; opacity: {:.4}; filter: blur({:.3}px);",
            self.shadow_x,
            self.shadow_y,
            self.shadow_scale,
            SHADOW_ORIGIN,
            self.shadow_opacity,
            self.shadow_blur,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rest_state_at_top_of_page() {
        let style = ParallaxStyle::at(0.0, DEFAULT_SCROLL_RANGE);
        assert_eq!(style.text_y, 0.0);
        assert_eq!(style.shadow_x, 0.0);
        assert_eq!(style.shadow_y, 0.0);
        assert!(close(style.shadow_blur, 10.0));
        assert!(close(style.shadow_scale, 1.02));
        assert!(close(style.shadow_opacity, 0.30));
    }

    #[test]
    fn end_state_at_scroll_range() {
        let style = ParallaxStyle::at(620.0, 620.0);
        assert_eq!(style.text_y, -180.0);
        assert!(close(style.shadow_y, -38.0));
        assert!(close(style.shadow_x, 14.0));
        assert!(close(style.shadow_blur, 44.0));
        assert!(close(style.shadow_scale, 1.30));
        assert!(close(style.shadow_opacity, 0.0));
    }

    #[test]
    fn text_lift_is_proportional_to_scroll() {
        for range in [300.0, 520.0, 1000.0] {
            for step in 0..=20 {
                let s = range * step as f64 / 20.0;
                let style = ParallaxStyle::at(s, range);
                assert!(close(style.text_y, -180.0 * s / range), "s={s} range={range}");
            }
        }
    }

    #[test]
    fn opacity_follows_three_control_points() {
        for range in [181.0, 520.0, 2000.0] {
            assert!(close(ParallaxStyle::at(0.0, range).shadow_opacity, 0.30));
            assert!(close(ParallaxStyle::at(OPACITY_KNEE, range).shadow_opacity, 0.22));
            assert!(close(ParallaxStyle::at(range, range).shadow_opacity, 0.0));
        }
        assert!(close(ParallaxStyle::at(90.0, 520.0).shadow_opacity, 0.26));
    }

    #[test]
    fn blur_never_decreases_while_scrolling_down() {
        let mut previous = f64::MIN;
        for s in 0..=DEFAULT_SCROLL_RANGE as i32 {
            let blur = ParallaxStyle::at(s as f64, DEFAULT_SCROLL_RANGE).shadow_blur;
            assert!(blur >= previous);
            assert!(blur > 0.0);
            previous = blur;
        }
    }

    #[test]
    fn offsets_beyond_the_range_do_not_extrapolate() {
        assert_eq!(
            ParallaxStyle::at(-60.0, DEFAULT_SCROLL_RANGE),
            ParallaxStyle::at(0.0, DEFAULT_SCROLL_RANGE)
        );
        assert_eq!(
            ParallaxStyle::at(9_000.0, DEFAULT_SCROLL_RANGE),
            ParallaxStyle::at(DEFAULT_SCROLL_RANGE, DEFAULT_SCROLL_RANGE)
        );
    }

    #[test]
    fn same_inputs_give_same_style() {
        let a = ParallaxStyle::at(233.5, 620.0);
        let b = ParallaxStyle::at(233.5, 620.0);
        assert_eq!(a, b);
        assert_eq!(a.shadow_css(), b.shadow_css());
    }

    #[test]
    fn shadow_css_carries_origin_and_blur() {
        let css = ParallaxStyle::at(0.0, DEFAULT_SCROLL_RANGE).shadow_css();
        assert!(css.contains("transform-origin: 50% 70%"));
        assert!(css.contains("filter: blur(10.000px)"));
        assert!(css.contains("opacity: 0.3000"));
    }
}
