pub const DEFAULT_GLOW_COLOR: &str = "rgba(91, 79, 228, 0.55)";
pub const DEFAULT_GLOW_SIZE: f64 = 260.0;

/// Bounding box of a glow container in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    /// Detached or collapsed elements report an empty rectangle.
    pub fn is_measurable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Pointer location relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl PointerPosition {
    pub fn moved(self, client_x: f64, client_y: f64, rect: ContainerRect) -> Self {
        if !rect.is_measurable() {
            return self;
        }
        Self {
            x: client_x - rect.left,
            y: client_y - rect.top,
            active: true,
        }
    }

    /// Keeps the last coordinates so the fade-out starts where the pointer left.
    pub fn left(self) -> Self {
        Self { active: false, ..self }
    }

    pub fn style_vars(&self) -> [(&'static str, String); 3] {
        [
            ("--glow-x", format!("{}px", self.x)),
            ("--glow-y", format!("{}px", self.y)),
            ("--glow-opacity", if self.active { "1" } else { "0" }.to_string()),
        ]
    }
}

/// Static custom properties of a glow container.
pub fn glow_base_style(color: &str, size: f64) -> String {
    format!("--glow-color: {}; --glow-size: {}px;", color, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: ContainerRect = ContainerRect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 80.0,
    };

    #[test]
    fn move_is_relative_to_container() {
        let pos = PointerPosition::default().moved(130.0, 90.0, RECT);
        assert_eq!(pos, PointerPosition { x: 30.0, y: 40.0, active: true });
    }

    #[test]
    fn leave_keeps_last_coordinates() {
        let pos = PointerPosition::default().moved(130.0, 90.0, RECT).left();
        assert_eq!(pos, PointerPosition { x: 30.0, y: 40.0, active: false });
        assert_eq!(pos.style_vars()[2].1, "0");
        assert_eq!(pos.style_vars()[0].1, "30px");
    }

    #[test]
    fn container_moving_between_events_is_tracked() {
        let first = PointerPosition::default().moved(130.0, 90.0, RECT);
        let scrolled = ContainerRect { top: -150.0, ..RECT };
        let second = first.moved(130.0, 90.0, scrolled);
        assert_eq!((second.x, second.y), (30.0, 240.0));
    }

    #[test]
    fn unmeasurable_container_ignores_the_event() {
        let start = PointerPosition::default().moved(130.0, 90.0, RECT);
        let collapsed = ContainerRect { width: 0.0, height: 0.0, ..RECT };
        assert_eq!(start.moved(500.0, 500.0, collapsed), start);
        let broken = ContainerRect { left: f64::NAN, ..RECT };
        assert_eq!(start.moved(500.0, 500.0, broken), start);
    }

    #[test]
    fn active_pointer_lights_the_overlay() {
        let vars = PointerPosition::default().moved(101.5, 50.0, RECT).style_vars();
        assert_eq!(vars[0], ("--glow-x", "1.5px".to_string()));
        assert_eq!(vars[1], ("--glow-y", "0px".to_string()));
        assert_eq!(vars[2], ("--glow-opacity", "1".to_string()));
    }

    #[test]
    fn base_style_names_color_and_size() {
        let style = glow_base_style(DEFAULT_GLOW_COLOR, 320.0);
        assert_eq!(style, "--glow-color: rgba(91, 79, 228, 0.55); --glow-size: 320px;");
    }
}
