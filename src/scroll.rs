use yew::prelude::*;
use yew_hooks::prelude::*;

/// Page-wide vertical scroll position, shared read-only through context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    /// Overscroll bounce and missing values read as the top of the page.
    pub fn new(y: f64) -> Self {
        if y.is_finite() {
            Self(y.max(0.0))
        } else {
            Self(0.0)
        }
    }

    pub fn y(&self) -> f64 {
        self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the only window scroll subscription and fans it out to consumers.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let (_, y) = use_window_scroll();
    let offset = ScrollOffset::new(y);

    html! {
        <ContextProvider<ScrollOffset> context={offset}>
            { for props.children.iter() }
        </ContextProvider<ScrollOffset>>
    }
}

#[hook]
pub fn use_scroll_offset() -> ScrollOffset {
    use_context::<ScrollOffset>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_never_negative() {
        assert_eq!(ScrollOffset::new(-42.0).y(), 0.0);
        assert_eq!(ScrollOffset::new(f64::NAN).y(), 0.0);
        assert_eq!(ScrollOffset::new(f64::INFINITY).y(), 0.0);
        assert_eq!(ScrollOffset::new(310.5).y(), 310.5);
    }
}
