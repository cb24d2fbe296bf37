use yew::prelude::*;

use crate::effects::parallax::{ParallaxStyle, DEFAULT_SCROLL_RANGE};
use crate::scroll::use_scroll_offset;

#[derive(Properties, PartialEq)]
pub struct DepthTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(brand_shadow)]
    pub shadow_class: Classes,
    #[prop_or(DEFAULT_SCROLL_RANGE)]
    pub scroll_range: f64,
}

fn brand_shadow() -> Classes {
    classes!("text-brand")
}

/// Heading with a blurred duplicate behind it that drifts and fades on scroll.
#[function_component(DepthText)]
pub fn depth_text(props: &DepthTextProps) -> Html {
    let offset = use_scroll_offset();
    let style = ParallaxStyle::at(offset.y(), props.scroll_range);

    html! {
        <div class="depth-text">
            <span
                aria-hidden="true"
                class={classes!("depth-text__shadow", props.shadow_class.clone())}
                style={style.shadow_css()}
            >
                { props.text.clone() }
            </span>
            <span
                class={classes!("depth-text__main", props.class.clone())}
                style={style.text_css()}
            >
                { props.text.clone() }
            </span>
        </div>
    }
}
