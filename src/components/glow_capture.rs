use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::effects::glow::{
    glow_base_style, ContainerRect, PointerPosition, DEFAULT_GLOW_COLOR, DEFAULT_GLOW_SIZE,
};

/// Pointer listeners bound to one container. Dropping it unregisters both.
pub struct PointerSubscription {
    _move: EventListener,
    _leave: EventListener,
}

impl PointerSubscription {
    pub fn attach(element: &HtmlElement) -> Self {
        let position = Rc::new(Cell::new(PointerPosition::default()));

        let on_move = {
            let target = element.clone();
            let position = position.clone();
            EventListener::new(element, "pointermove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let r = target.get_bounding_client_rect();
                let rect = ContainerRect {
                    left: r.left(),
                    top: r.top(),
                    width: r.width(),
                    height: r.height(),
                };
                let next = position.get().moved(
                    client_coord(event, "clientX", event.client_x()),
                    client_coord(event, "clientY", event.client_y()),
                    rect,
                );
                position.set(next);
                apply(&target, &next);
            })
        };

        let on_leave = {
            let target = element.clone();
            EventListener::new(element, "pointerleave", move |_| {
                let next = position.get().left();
                position.set(next);
                apply(&target, &next);
            })
        };

        Self {
            _move: on_move,
            _leave: on_leave,
        }
    }
}

/// Pointer events carry sub-pixel `clientX`/`clientY`; the typed getters
/// round them to integers.
fn client_coord(event: &MouseEvent, key: &str, fallback: i32) -> f64 {
    Reflect::get(event, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback as f64)
}

fn apply(element: &HtmlElement, position: &PointerPosition) {
    let style = element.style();
    for (name, value) in position.style_vars() {
        if let Err(e) = style.set_property(name, &value) {
            log::warn!("Failed to set {}: {:?}", name, e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlowCaptureProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static(DEFAULT_GLOW_COLOR))]
    pub glow_color: AttrValue,
    #[prop_or(DEFAULT_GLOW_SIZE)]
    pub glow_size: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(GlowCapture)]
pub fn glow_capture(props: &GlowCaptureProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let subscription = node.cast::<HtmlElement>().map(|el| PointerSubscription::attach(&el));
                move || drop(subscription)
            },
            node,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("glow-capture", props.class.clone())}
            style={glow_base_style(&props.glow_color, props.glow_size)}
        >
            <div class="glow-overlay"></div>
            <div class="glow-content">
                { for props.children.iter() }
            </div>
        </div>
    }
}
