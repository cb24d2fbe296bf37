use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::effects::reveal::RevealMotion;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub motion: RevealMotion,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays an entrance animation the first time the block scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let motion = props.motion;
        let threshold = motion.threshold();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                if let Some(element) = node.cast::<Element>() {
                    let on_seen = visible.clone();
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, watcher: IntersectionObserver| {
                            let seen = entries.iter().any(|entry| {
                                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                                motion.is_seen(entry.is_intersecting(), entry.intersection_ratio())
                            });
                            if seen {
                                on_seen.set(true);
                                watcher.disconnect();
                            }
                        },
                    );
                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some((obs, callback));
                        }
                        Err(_) => {
                            // Old browsers without IntersectionObserver just show the block.
                            log::warn!("IntersectionObserver unavailable, revealing immediately");
                            visible.set(true);
                        }
                    }
                }
                move || {
                    if let Some((obs, _callback)) = observer {
                        obs.disconnect();
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={props.motion.css(*visible)}>
            { for props.children.iter() }
        </div>
    }
}
