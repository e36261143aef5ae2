use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Elements carrying one of these classes are revealed once, the first time
// they become sufficiently visible.
pub const REVEAL_SELECTOR: &str =
    ".scroll-fade-in, .scroll-slide-left, .scroll-slide-right, .scroll-scale-in";

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub(crate) fn should_reveal(is_intersecting: bool, already_revealed: bool) -> bool {
    is_intersecting && !already_revealed
}

#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            // Element -> "already revealed" flag, keyed by JS object identity.
            let revealed = js_sys::Map::new();

            let callback_map = revealed.clone();
            let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let element = entry.target();
                    let already = callback_map.get(element.as_ref()).as_bool().unwrap_or(false);
                    if should_reveal(entry.is_intersecting(), already) {
                        let classes = element.class_name();
                        if !classes.contains("animate") {
                            element.set_class_name(&format!("{} animate", classes));
                        }
                        callback_map.set(element.as_ref(), &JsValue::TRUE);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array)>);

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
            // Shrinking the bottom edge fires the reveal slightly before the
            // element reaches the true viewport edge.
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                    .unwrap();

            let document = web_sys::window().unwrap().document().unwrap();
            if let Ok(elements) = document.query_selector_all(REVEAL_SELECTOR) {
                for index in 0..elements.length() {
                    if let Some(node) = elements.item(index) {
                        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                            observer.observe(&element);
                            revealed.set(element.as_ref(), &JsValue::FALSE);
                        }
                    }
                }
            }

            move || {
                observer.disconnect();
                revealed.clear();
                drop(callback);
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_on_first_intersection() {
        assert!(should_reveal(true, false));
    }

    #[test]
    fn test_never_reveals_twice() {
        // Once marked revealed, later callbacks must leave the element alone.
        assert!(!should_reveal(true, true));
        assert!(!should_reveal(false, true));
    }

    #[test]
    fn test_ignores_elements_outside_the_viewport() {
        assert!(!should_reveal(false, false));
    }
}
