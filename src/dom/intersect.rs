//! Owned `IntersectionObserver`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::ClayError;
use crate::reveal::Intersection;

type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observer plus the closure it calls. Disconnects on drop.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Callback,
}

impl IntersectionWatch {
    /// Observe `targets`. `handler` receives each batch and the observer, so
    /// it can unobserve finished targets.
    pub fn new<F>(threshold: f64, root_margin: &str, targets: &[Element], mut handler: F) -> Result<Self, ClayError>
    where
        F: FnMut(Vec<Intersection<Element>>, &IntersectionObserver) + 'static,
    {
        let callback: Callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().map_or(None, Some))
                .map(|entry| Intersection { target: entry.target(), is_intersecting: entry.is_intersecting() })
                .collect();
            handler(batch, &observer);
        })
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
