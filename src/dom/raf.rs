//! `requestAnimationFrame` scheduler.
//!
//! Each request wraps its callback in a one-shot closure that drops itself
//! after running. If the browser refuses the request the callback is handed
//! back untouched.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::host::{FrameCallback, FrameScheduler};

#[derive(Debug, Default, Clone, Copy)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<(), FrameCallback> {
        let Some(window) = web_sys::window() else {
            return Err(callback);
        };

        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(Some(callback)));
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let slot_for_cb = Rc::clone(&slot);
        let holder_for_cb = Rc::clone(&holder);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            let work = slot_for_cb.borrow_mut().take();
            if let Some(work) = work {
                work();
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => {
                *holder.borrow_mut() = Some(cb);
                Ok(())
            }
            Err(err) => {
                log::warn!("requestAnimationFrame failed: {err:?}");
                let work = slot.borrow_mut().take();
                match work {
                    Some(work) => Err(work),
                    None => Ok(()),
                }
            }
        }
    }
}
