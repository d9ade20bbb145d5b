//! Scroll reveal, navigation and decorative behavior for the-clay site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The
//! scroll/visibility core ([`coordinator`]) and every page collaborator are
//! plain Rust over small seams ([`host::Host`], [`host::FrameScheduler`],
//! [`theme::ThemeBackend`]), so they run and test natively. The `hydrate`
//! feature adds [`dom`], which binds those seams to `web-sys` and exposes the
//! wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`coordinator`] | Owns the reveal observer and the progress and nav sinks |
//! | [`reveal`] | One-shot reveal bookkeeping and stagger delays |
//! | [`progress`] | Scroll sample and progress percentage |
//! | [`nav`] | Nav bar hide/show with hysteresis |
//! | [`throttle`] | At most one pending frame per sink |
//! | [`host`] | Document and frame-scheduler seams |
//! | [`config`] | Typed, validated marker names and tunables |
//! | [`theme`] | Light/dark preference, persisted |
//! | [`transition`] | Page exit routing for link clicks |
//! | [`drawer`] | Mobile menu open/close state |
//! | [`pointer`] | Cursor glow, magnetic and tilt math |
//! | [`counter`] | Count-up parsing, easing and formatting |
//! | [`marquee`] | Marquee content doubling |
//! | [`greeting`] | Time-of-day greeting |
//! | [`easter`] | Konami code and logo click streak |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared timing and geometry constants |
//! | `dom` | Browser bindings (`hydrate` feature only) |

pub mod config;
pub mod consts;
pub mod coordinator;
pub mod counter;
pub mod drawer;
pub mod easter;
pub mod error;
pub mod greeting;
pub mod host;
pub mod marquee;
pub mod nav;
pub mod pointer;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod throttle;
pub mod transition;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
#[path = "fake_host_test.rs"]
pub(crate) mod fake_host;

#[cfg(feature = "hydrate")]
mod entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::dom::site::{SiteHandle, attach_site};
    use crate::dom::theme::{DomThemeStore, init_theme};
    use crate::dom::{document, listener};

    thread_local! {
        static SITE: RefCell<Option<SiteHandle>> = const { RefCell::new(None) };
    }

    fn attach(theme: &Rc<RefCell<DomThemeStore>>) {
        match attach_site(theme) {
            Ok(handle) => SITE.with(|slot| {
                if let Some(previous) = slot.borrow_mut().replace(handle) {
                    previous.detach();
                }
            }),
            Err(err) => log::error!("site attach failed: {err}"),
        }
    }

    /// Wasm entry point. Applies the theme right away and attaches the rest
    /// once the DOM is parsed.
    #[wasm_bindgen(start)]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("logger already installed");
        }

        let theme = match init_theme() {
            Ok(theme) => theme,
            Err(err) => {
                log::error!("theme init failed: {err}");
                return;
            }
        };

        let document = match document() {
            Ok(document) => document,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };
        if document.ready_state() == "loading" {
            let registered = listener::once(&document, "DOMContentLoaded", move |_| attach(&theme));
            if let Err(err) = registered {
                log::error!("DOMContentLoaded hook failed: {err}");
            }
        } else {
            attach(&theme);
        }
    }

    /// Remove every listener and observer the site attached.
    #[wasm_bindgen]
    pub fn detach() {
        SITE.with(|slot| {
            if let Some(handle) = slot.borrow_mut().take() {
                handle.detach();
            }
        });
    }
}
