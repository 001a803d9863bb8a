//! Reveal-on-scroll hook shared by every animated section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a browser `IntersectionObserver` around `state::reveal::RevealTracker`.
//! The returned signal flips to `true` once, the first time the element
//! crosses the threshold; the element is then unobserved. The observer is
//! disconnected when the owning component unmounts, revealed or not.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering and non-hydrate builds never observe, so content stays in
//! its hidden state until the WASM bundle hydrates.

use leptos::prelude::*;

/// Observe `node_ref` and return a signal that becomes `true` once.
pub fn use_reveal(node_ref: NodeRef<leptos::html::Div>, threshold: f64) -> ReadSignal<bool> {
    let revealed = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    observer::attach(node_ref, threshold, revealed);
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node_ref, threshold);
    }
    revealed.read_only()
}

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use crate::state::reveal::{RevealStep, RevealTracker};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

    /// Live registration. Dropping it disconnects the observer.
    struct Watch {
        observer: web_sys::IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl Drop for Watch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub(super) fn attach(node_ref: NodeRef<leptos::html::Div>, threshold: f64, revealed: RwSignal<bool>) {
        let tracker = StoredValue::new_local(RevealTracker::new(threshold));
        let watch = StoredValue::new_local(None::<Watch>);

        Effect::new(move || {
            let Some(element) = node_ref.get() else {
                return;
            };
            if !tracker.try_update_value(RevealTracker::observe).unwrap_or(false) {
                return;
            }

            let callback: EntriesCallback = Closure::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let step = tracker
                            .try_update_value(|t| t.on_intersection(entry.is_intersecting()))
                            .unwrap_or(RevealStep::Ignore);
                        if step == RevealStep::Reveal {
                            observer.unobserve(&entry.target());
                            revealed.set(true);
                        }
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(tracker.with_value(RevealTracker::threshold)));
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => {
                    observer.observe(&element);
                    watch.set_value(Some(Watch { observer, _callback: callback }));
                }
                Err(err) => {
                    // Without an observer the content would stay hidden forever.
                    log::warn!("intersection observer unavailable, revealing immediately: {err:?}");
                    tracker.update_value(|t| {
                        t.release();
                    });
                    revealed.set(true);
                }
            }
        });

        on_cleanup(move || {
            let live = tracker.try_update_value(RevealTracker::release).unwrap_or(false);
            if live {
                log::debug!("releasing unrevealed section observer");
            }
            watch.try_update_value(|w| {
                w.take();
            });
        });
    }
}
