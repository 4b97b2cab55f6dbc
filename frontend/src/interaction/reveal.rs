use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-way visibility latch.
///
/// Flips once an intersecting entry's visible fraction meets or exceeds the
/// threshold. Entries that are not intersecting never count, so a threshold of
/// 0 still waits for the element to touch the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one observer entry. Returns true only on the call that flips the latch.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> bool {
        if self.revealed {
            return false;
        }
        if intersecting && ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element and fires once when it scrolls into view.
pub struct RevealObserver {
    threshold: f64,
    observer: Option<IntersectionObserver>,
    callback: Option<EntriesCallback>,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observer: None,
            callback: None,
        }
    }

    /// Starts observing `target`. A missing target leaves the observer idle.
    pub fn start<F>(&mut self, target: Option<Element>, mut on_reveal: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        let Some(target) = target else {
            log::debug!("reveal target not mounted, nothing to observe");
            return;
        };

        let mut state = RevealState::new(self.threshold);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            if state.is_revealed() {
                return;
            }
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if state.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.disconnect();
                    on_reveal();
                    break;
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.threshold));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&target);
                self.observer = Some(observer);
                self.callback = Some(callback);
            }
            Err(e) => log::warn!("IntersectionObserver unavailable: {:?}", e),
        }
    }

    pub fn stop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut state = RevealState::new(0.2);
        assert!(!state.observe(false, 0.0));
        assert!(!state.observe(true, 0.1));
        assert!(!state.observe(true, 0.1995));
        assert!(!state.is_revealed());
    }

    #[test]
    fn flips_exactly_once() {
        let mut state = RevealState::new(0.1);
        assert!(state.observe(true, 0.35));
        assert!(state.is_revealed());

        // Scrolling away and back never re-triggers or hides it.
        assert!(!state.observe(false, 0.0));
        assert!(!state.observe(true, 1.0));
        assert!(state.is_revealed());
    }

    #[test]
    fn ratio_equal_to_threshold_reveals() {
        let mut state = RevealState::new(0.1);
        assert!(state.observe(true, 0.1));
    }

    #[test]
    fn zero_threshold_reveals_on_first_intersection() {
        let mut state = RevealState::new(0.0);
        assert!(!state.observe(false, 0.0));
        assert!(state.observe(true, 0.0));
    }

    #[test]
    fn threshold_is_clamped() {
        let mut state = RevealState::new(4.0);
        assert!(!state.observe(true, 0.9));
        assert!(state.observe(true, 1.0));

        let mut state = RevealState::new(-1.0);
        assert!(!state.observe(false, 0.0));
        assert!(state.observe(true, 0.01));
    }
}
