use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::layout::{SectionId, SectionLayout};

/// The last section, in document order, whose top has been passed by
/// `scroll_y + lookahead`. Unmounted sections are skipped.
pub fn locate<L: SectionLayout>(layout: &L, sections: &[SectionId], lookahead: f64) -> Option<SectionId> {
    let marker = layout.scroll_y() + lookahead;
    sections
        .iter()
        .rev()
        .copied()
        .find(|&section| layout.offset_top(section).map_or(false, |top| top <= marker))
}

/// Highlighted nav entry. Above every section the previous value sticks.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionId>,
    lookahead: f64,
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(sections: Vec<SectionId>, initial: SectionId, lookahead: f64) -> Self {
        Self {
            sections,
            lookahead,
            active: initial,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Recomputes from the layout. Returns the new section only when it changed.
    pub fn sample<L: SectionLayout>(&mut self, layout: &L) -> Option<SectionId> {
        let found = locate(layout, &self.sections, self.lookahead)?;
        if found == self.active {
            return None;
        }
        self.active = found;
        Some(found)
    }
}

/// `scroll` listener on the window, removed on `stop` or drop.
#[derive(Default)]
pub struct ScrollListener {
    attached: Option<(Window, Closure<dyn FnMut()>)>,
}

impl ScrollListener {
    pub fn start<F>(&mut self, on_scroll: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        match window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => self.attached = Some((window, callback)),
            Err(e) => log::warn!("failed to attach scroll listener: {:?}", e),
        }
    }

    pub fn stop(&mut self) {
        if let Some((window, callback)) = self.attached.take() {
            if let Err(e) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                log::warn!("failed to detach scroll listener: {:?}", e);
            }
        }
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    const LOOKAHEAD: f64 = 150.0;

    struct FakeLayout {
        offsets: HashMap<SectionId, f64>,
        scroll_y: f64,
    }

    impl FakeLayout {
        fn page() -> Self {
            let offsets = [
                (SectionId::Home, 0.0),
                (SectionId::About, 800.0),
                (SectionId::Products, 1500.0),
                (SectionId::Testimonials, 2600.0),
                (SectionId::Order, 3300.0),
            ];
            Self {
                offsets: offsets.into_iter().collect(),
                scroll_y: 0.0,
            }
        }
    }

    impl SectionLayout for FakeLayout {
        fn offset_top(&self, section: SectionId) -> Option<f64> {
            self.offsets.get(&section).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }
    }

    fn all_sections() -> Vec<SectionId> {
        vec![
            SectionId::Home,
            SectionId::About,
            SectionId::Products,
            SectionId::Testimonials,
            SectionId::Order,
        ]
    }

    #[test]
    fn picks_last_passed_section() {
        let mut layout = FakeLayout::page();
        let sections = all_sections();

        layout.scroll_y = 0.0;
        assert_eq!(locate(&layout, &sections, LOOKAHEAD), Some(SectionId::Home));

        // 650 + 150 reaches the top of About exactly.
        layout.scroll_y = 650.0;
        assert_eq!(locate(&layout, &sections, LOOKAHEAD), Some(SectionId::About));

        layout.scroll_y = 649.0;
        assert_eq!(locate(&layout, &sections, LOOKAHEAD), Some(SectionId::Home));

        layout.scroll_y = 10_000.0;
        assert_eq!(locate(&layout, &sections, LOOKAHEAD), Some(SectionId::Order));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let mut layout = FakeLayout::page();
        layout.offsets.remove(&SectionId::Products);
        layout.scroll_y = 1_600.0;
        assert_eq!(locate(&layout, &all_sections(), LOOKAHEAD), Some(SectionId::About));
    }

    #[test]
    fn keeps_previous_section_above_everything() {
        let mut layout = FakeLayout::page();
        layout.offsets.insert(SectionId::Home, 400.0);
        let mut tracker = ActiveSectionTracker::new(all_sections(), SectionId::Home, LOOKAHEAD);

        layout.scroll_y = 900.0;
        assert_eq!(tracker.sample(&layout), Some(SectionId::About));

        layout.scroll_y = 0.0;
        assert_eq!(tracker.sample(&layout), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn reports_only_changes() {
        let mut layout = FakeLayout::page();
        let mut tracker = ActiveSectionTracker::new(all_sections(), SectionId::Home, LOOKAHEAD);

        layout.scroll_y = 10.0;
        assert_eq!(tracker.sample(&layout), None);
        layout.scroll_y = 1_400.0;
        assert_eq!(tracker.sample(&layout), Some(SectionId::Products));
        layout.scroll_y = 1_500.0;
        assert_eq!(tracker.sample(&layout), None);
    }

    #[test]
    fn downward_scroll_never_moves_backwards() {
        let mut layout = FakeLayout::page();
        let sections = all_sections();
        let position = |s: SectionId| sections.iter().position(|&x| x == s);

        let mut last = None;
        for y in (0..4_000).step_by(37) {
            layout.scroll_y = f64::from(y);
            let current = locate(&layout, &sections, LOOKAHEAD).and_then(position);
            assert!(current >= last, "scrollY {y}: {current:?} < {last:?}");
            last = current;
        }
        assert_eq!(last, Some(4));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::Event;
    use wasm_bindgen_test::*;

    use super::*;

    fn dispatch_scroll() {
        let window = web_sys::window().unwrap();
        window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    }

    fn counting_listener() -> (ScrollListener, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let mut listener = ScrollListener::default();
        {
            let count = count.clone();
            listener.start(move || count.set(count.get() + 1));
        }
        (listener, count)
    }

    #[wasm_bindgen_test]
    fn stop_detaches_from_window() {
        let (mut listener, count) = counting_listener();
        dispatch_scroll();
        assert_eq!(count.get(), 1);

        listener.stop();
        dispatch_scroll();
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    fn drop_detaches_from_window() {
        let (listener, count) = counting_listener();
        dispatch_scroll();
        drop(listener);
        dispatch_scroll();
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    fn restart_keeps_a_single_listener() {
        let count = Rc::new(Cell::new(0));
        let mut listener = ScrollListener::default();
        for _ in 0..2 {
            let count = count.clone();
            listener.start(move || count.set(count.get() + 1));
        }
        dispatch_scroll();
        assert_eq!(count.get(), 1);
    }
}
