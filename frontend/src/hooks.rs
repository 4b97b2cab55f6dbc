use web_sys::Element;
use yew::prelude::*;

use crate::config::NAV_LOOKAHEAD_PX;
use crate::interaction::active_section::{ActiveSectionTracker, ScrollListener};
use crate::interaction::layout::{DomLayout, SectionId};
use crate::interaction::reveal::RevealObserver;
use crate::interaction::rotator::{AutoAdvance, CarouselAction, CarouselState};

/// Returns a ref to attach to the observed element and whether it has been revealed.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let setter = revealed.setter();
        use_effect_with_deps(
            move |_| {
                let mut observer = RevealObserver::new(threshold);
                observer.start(node.cast::<Element>(), move || setter.set(true));
                move || observer.stop()
            },
            (),
        );
    }

    (node, *revealed)
}

pub fn reveal_class(revealed: bool) -> Classes {
    classes!("reveal", revealed.then_some("visible"))
}

/// Carousel state, advanced every `auto_advance_ms` when set.
#[hook]
pub fn use_carousel(len: usize, auto_advance_ms: Option<u32>) -> UseReducerHandle<CarouselState> {
    let carousel = use_reducer(move || CarouselState::new(len));

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |period: &Option<u32>| {
                let mut timer = (*period).map(AutoAdvance::new);
                if let Some(timer) = timer.as_mut() {
                    timer.start(move || carousel.dispatch(CarouselAction::Advance));
                }
                move || {
                    if let Some(mut timer) = timer {
                        timer.stop();
                    }
                }
            },
            auto_advance_ms,
        );
    }

    carousel
}

/// Section currently under the sticky header.
#[hook]
pub fn use_active_section(sections: Vec<SectionId>) -> SectionId {
    let initial = sections.first().copied().unwrap_or(SectionId::Home);
    let active = use_state_eq(move || initial);

    {
        let setter = active.setter();
        use_effect_with_deps(
            move |sections: &Vec<SectionId>| {
                let mut tracker = ActiveSectionTracker::new(sections.clone(), initial, NAV_LOOKAHEAD_PX);
                let mut listener = ScrollListener::default();
                listener.start(move || {
                    let Some(layout) = DomLayout::current() else {
                        return;
                    };
                    if let Some(section) = tracker.sample(&layout) {
                        setter.set(section);
                    }
                });
                move || listener.stop()
            },
            sections,
        );
    }

    *active
}
