use std::rc::Rc;

use yew::Reducible;

/// Which catalog entry the detail overlay shows, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Select(usize),
    Close,
    /// Caller scrolls to the order panel; the overlay closes in the same step.
    OrderNow,
}

impl Selection {
    pub fn resolve<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.selected.and_then(|i| items.get(i))
    }

    pub fn apply(&mut self, action: SelectionAction) {
        self.selected = match action {
            SelectionAction::Select(index) => Some(index),
            SelectionAction::Close | SelectionAction::OrderNow => None,
        };
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ITEMS: [&str; 2] = ["60ml", "100ml"];

    #[test]
    fn second_selection_replaces_first() {
        let mut selection = Selection::default();
        selection.apply(SelectionAction::Select(0));
        assert_eq!(selection.resolve(&ITEMS), Some(&"60ml"));

        selection.apply(SelectionAction::Select(1));
        assert_eq!(selection.resolve(&ITEMS), Some(&"100ml"));
    }

    #[test]
    fn close_and_order_now_both_clear() {
        for exit in [SelectionAction::Close, SelectionAction::OrderNow] {
            let selection = Rc::new(Selection::default())
                .reduce(SelectionAction::Select(1))
                .reduce(exit);
            assert_eq!(selection.resolve(&ITEMS), None);
        }
    }

    #[test]
    fn stale_index_resolves_to_nothing() {
        let mut selection = Selection::default();
        selection.apply(SelectionAction::Select(5));
        assert_eq!(selection.resolve(&ITEMS), None);
    }
}
