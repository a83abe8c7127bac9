use std::rc::Rc;

use yew::Reducible;

/// Slide position for the landing hero. Auto-advance stops for good the first
/// time the visitor navigates by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
    pub manual: bool,
}

pub enum CarouselAction {
    Tick,
    Next,
    Prev,
    GoTo(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            manual: false,
        }
    }

    pub fn apply(&mut self, action: CarouselAction) {
        if self.len == 0 {
            return;
        }
        match action {
            CarouselAction::Tick => {
                if !self.manual {
                    self.index = (self.index + 1) % self.len;
                }
            }
            CarouselAction::Next => {
                self.manual = true;
                self.index = (self.index + 1) % self.len;
            }
            CarouselAction::Prev => {
                self.manual = true;
                self.index = (self.index + self.len - 1) % self.len;
            }
            CarouselAction::GoTo(i) => {
                self.manual = true;
                self.index = i.min(self.len - 1);
            }
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_wraps_around() {
        let mut state = CarouselState::new(4);
        for expected in [1, 2, 3, 0, 1] {
            state.apply(CarouselAction::Tick);
            assert_eq!(state.index, expected);
        }
        assert!(!state.manual);
    }

    #[test]
    fn test_next_stops_auto_advance() {
        let mut state = CarouselState::new(4);
        state.apply(CarouselAction::Next);
        assert_eq!(state.index, 1);
        assert!(state.manual);

        for _ in 0..10 {
            state.apply(CarouselAction::Tick);
        }
        assert_eq!(state.index, 1);
    }

    #[test]
    fn test_prev_wraps_backwards() {
        let mut state = CarouselState::new(4);
        state.apply(CarouselAction::Prev);
        assert_eq!(state.index, 3);
        assert!(state.manual);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = CarouselState::new(4);
        state.apply(CarouselAction::GoTo(2));
        assert_eq!(state.index, 2);
        state.apply(CarouselAction::GoTo(9));
        assert_eq!(state.index, 3);
        assert!(state.manual);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut state = CarouselState::new(0);
        state.apply(CarouselAction::Next);
        state.apply(CarouselAction::Tick);
        assert_eq!(state, CarouselState::new(0));
    }

    #[test]
    fn test_reduce_keeps_rc_when_unchanged() {
        let mut manual = CarouselState::new(3);
        manual.apply(CarouselAction::GoTo(1));
        let state = Rc::new(manual);
        let after = state.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&state, &after));
    }
}
