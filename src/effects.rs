pub const PROGRESS_FILL_COLOR: &str = "#0061ff";
pub const PROGRESS_TRACK_COLOR: &str = "rgba(0, 97, 255, 0.2)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

pub trait FollowerTarget {
    fn move_to(&self, position: PointerPosition);

    fn set_emphasized(&self, emphasized: bool);
}

pub struct PointerTracker<T> {
    target: Option<T>,
    position: Option<PointerPosition>,
    emphasized: bool,
}

impl<T: FollowerTarget> PointerTracker<T> {
    pub fn new(target: Option<T>) -> Self {
        Self {
            target,
            position: None,
            emphasized: false,
        }
    }

    #[cfg(test)]
    pub fn position(&self) -> Option<PointerPosition> {
        self.position
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        let position = PointerPosition { x, y };
        self.position = Some(position);

        if let Some(target) = self.target.as_ref() {
            target.move_to(position);
        }
    }

    pub fn pointer_entered(&mut self) {
        self.set_emphasized(true);
    }

    pub fn pointer_left(&mut self) {
        self.set_emphasized(false);
    }

    fn set_emphasized(&mut self, emphasized: bool) {
        self.emphasized = emphasized;

        if let Some(target) = self.target.as_ref() {
            target.set_emphasized(emphasized);
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_top: f64,
    pub scrollable_height: f64,
    pub progress_percent: f64,
}

impl ScrollState {
    pub fn measure(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top: scroll_top.max(0.0),
            scrollable_height: (document_height - viewport_height).max(0.0),
            progress_percent: scroll_progress(scroll_top, document_height, viewport_height),
        }
    }
}

/// A page that cannot scroll reports 0.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable_height = document_height - viewport_height;
    if scrollable_height <= 0.0 || !scrollable_height.is_finite() {
        return 0.0;
    }

    let progress = scroll_top / scrollable_height * 100.0;
    if progress.is_nan() {
        return 0.0;
    }

    progress.clamp(0.0, 100.0)
}

pub fn progress_gradient(progress_percent: f64) -> String {
    format!(
        "linear-gradient(to bottom, {PROGRESS_FILL_COLOR} {progress_percent}%, {PROGRESS_TRACK_COLOR} {progress_percent}%)"
    )
}

pub trait ProgressTarget {
    fn paint(&self, background: &str);
}

pub struct ScrollProgressReporter<T> {
    target: Option<T>,
    last: ScrollState,
}

impl<T: ProgressTarget> ScrollProgressReporter<T> {
    pub fn new(target: Option<T>) -> Self {
        Self {
            target,
            last: ScrollState::default(),
        }
    }

    #[cfg(test)]
    pub fn last(&self) -> ScrollState {
        self.last
    }

    pub fn scrolled(
        &mut self,
        scroll_top: f64,
        document_height: f64,
        viewport_height: f64,
    ) -> ScrollState {
        let state = ScrollState::measure(scroll_top, document_height, viewport_height);
        self.last = state;

        if let Some(target) = self.target.as_ref() {
            target.paint(&progress_gradient(state.progress_percent));
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct RecordingFollower {
        moves: Rc<RefCell<Vec<PointerPosition>>>,
        emphasis: Rc<RefCell<Vec<bool>>>,
    }

    impl FollowerTarget for RecordingFollower {
        fn move_to(&self, position: PointerPosition) {
            self.moves.borrow_mut().push(position);
        }

        fn set_emphasized(&self, emphasized: bool) {
            self.emphasis.borrow_mut().push(emphasized);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingBar(Rc<RefCell<Vec<String>>>);

    impl ProgressTarget for RecordingBar {
        fn paint(&self, background: &str) {
            self.0.borrow_mut().push(background.to_string());
        }
    }

    #[test]
    fn progress_is_fraction_of_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 3_000.0, 1_000.0), 25.0);
        assert_eq!(scroll_progress(2_000.0, 3_000.0, 1_000.0), 100.0);
    }

    #[test]
    fn unscrollable_pages_report_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(120.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(2_400.0, 3_000.0, 1_000.0), 100.0);
    }

    #[test]
    fn progress_is_pure() {
        let first = scroll_progress(731.0, 4_210.0, 913.0);
        let second = scroll_progress(731.0, 4_210.0, 913.0);
        assert_eq!(first, second);
    }

    #[test]
    fn gradient_uses_progress_as_shared_stop() {
        assert_eq!(
            progress_gradient(25.0),
            "linear-gradient(to bottom, #0061ff 25%, rgba(0, 97, 255, 0.2) 25%)"
        );
    }

    #[test]
    fn reporter_paints_each_scroll() {
        let bar = RecordingBar::default();
        let mut reporter = ScrollProgressReporter::new(Some(bar.clone()));

        let state = reporter.scrolled(1_000.0, 3_000.0, 1_000.0);
        assert_eq!(state.progress_percent, 50.0);
        assert_eq!(state.scrollable_height, 2_000.0);
        reporter.scrolled(1_000.0, 3_000.0, 1_000.0);

        let painted = bar.0.borrow();
        assert_eq!(painted.len(), 2);
        assert_eq!(painted[0], painted[1]);
        assert_eq!(reporter.last(), state);
    }

    #[test]
    fn reporter_without_bar_still_tracks_state() {
        let mut reporter = ScrollProgressReporter::<RecordingBar>::new(None);
        let state = reporter.scrolled(250.0, 1_500.0, 1_000.0);
        assert_eq!(state.progress_percent, 50.0);
    }

    #[test]
    fn follower_tracks_pointer_verbatim() {
        let follower = RecordingFollower::default();
        let mut tracker = PointerTracker::new(Some(follower.clone()));

        tracker.pointer_moved(400.0, 250.0);
        tracker.pointer_moved(-12.0, 99_999.0);

        assert_eq!(
            *follower.moves.borrow(),
            vec![
                PointerPosition { x: 400.0, y: 250.0 },
                PointerPosition {
                    x: -12.0,
                    y: 99_999.0
                },
            ]
        );
        assert_eq!(
            tracker.position(),
            Some(PointerPosition {
                x: -12.0,
                y: 99_999.0
            })
        );
    }

    #[test]
    fn emphasis_follows_container_enter_and_leave() {
        let follower = RecordingFollower::default();
        let mut tracker = PointerTracker::new(Some(follower.clone()));

        tracker.pointer_entered();
        assert!(tracker.is_emphasized());
        tracker.pointer_left();
        assert!(!tracker.is_emphasized());

        assert_eq!(*follower.emphasis.borrow(), vec![true, false]);
    }

    #[test]
    fn missing_follower_is_a_no_op() {
        let mut tracker = PointerTracker::<RecordingFollower>::new(None);
        tracker.pointer_moved(1.0, 2.0);
        tracker.pointer_entered();
        assert!(tracker.is_emphasized());
    }
}
