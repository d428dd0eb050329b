use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

pub const DEFAULT_NAVIGATION_DELAY: Duration = Duration::from_millis(800);
pub const NAVIGATION_DELAY_BOUNDS_MS: (u64, u64) = (600, 1_000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    name: String,
    slug: String,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { name, slug }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for ch in lowered.chars() {
        if is_slug_whitespace(ch) {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
            continue;
        }

        in_whitespace = false;
        slug.push(ch);
    }

    slug
}

// Same set as a JS `\s`: Unicode White_Space without NEL, plus the BOM.
fn is_slug_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

pub fn bounded_navigation_delay(milliseconds: u64) -> Duration {
    let (min, max) = NAVIGATION_DELAY_BOUNDS_MS;
    Duration::from_millis(milliseconds.clamp(min, max))
}

/// Handle to a one-shot task. Cancelling a task that already ran is a no-op.
pub trait ScheduledTask {
    fn cancel(self);
}

pub trait Scheduler {
    type Task: ScheduledTask;

    fn now_ms(&self) -> f64;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Task;
}

pub trait PathNavigator {
    fn navigate(&self, path: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationIntent {
    pub target: Section,
    pub armed_at_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigatorState {
    Idle,
    Armed { active: Section },
    Navigated { target: Section },
}

struct NavigatorInner {
    state: NavigatorState,
    intents: Vec<NavigationIntent>,
    torn_down: bool,
}

/// A later selection changes what is rendered as active but does not stop an
/// earlier task from navigating to its own target.
pub struct DeferredNavigator<S: Scheduler, N> {
    scheduler: S,
    router: Rc<N>,
    delay: Duration,
    inner: Rc<RefCell<NavigatorInner>>,
    // One handle per selection, fired or not, until teardown. Grows by one per
    // click while the owning page is mounted.
    tasks: Vec<S::Task>,
}

impl<S, N> DeferredNavigator<S, N>
where
    S: Scheduler,
    N: PathNavigator + 'static,
{
    pub fn new(scheduler: S, router: N, delay: Duration) -> Self {
        Self {
            scheduler,
            router: Rc::new(router),
            delay,
            inner: Rc::new(RefCell::new(NavigatorInner {
                state: NavigatorState::Idle,
                intents: Vec::new(),
                torn_down: false,
            })),
            tasks: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> NavigatorState {
        self.inner.borrow().state.clone()
    }

    pub fn active(&self) -> Option<Section> {
        match &self.inner.borrow().state {
            NavigatorState::Armed { active } => Some(active.clone()),
            _ => None,
        }
    }

    pub fn pending_intents(&self) -> Vec<NavigationIntent> {
        self.inner.borrow().intents.clone()
    }

    pub fn select(&mut self, section: Section) {
        let intent = NavigationIntent {
            target: section.clone(),
            armed_at_ms: self.scheduler.now_ms(),
        };

        {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                log::debug!("ignoring selection of {} after teardown", section.name());
                return;
            }
            inner.state = NavigatorState::Armed {
                active: section.clone(),
            };
            inner.intents.push(intent.clone());
        }

        log::debug!(
            "armed navigation to {} ({} ms)",
            section.path(),
            self.delay.as_millis()
        );

        let weak: Weak<RefCell<NavigatorInner>> = Rc::downgrade(&self.inner);
        let router = Rc::clone(&self.router);
        let task = self.scheduler.schedule(
            self.delay,
            Box::new(move || fire(&weak, router.as_ref(), &intent)),
        );
        self.tasks.push(task);
    }

    /// Cancels every task this navigator ever scheduled, fired or not.
    pub fn teardown(&mut self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.torn_down = true;
            inner.intents.clear();
        }

        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }
}

impl<S: Scheduler, N> Drop for DeferredNavigator<S, N> {
    fn drop(&mut self) {
        self.inner.borrow_mut().torn_down = true;
        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }
}

fn fire<N: PathNavigator + ?Sized>(
    inner: &Weak<RefCell<NavigatorInner>>,
    router: &N,
    intent: &NavigationIntent,
) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    {
        let mut inner = inner.borrow_mut();
        if inner.torn_down {
            return;
        }

        let Some(index) = inner.intents.iter().position(|pending| pending == intent) else {
            return;
        };
        inner.intents.remove(index);
        inner.state = NavigatorState::Navigated {
            target: intent.target.clone(),
        };
    }

    let path = intent.target.path();
    log::info!("navigating to {path}");
    router.navigate(&path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct ManualClock {
        now_ms: Cell<f64>,
        queue: RefCell<Vec<(u64, Option<Box<dyn FnOnce()>>)>>,
        cancelled: Cell<usize>,
    }

    impl ManualClock {
        fn advance(&self, milliseconds: f64) {
            let target = self.now_ms.get() + milliseconds;
            self.now_ms.set(target);

            let due: Vec<Box<dyn FnOnce()>> = self
                .queue
                .borrow_mut()
                .iter_mut()
                .filter(|entry| (entry.0 as f64) <= target)
                .filter_map(|entry| entry.1.take())
                .collect();

            for task in due {
                task();
            }
        }
    }

    struct ManualScheduler(Rc<ManualClock>);

    struct ManualTask {
        clock: Rc<ManualClock>,
        index: usize,
    }

    impl ScheduledTask for ManualTask {
        fn cancel(self) {
            self.clock.cancelled.set(self.clock.cancelled.get() + 1);
            if let Some((_, task)) = self.clock.queue.borrow_mut().get_mut(self.index) {
                task.take();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn now_ms(&self) -> f64 {
            self.0.now_ms.get()
        }

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTask {
            let deadline = self.0.now_ms.get() as u64 + delay.as_millis() as u64;
            let mut queue = self.0.queue.borrow_mut();
            queue.push((deadline, Some(task)));
            ManualTask {
                clock: Rc::clone(&self.0),
                index: queue.len() - 1,
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingRouter(Rc<RefCell<Vec<String>>>);

    impl PathNavigator for RecordingRouter {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    fn navigator() -> (
        Rc<ManualClock>,
        RecordingRouter,
        DeferredNavigator<ManualScheduler, RecordingRouter>,
    ) {
        let clock = Rc::new(ManualClock::default());
        let router = RecordingRouter::default();
        let navigator = DeferredNavigator::new(
            ManualScheduler(Rc::clone(&clock)),
            router.clone(),
            DEFAULT_NAVIGATION_DELAY,
        );
        (clock, router, navigator)
    }

    #[test]
    fn slugs_are_lowercase_with_hyphenated_whitespace() {
        assert_eq!(slugify("Voice-tone"), "voice-tone");
        assert_eq!(slugify("Framework"), "framework");
        assert_eq!(slugify("Brand  Voice\tand Tone"), "brand-voice-and-tone");
        assert_eq!(Section::new("Logo").path(), "/logo");
    }

    #[test]
    fn slugs_keep_punctuation_and_edge_whitespace() {
        assert_eq!(slugify("Do's & Don'ts"), "do's-&-don'ts");
        assert_eq!(slugify(" Logo "), "-logo-");
        assert_eq!(Section::new("").path(), "/");
    }

    #[test]
    fn slugs_lowercase_the_whole_name_and_split_on_any_js_whitespace() {
        assert_eq!(slugify("ΟΔΟΣ"), "ΟΔΟΣ".to_lowercase());
        assert_eq!(slugify("ΟΔΟΣ"), "οδος");
        assert_eq!(slugify("Voice\u{FEFF}Tone"), "voice-tone");
        assert_eq!(slugify("Voice\u{00A0}\u{3000}Tone"), "voice-tone");
        assert_eq!(slugify("Voice\u{85}Tone"), "voice\u{85}tone");
    }

    #[test]
    fn selecting_arms_then_navigates_once_after_delay() {
        let (clock, router, mut navigator) = navigator();
        assert_eq!(navigator.state(), NavigatorState::Idle);

        navigator.select(Section::new("Logo"));
        assert_eq!(navigator.active(), Some(Section::new("Logo")));

        clock.advance(799.0);
        assert!(router.0.borrow().is_empty());

        clock.advance(1.0);
        assert_eq!(*router.0.borrow(), vec!["/logo".to_string()]);
        assert_eq!(
            navigator.state(),
            NavigatorState::Navigated {
                target: Section::new("Logo")
            }
        );
        assert!(navigator.pending_intents().is_empty());

        clock.advance(5_000.0);
        assert_eq!(router.0.borrow().len(), 1);
    }

    #[test]
    fn teardown_before_delay_prevents_navigation() {
        let (clock, router, mut navigator) = navigator();

        navigator.select(Section::new("Color"));
        clock.advance(100.0);
        navigator.teardown();
        clock.advance(2_000.0);

        assert!(router.0.borrow().is_empty());
        assert_eq!(clock.cancelled.get(), 1);
    }

    #[test]
    fn teardown_cancels_tasks_that_already_fired() {
        let (clock, router, mut navigator) = navigator();

        navigator.select(Section::new("Motion"));
        clock.advance(800.0);
        navigator.teardown();

        assert_eq!(router.0.borrow().len(), 1);
        assert_eq!(clock.cancelled.get(), 1);
    }

    #[test]
    fn every_selection_keeps_a_handle_until_teardown() {
        let (clock, router, mut navigator) = navigator();

        navigator.select(Section::new("Logo"));
        clock.advance(800.0);
        navigator.select(Section::new("Color"));
        clock.advance(800.0);
        navigator.select(Section::new("Motion"));
        assert_eq!(navigator.tasks.len(), 3);

        navigator.teardown();
        clock.advance(1_000.0);

        assert!(navigator.tasks.is_empty());
        assert_eq!(clock.cancelled.get(), 3);
        assert_eq!(
            *router.0.borrow(),
            vec!["/logo".to_string(), "/color".to_string()]
        );
    }

    #[test]
    fn dropping_the_navigator_cancels_pending_tasks() {
        let (clock, router, mut navigator) = navigator();

        navigator.select(Section::new("Imagery"));
        drop(navigator);
        clock.advance(1_000.0);

        assert!(router.0.borrow().is_empty());
        assert_eq!(clock.cancelled.get(), 1);
    }

    #[test]
    fn reselection_keeps_earlier_timer_for_its_own_target() {
        let (clock, router, mut navigator) = navigator();

        navigator.select(Section::new("Logo"));
        clock.advance(300.0);
        navigator.select(Section::new("Typography"));
        assert_eq!(navigator.active(), Some(Section::new("Typography")));
        assert_eq!(navigator.pending_intents().len(), 2);

        clock.advance(500.0);
        assert_eq!(*router.0.borrow(), vec!["/logo".to_string()]);

        clock.advance(300.0);
        assert_eq!(
            *router.0.borrow(),
            vec!["/logo".to_string(), "/typography".to_string()]
        );
    }

    #[test]
    fn intents_record_when_they_were_armed() {
        let (clock, _router, mut navigator) = navigator();

        clock.advance(42.0);
        navigator.select(Section::new("Voice-tone"));

        let intents = navigator.pending_intents();
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].target.slug(), "voice-tone");
        assert_eq!(intents[0].armed_at_ms, 42.0);
    }

    #[test]
    fn selections_after_teardown_are_ignored() {
        let (clock, router, mut navigator) = navigator();

        navigator.teardown();
        navigator.select(Section::new("Framework"));
        clock.advance(1_000.0);

        assert!(router.0.borrow().is_empty());
        assert_eq!(navigator.state(), NavigatorState::Idle);
    }

    #[test]
    fn delays_are_kept_within_tuned_range() {
        assert_eq!(bounded_navigation_delay(100), Duration::from_millis(600));
        assert_eq!(bounded_navigation_delay(800), DEFAULT_NAVIGATION_DELAY);
        assert_eq!(bounded_navigation_delay(5_000), Duration::from_millis(1_000));
    }
}
