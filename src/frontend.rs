use crate::{
    effects::{
        FollowerTarget, PointerPosition, PointerTracker, ProgressTarget, ScrollProgressReporter,
    },
    navigation::{
        bounded_navigation_delay, DeferredNavigator, PathNavigator, ScheduledTask, Scheduler,
        Section,
    },
    pages,
};
use gloo::{events::EventListener, timers::callback::Timeout};
use std::{cell::RefCell, rc::Rc, time::Duration};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;
use yew_router::{
    history::{BrowserHistory, History},
    prelude::*,
};

const CURSOR_HOVER_CLASS: &str = "custom-cursor-hover";

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/framework")]
    Framework,
    #[at("/voice-tone")]
    VoiceTone,
    #[at("/logo")]
    Logo,
    #[at("/typography")]
    Typography,
    #[at("/iconology")]
    Iconology,
    #[at("/color")]
    Color,
    #[at("/imagery")]
    Imagery,
    #[at("/motion")]
    Motion,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::Home /> },
        Route::Framework => html! { <pages::Framework /> },
        Route::VoiceTone => html! { <pages::VoiceTone /> },
        Route::Logo => html! { <pages::Logo /> },
        Route::Typography => html! { <pages::Typography /> },
        Route::Iconology => html! { <pages::Iconology /> },
        Route::Color => html! { <pages::Color /> },
        Route::Imagery => html! { <pages::Imagery /> },
        Route::Motion => html! { <pages::Motion /> },
        Route::NotFound => html! { <pages::NotFound /> },
    }
}

struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            log::Level::Error => gloo::console::error!(line),
            log::Level::Warn => gloo::console::warn!(line),
            log::Level::Info => gloo::console::info!(line),
            log::Level::Debug | log::Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

struct CursorFollower(NodeRef);

impl FollowerTarget for CursorFollower {
    fn move_to(&self, position: PointerPosition) {
        let Some(element) = self.0.cast::<HtmlElement>() else {
            return;
        };

        let style = element.style();
        let _ = style.set_property("left", &format!("{}px", position.x));
        let _ = style.set_property("top", &format!("{}px", position.y));
    }

    fn set_emphasized(&self, emphasized: bool) {
        if let Some(element) = self.0.cast::<HtmlElement>() {
            let _ = element
                .class_list()
                .toggle_with_force(CURSOR_HOVER_CLASS, emphasized);
        }
    }
}

struct ProgressBar(NodeRef);

impl ProgressTarget for ProgressBar {
    fn paint(&self, background: &str) {
        if let Some(element) = self.0.cast::<HtmlElement>() {
            let _ = element.style().set_property("background", background);
        }
    }
}

fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let win = window()?;
    let scroll_top = win.scroll_y().ok()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(win.document()?.body()?.scroll_height());

    Some((scroll_top, document_height, viewport_height))
}

fn report_scroll(reporter: &RefCell<ScrollProgressReporter<ProgressBar>>) {
    if let Some((scroll_top, document_height, viewport_height)) = scroll_metrics() {
        reporter
            .borrow_mut()
            .scrolled(scroll_top, document_height, viewport_height);
    }
}

pub struct AmbientEffects {
    pub cursor: NodeRef,
    pub progress: NodeRef,
    pub on_enter: Callback<MouseEvent>,
    pub on_leave: Callback<MouseEvent>,
}

fn attach_window_listeners(
    tracker: Rc<RefCell<PointerTracker<CursorFollower>>>,
    reporter: Rc<RefCell<ScrollProgressReporter<ProgressBar>>>,
) -> Option<(EventListener, EventListener)> {
    let win = window()?;

    let on_move = EventListener::new(&win, "mousemove", move |event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            tracker
                .borrow_mut()
                .pointer_moved(f64::from(event.client_x()), f64::from(event.client_y()));
        }
    });

    let on_scroll = EventListener::new(&win, "scroll", move |_| {
        report_scroll(&reporter);
    });

    Some((on_move, on_scroll))
}

/// Listeners live exactly as long as the calling component.
#[hook]
pub fn use_ambient_effects() -> AmbientEffects {
    let cursor = use_node_ref();
    let progress = use_node_ref();

    let tracker = {
        let cursor = cursor.clone();
        use_mut_ref(move || PointerTracker::new(Some(CursorFollower(cursor))))
    };
    let reporter = {
        let progress = progress.clone();
        use_mut_ref(move || ScrollProgressReporter::new(Some(ProgressBar(progress))))
    };

    {
        let tracker = tracker.clone();
        let reporter = reporter.clone();
        use_effect_with((), move |_| {
            let listeners = attach_window_listeners(tracker, Rc::clone(&reporter));
            report_scroll(&reporter);

            move || drop(listeners)
        });
    }

    let on_enter = {
        let tracker = tracker.clone();
        Callback::from(move |_: MouseEvent| tracker.borrow_mut().pointer_entered())
    };

    let on_leave = Callback::from(move |_: MouseEvent| tracker.borrow_mut().pointer_left());

    AmbientEffects {
        cursor,
        progress,
        on_enter,
        on_leave,
    }
}

struct TimeoutScheduler;

impl ScheduledTask for Timeout {
    fn cancel(self) {
        let _ = Timeout::cancel(self);
    }
}

impl Scheduler for TimeoutScheduler {
    type Task = Timeout;

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

fn known_route(path: &str) -> Option<Route> {
    Route::recognize(path).filter(|route| *route != Route::NotFound)
}

// Pushes the path itself so an unknown target keeps its URL while `Switch`
// renders the not-found page.
struct RouterNavigator(BrowserHistory);

impl PathNavigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        if known_route(path).is_none() {
            log::warn!("no route for {path}");
        }
        self.0.push(path);
    }
}

type PageNavigator = DeferredNavigator<TimeoutScheduler, RouterNavigator>;

/// Returns the section currently animating out and a callback that arms a
/// delayed navigation to a section.
#[hook]
pub fn use_deferred_navigator(delay: Duration) -> (Option<Section>, Callback<Section>) {
    let delay = bounded_navigation_delay(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
    let active = use_state(|| None::<Section>);
    let deferred = use_mut_ref(|| None::<PageNavigator>);

    {
        let deferred = deferred.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(mut navigator) = deferred.borrow_mut().take() {
                    navigator.teardown();
                }
            }
        });
    }

    let select = {
        let active = active.clone();
        Callback::from(move |section: Section| {
            let mut slot = deferred.borrow_mut();
            if slot.is_none() {
                *slot = Some(DeferredNavigator::new(
                    TimeoutScheduler,
                    RouterNavigator(BrowserHistory::new()),
                    delay,
                ));
            }

            if let Some(navigator) = slot.as_mut() {
                navigator.select(section);
                log::debug!(
                    "{} navigation(s) pending",
                    navigator.pending_intents().len()
                );
                active.set(navigator.active());
            }
        })
    };

    ((*active).clone(), select)
}

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub image: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    let ambient = use_ambient_effects();

    html! {
        <>
            <div ref={ambient.cursor} class="custom-cursor" aria-hidden="true" />
            <div ref={ambient.progress} class="scroll-progress" aria-hidden="true" />
            <div class="page" onmouseenter={ambient.on_enter} onmouseleave={ambient.on_leave}>
                <header class="hero">
                    <img class="hero-media" src={props.image.clone()} alt="" />
                    <div class="hero-overlay">
                        <h1 class="hero-title enter-zoom">{props.title.clone()}</h1>
                        <p class="hero-subtitle enter-fade">{props.subtitle.clone()}</p>
                    </div>
                </header>
                <main id="content">
                    {props.children.clone()}
                </main>
                <nav class="back-home">
                    <Link<Route> to={Route::Home} classes={classes!("back-home-button")}>
                        <span aria-hidden="true">{"←"}</span>
                        {" Back to Home"}
                    </Link<Route>>
                </nav>
            </div>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn run() {
    init_logging();
    log::info!("mounting brand guidelines");

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
