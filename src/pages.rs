use crate::{
    content::{
        composition_asset, home_sections, section_accent, stagger_style, ANIMATION_TYPES,
        BRAND_ATTRIBUTES, COLOR_HERO, COLOR_PALETTE, COMPOSITION_EXAMPLES, FONT_PAIRINGS,
        FRAMEWORK_HERO, GRID_SPANS, HOME_TILE_LABEL, ICONOLOGY_HERO, ICON_CATEGORIES,
        ICON_SIZES_PX, IMAGERY_DONTS, IMAGERY_DOS, IMAGERY_HERO, IMAGE_STYLES, LOGO_BACKGROUNDS,
        LOGO_HERO, LOGO_INCORRECT_USAGE, LOGO_VARIATIONS, MOTION_HERO, MOTION_PRINCIPLES,
        MOTION_TIMINGS, TYPE_SCALE, TYPOGRAPHY_HERO, VOICE_PRINCIPLES, VOICE_TONE_HERO,
    },
    frontend::{prefers_reduced_motion, use_deferred_navigator, PageShell, Route},
    navigation::{Section, DEFAULT_NAVIGATION_DELAY},
};
use gloo::timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

const SPLASH_DURATION_MS: u32 = 6_500;
const SPLASH_PARTICLES: usize = 20;
const CARD_STAGGER_MS: u32 = 100;

#[derive(Clone, PartialEq)]
struct Particle {
    from: (f64, f64),
    to: (f64, f64),
    duration_s: f64,
    delay_s: f64,
}

impl Particle {
    fn scattered() -> Self {
        let spread = |range: f64| js_sys::Math::random() * range - range / 2.0;
        Self {
            from: (spread(100.0), spread(100.0)),
            to: (spread(200.0), spread(200.0)),
            duration_s: 2.0 + js_sys::Math::random() * 2.0,
            delay_s: js_sys::Math::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "--from-x: {:.1}px; --from-y: {:.1}px; --to-x: {:.1}px; --to-y: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.from.0, self.from.1, self.to.0, self.to.1, self.duration_s, self.delay_s
        )
    }
}

#[function_component(Splash)]
fn splash() -> Html {
    let particles = use_memo((), |_| {
        (0..SPLASH_PARTICLES)
            .map(|_| Particle::scattered())
            .collect::<Vec<_>>()
    });

    html! {
        <div class="splash" aria-hidden="true">
            <div class="splash-border" />
            { for particles.iter().map(|particle| html! {
                <div class="splash-particle" style={particle.style()} />
            }) }
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let show_content = use_state(prefers_reduced_motion);
    let (active, select) = use_deferred_navigator(DEFAULT_NAVIGATION_DELAY);

    {
        let show_content = show_content.clone();
        use_effect_with((), move |_| {
            let already_shown = *show_content;
            let timer = (!already_shown)
                .then(|| Timeout::new(SPLASH_DURATION_MS, move || show_content.set(true)));
            move || drop(timer)
        });
    }

    if !*show_content {
        return html! { <Splash /> };
    }

    let tile = |section: Section, class: Classes, style: String| {
        let is_active = active.as_ref() == Some(&section);
        let onclick = {
            let select = select.clone();
            let section = section.clone();
            Callback::from(move |_: MouseEvent| select.emit(section.clone()))
        };

        html! {
            <button
                type="button"
                key={section.slug().to_string()}
                class={classes!(class, is_active.then_some("is-active"))}
                style={style}
                onclick={onclick}
            >
                if is_active {
                    <span class="tile-ripple" aria-hidden="true" />
                }
                <span class="tile-label">{section.name().to_string()}</span>
            </button>
        }
    };

    let tiles = home_sections()
        .into_iter()
        .zip(GRID_SPANS)
        .enumerate()
        .map(|(index, (section, span))| {
            let style = format!(
                "--accent: {}; {}",
                section_accent(section.name()),
                stagger_style(index, 60)
            );
            tile(section, classes!("tile", span), style)
        })
        .collect::<Html>();

    html! {
        <main class="home-grid enter-fade">
            {tiles}
            {tile(
                Section::new(HOME_TILE_LABEL),
                classes!("tile", "tile-home"),
                stagger_style(GRID_SPANS.len(), 60),
            )}
        </main>
    }
}

#[function_component(Framework)]
pub fn framework() -> Html {
    html! {
        <PageShell title={FRAMEWORK_HERO.title} subtitle={FRAMEWORK_HERO.subtitle} image={FRAMEWORK_HERO.image}>
            <section class="section">
                <h2 class="section-title enter-rise">{"Core Brand Attributes"}</h2>
                <div class="grid grid-2">
                    { for BRAND_ATTRIBUTES.iter().enumerate().map(|(index, attribute)| html! {
                        <article key={attribute.title} class="card enter-slide" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <h3>{attribute.title}</h3>
                            <p class="muted">{attribute.content}</p>
                        </article>
                    }) }
                </div>
            </section>
        </PageShell>
    }
}

#[function_component(VoiceTone)]
pub fn voice_tone() -> Html {
    html! {
        <PageShell title={VOICE_TONE_HERO.title} subtitle={VOICE_TONE_HERO.subtitle} image={VOICE_TONE_HERO.image}>
            <section class="section">
                <h2 class="section-title enter-rise">{"Communication Principles"}</h2>
                <div class="grid grid-2">
                    { for VOICE_PRINCIPLES.iter().enumerate().map(|(index, principle)| html! {
                        <article key={principle.title} class="card enter-slide" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <h3>{principle.title}</h3>
                            <p class="muted">{principle.description}</p>
                            <ul class="checklist">
                                { for principle.examples.iter().map(|example| html! { <li>{*example}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </section>
        </PageShell>
    }
}

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <PageShell title={LOGO_HERO.title} subtitle={LOGO_HERO.subtitle} image={LOGO_HERO.image}>
            <section class="section">
                <h2 class="section-title enter-rise">{"Logo Variations"}</h2>
                <div class="grid grid-4">
                    { for LOGO_VARIATIONS.iter().enumerate().map(|(index, variation)| html! {
                        <article key={variation.name} class="card enter-rise" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <img class="card-media contain" src={variation.asset} alt={variation.name} loading="lazy" />
                            <h3>{variation.name}</h3>
                            <p class="muted">{variation.description}</p>
                            <p class="fine-print">{variation.usage}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Clear Space & Minimum Size"}</h2>
                <div class="grid grid-2">
                    <figure class="card clear-space">
                        <img src="/logos/primary.svg" alt="Logo with clear space guides" loading="lazy" />
                        <figcaption class="muted">{"Keep clear space equal to the height of the mark on every side."}</figcaption>
                    </figure>
                    <figure class="card">
                        <div class="min-sizes">
                            <img src="/logos/primary.svg" alt="Logo at 120px" width="120" loading="lazy" />
                            <img src="/logos/icon.svg" alt="Icon at 24px" width="24" loading="lazy" />
                        </div>
                        <figcaption class="muted">{"Minimum 120px wide for the full logo, 24px for the icon."}</figcaption>
                    </figure>
                </div>
            </section>

            <section class="section">
                <h2 class="section-title enter-rise">{"Background Usage"}</h2>
                <div class="grid grid-3">
                    { for LOGO_BACKGROUNDS.iter().map(|background| html! {
                        <figure key={background.label} class={classes!("card", "logo-surface", background.class)}>
                            <img src="/logos/primary.svg" alt={background.label} loading="lazy" />
                            <figcaption>{background.label}</figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Incorrect Usage"}</h2>
                <div class="grid grid-4">
                    { for LOGO_INCORRECT_USAGE.iter().enumerate().map(|(index, misuse)| html! {
                        <figure key={index} class="card misuse enter-rise" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <img class="card-media contain" src={misuse.asset} alt={misuse.description} loading="lazy" />
                            <figcaption class="warning">{misuse.description}</figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <DownloadBanner
                title="Logo Assets"
                description="Download our logo package with all variations in multiple formats"
                action="Download Logo Package"
            />
        </PageShell>
    }
}

#[function_component(Typography)]
pub fn typography() -> Html {
    html! {
        <PageShell title={TYPOGRAPHY_HERO.title} subtitle={TYPOGRAPHY_HERO.subtitle} image={TYPOGRAPHY_HERO.image}>
            <section class="section">
                <h2 class="section-title enter-rise">{"Type Scale"}</h2>
                <div class="type-scale">
                    { for TYPE_SCALE.iter().enumerate().map(|(index, style)| html! {
                        <div key={style.name} class="type-row enter-slide" style={stagger_style(index, 50)}>
                            <span style={style.css()}>{style.name}</span>
                            <span class="fine-print">
                                {format!("{}px / {}px · {}", style.size_px, style.line_height_px, style.weight)}
                            </span>
                            <span class="muted">{style.usage}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Font Pairings"}</h2>
                <div class="grid grid-2">
                    { for FONT_PAIRINGS.iter().map(|pairing| html! {
                        <article key={pairing.name} class="card">
                            <h3>{pairing.name}</h3>
                            <p class="pairing-heading">{pairing.heading}</p>
                            <p class="pairing-body">{pairing.body}</p>
                            <p class="fine-print">{pairing.usage}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title enter-rise">{"Hierarchy Examples"}</h2>
                <div class="grid grid-2">
                    <article class="card lift">
                        <h1 class="example-h1">{"Article Title"}</h1>
                        <h2 class="example-h2">{"Section Heading"}</h2>
                        <p>
                            {"This is an example of body text in an article layout. It demonstrates how different type scales work together to create clear hierarchy."}
                        </p>
                        <blockquote>{"A well-structured quote example"}</blockquote>
                    </article>
                    <article class="card lift surface-dark">
                        <h1 class="example-h2">{"Dashboard Title"}</h1>
                        <h2 class="example-h3">{"Section Header"}</h2>
                        <p class="fine-print">
                            {"This is an example of dashboard text with more compact spacing and smaller type sizes for dense information display."}
                        </p>
                        <p class="fine-print muted">{"Secondary information and labels"}</p>
                    </article>
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Best Practices"}</h2>
                <ul class="checklist">
                    <li>{"Limit a layout to two typefaces."}</li>
                    <li>{"Keep body text between 45 and 75 characters per line."}</li>
                    <li>{"Step down the scale one level at a time."}</li>
                </ul>
            </section>
        </PageShell>
    }
}

#[function_component(Iconology)]
pub fn iconology() -> Html {
    html! {
        <PageShell title={ICONOLOGY_HERO.title} subtitle={ICONOLOGY_HERO.subtitle} image={ICONOLOGY_HERO.image}>
            { for ICON_CATEGORIES.iter().map(|category| html! {
                <section key={category.name} class="section">
                    <h2 class="section-title enter-rise">{category.name}</h2>
                    <p class="muted">{category.description}</p>
                    <div class="grid grid-6">
                        { for category.icons.iter().enumerate().map(|(index, icon)| html! {
                            <figure key={icon.name} class="icon-tile enter-pop" style={stagger_style(index, 50)}>
                                <img src={icon.path} alt={icon.name} width="32" height="32" loading="lazy" />
                                <figcaption>{icon.name}</figcaption>
                            </figure>
                        }) }
                    </div>
                </section>
            }) }

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Usage Guidelines"}</h2>
                <div class="icon-sizes">
                    { for ICON_SIZES_PX.iter().map(|size| html! {
                        <figure key={*size} class="icon-size">
                            <img
                                src="/icons/system/home.svg"
                                alt=""
                                width={size.to_string()}
                                height={size.to_string()}
                            />
                            <figcaption class="fine-print">{format!("{size}px")}</figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title enter-rise">{"Best Practices"}</h2>
                <div class="grid grid-3">
                    <article class="card lift">
                        <h3>{"Consistency"}</h3>
                        <p class="muted">{"Use one stroke weight and corner radius across a set."}</p>
                    </article>
                    <article class="card lift">
                        <h3>{"Clarity"}</h3>
                        <p class="muted">{"Pair ambiguous icons with a text label."}</p>
                    </article>
                    <article class="card lift">
                        <h3>{"Accessibility"}</h3>
                        <p class="muted">{"Give interactive icons an accessible name."}</p>
                    </article>
                </div>
            </section>
        </PageShell>
    }
}

#[function_component(Color)]
pub fn color() -> Html {
    html! {
        <PageShell title={COLOR_HERO.title} subtitle={COLOR_HERO.subtitle} image={COLOR_HERO.image}>
            { for COLOR_PALETTE.iter().map(|group| html! {
                <section key={group.title} class="section">
                    <h2 class="section-title enter-rise">{group.title}</h2>
                    <div class="grid grid-4">
                        { for group.swatches.iter().enumerate().map(|(index, swatch)| html! {
                            <article
                                key={swatch.name}
                                class={classes!("swatch", "enter-rise", swatch.is_dark().then_some("swatch-dark"))}
                                style={format!("background: {}; {}", swatch.hex, stagger_style(index, CARD_STAGGER_MS))}
                            >
                                <h3>{swatch.name}</h3>
                                <p>{swatch.hex}</p>
                                <p class="fine-print">{swatch.usage}</p>
                            </article>
                        }) }
                    </div>
                </section>
            }) }

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Gradients"}</h2>
                <div class="gradient-sample lift">{"Primary Gradient"}</div>
            </section>

            <section class="section">
                <h2 class="section-title enter-rise">{"Text Colors"}</h2>
                <div class="grid grid-2">
                    <div class="card surface-dark">
                        <p class="text-primary-on-dark">{"Primary Text"}</p>
                        <p class="text-secondary-on-dark">{"Secondary Text"}</p>
                        <p class="text-link-on-dark">{"Interactive Elements"}</p>
                    </div>
                    <div class="card">
                        <p class="text-primary">{"Primary Text"}</p>
                        <p class="text-secondary">{"Secondary Text"}</p>
                        <p class="text-link">{"Interactive Elements"}</p>
                    </div>
                </div>
            </section>
        </PageShell>
    }
}

#[function_component(Imagery)]
pub fn imagery() -> Html {
    html! {
        <PageShell title={IMAGERY_HERO.title} subtitle={IMAGERY_HERO.subtitle} image={IMAGERY_HERO.image}>
            <section class="section">
                <h2 class="section-title enter-rise">{"Image Styles"}</h2>
                <div class="grid grid-4">
                    { for IMAGE_STYLES.iter().enumerate().map(|(index, style)| html! {
                        <article key={style.name} class="card enter-rise" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <img class="card-media" src={style.asset} alt={style.name} loading="lazy" />
                            <h3>{style.name}</h3>
                            <p class="muted">{style.description}</p>
                            <p class="fine-print">{style.usage}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Composition Principles"}</h2>
                <div class="grid grid-4">
                    { for COMPOSITION_EXAMPLES.iter().enumerate().map(|(index, example)| html! {
                        <figure key={example.title} class="card enter-rise" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <img class="card-media" src={composition_asset(index)} alt={example.title} loading="lazy" />
                            <h3>{example.title}</h3>
                            <figcaption class="muted">{example.content}</figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title enter-rise">{"Color Treatment"}</h2>
                <div class="grid grid-3">
                    { for ["Natural", "Brand tinted", "Monochrome"].iter().enumerate().map(|(index, label)| html! {
                        <figure key={*label} class="card">
                            <img
                                class="card-media"
                                src={format!("/images/imagery/color-{}.jpg", index + 1)}
                                alt={*label}
                                loading="lazy"
                            />
                            <figcaption class="muted">{*label}</figcaption>
                        </figure>
                    }) }
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Do's and Don'ts"}</h2>
                <div class="grid grid-2">
                    <ul class="checklist checklist-do">
                        { for IMAGERY_DOS.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                    <ul class="checklist checklist-dont">
                        { for IMAGERY_DONTS.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                </div>
            </section>

            <DownloadBanner
                title="Image Resources"
                description="Access our approved image library and style guides"
                action="Browse Image Library"
            />
        </PageShell>
    }
}

#[function_component(Motion)]
pub fn motion() -> Html {
    html! {
        <PageShell title={MOTION_HERO.title} subtitle={MOTION_HERO.subtitle} image={MOTION_HERO.image}>
            <section class="section">
                <h2 class="section-title enter-rise">{"Motion Principles"}</h2>
                <div class="grid grid-4">
                    { for MOTION_PRINCIPLES.iter().enumerate().map(|(index, principle)| html! {
                        <article key={principle.name} class="card enter-rise" style={stagger_style(index, CARD_STAGGER_MS)}>
                            <video class="card-media" src={principle.asset} autoplay={true} loop={true} muted={true} playsinline={true} />
                            <h3>{principle.name}</h3>
                            <p class="muted">{principle.description}</p>
                            <p class="fine-print">{principle.usage}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section section-tinted">
                <h2 class="section-title enter-rise">{"Animation Types"}</h2>
                <div class="grid grid-3">
                    { for ANIMATION_TYPES.iter().map(|kind| html! {
                        <article key={kind.title} class="card lift">
                            <h3>{kind.title}</h3>
                            <p class="muted">{kind.description}</p>
                            <ul class="checklist">
                                { for kind.examples.iter().map(|example| html! { <li>{*example}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title enter-rise">{"Timing & Easing"}</h2>
                <div class="timings">
                    { for MOTION_TIMINGS.iter().map(|timing| html! {
                        <div key={timing.name} class="timing-row">
                            <span>{timing.name}</span>
                            <span class="fine-print">{format!("{}ms · {}", timing.duration_ms, timing.easing)}</span>
                            <span
                                class="timing-demo"
                                style={format!("animation-duration: {}ms; animation-timing-function: {};", timing.duration_ms, timing.easing)}
                            />
                        </div>
                    }) }
                </div>
            </section>

            <DownloadBanner
                title="Motion Resources"
                description="Download our motion design kit with reusable animation components"
                action="Download Motion Kit"
            />
        </PageShell>
    }
}

#[derive(Properties, PartialEq)]
struct DownloadBannerProps {
    title: AttrValue,
    description: AttrValue,
    action: AttrValue,
}

#[function_component(DownloadBanner)]
fn download_banner(props: &DownloadBannerProps) -> Html {
    html! {
        <section class="section banner">
            <h2 class="section-title">{props.title.clone()}</h2>
            <p class="muted">{props.description.clone()}</p>
            <button type="button" class="pill-button">{props.action.clone()}</button>
        </section>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"Page not found"}</h1>
            <p class="muted">{"That part of the guidelines does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("pill-button")}>{"Back to Home"}</Link<Route>>
        </main>
    }
}
