use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;

use crate::components::testimonials::Testimonials;

const CHAPTERS: [&str; 9] = [
    "01. The Mindset Shift",
    "02. Defining Your Niche",
    "03. Building a Portfolio",
    "04. The Outreach Engine",
    "05. Mastering Sales Calls",
    "06. Pricing Models",
    "07. Contracts & Legal",
    "08. Project Management",
    "09. Scaling to Agency",
];

/// Adds the `visible` class to every `.reveal` element that has scrolled
/// into the lower 85% of the viewport. Called on mount and on every scroll
/// event; classes are only ever added, so sections reveal once.
fn reveal_in_view() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let document = window.document().unwrap();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);

    if let Ok(nodes) = document.query_selector_all(".reveal") {
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                let element: web_sys::Element = node.unchecked_into();
                let rect = element.get_bounding_client_rect();
                if rect.top() < viewport_height * 0.85 {
                    let classes = element.class_name();
                    if !classes.contains("visible") {
                        element.set_class_name(&format!("{} visible", classes));
                    }
                }
            }
        }
    }
}

fn feature_card(icon: Html, title: &str, desc: &str) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <div>
                <h4>{title}</h4>
                <p>{desc}</p>
            </div>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Hero entrance runs in three beats: headline block, then the top label
    // row, then the bottom metadata row.
    let hero_stage = use_state(|| 0u32);

    {
        let stage = hero_stage.clone();
        let setter = hero_stage.setter();
        use_effect(move || {
            if *stage < 3 {
                let delay = match *stage {
                    0 => 50,
                    1 => 450,
                    _ => 300,
                };
                let next = *stage + 1;
                let timeout = Timeout::new(delay, move || setter.set(next));
                timeout.forget();
            }
            || ()
        });
    }

    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                window.scroll_to_with_x_and_y(0.0, 0.0);

                let scroll_callback = Closure::wrap(Box::new(reveal_in_view) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Sections already in view should not wait for a scroll.
                reveal_in_view();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <section class="hero">
                <div class={classes!("hero-top-labels", (*hero_stage >= 2).then(|| "shown"))}>
                    <span>{"Rise Higher"}</span>
                    <span>{"With Your Business"}</span>
                </div>

                <div class={classes!("hero-main", (*hero_stage >= 1).then(|| "shown"))}>
                    <h2 class="hero-kicker">{"Freelance UX Design:"}</h2>
                    <h1 class="hero-title">
                        {"How to Land Clients & "}
                        <br class="desktop-break" />
                        {"Scale Your Business"}
                    </h1>
                    <p class="hero-byline">{"By Raunak Das"}</p>
                </div>

                <div class={classes!("hero-footer", (*hero_stage >= 3).then(|| "shown"))}>
                    <div class="hero-footer-cta">
                        <div class="hero-footer-circle">
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <line x1="5" y1="12" x2="19" y2="12" />
                                <polyline points="12 5 19 12 12 19" />
                            </svg>
                        </div>
                        <div class="hero-footer-text">
                            <p class="hero-footer-label">{"A Step-by-Step Guide"}</p>
                            <p>{"Starting a new new business? Find out where to begin and how to achieve success."}</p>
                        </div>
                    </div>
                </div>

                <div class="hero-curve">
                    <svg viewBox="0 0 100 200">
                        <path d="M 0,0 Q 50,100 0,200" pathLength="1" class="draw-stroke" />
                        <path d="M 0,100 L 40,100" pathLength="1" class="draw-stroke" />
                    </svg>
                </div>

                <div class="hero-cylinders">
                    <svg viewBox="0 0 200 200">
                        {
                            (0..5).map(|i| {
                                let cy = 150 - i * 20;
                                let style = format!("animation-delay: {:.1}s;", 0.5 + i as f64 * 0.1);
                                html! {
                                    <ellipse
                                        cx="100"
                                        cy={cy.to_string()}
                                        rx="80"
                                        ry="20"
                                        pathLength="1"
                                        class="draw-stroke"
                                        style={style}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </svg>
                </div>
            </section>

            <section class="value-section reveal">
                <div class="value-inner">
                    <div>
                        <h3>{"Stop trading time for money. Start building an empire."}</h3>
                        <p class="value-pitch">
                            {"Most designers get stuck in the \"freelancer trap\"—chasing low-paying gigs, dealing with scope creep, and burning out. This guide isn't just about design; it's about the business of design."}
                        </p>
                        <div class="value-stats">
                            <div>
                                <div class="stat-figure">{"10k+"}</div>
                                <div class="stat-label">{"Designers Helped"}</div>
                            </div>
                            <div>
                                <div class="stat-figure">{"$50M+"}</div>
                                <div class="stat-label">{"Client Value Generated"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="feature-list">
                        {feature_card(
                            html! {
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2" />
                                    <circle cx="9" cy="7" r="4" />
                                    <path d="M23 21v-2a4 4 0 0 0-3-3.87" />
                                    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
                                </svg>
                            },
                            "Client Acquisition",
                            "Systematic outreach strategies that actually work.",
                        )}
                        {feature_card(
                            html! {
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <polyline points="23 6 13.5 15.5 8.5 10.5 1 18" />
                                    <polyline points="17 6 23 6 23 12" />
                                </svg>
                            },
                            "Pricing Psychology",
                            "How to charge 5x what you're charging now.",
                        )}
                        {feature_card(
                            html! {
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
                                    <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
                                </svg>
                            },
                            "Process Mastery",
                            "Streamline your workflow to deliver faster.",
                        )}
                    </div>
                </div>
            </section>

            <section class="chapters-section reveal">
                <div class="chapters-inner">
                    <div class="chapters-header">
                        <h2>{"What's Inside"}</h2>
                        <p>{"200+ Pages of Actionable Tactics"}</p>
                    </div>
                    <div class="chapters-grid">
                        {
                            CHAPTERS.iter().map(|chapter| html! {
                                <div class="chapter-cell">
                                    <div class="chapter-label">{"Chapter"}</div>
                                    <h4>{*chapter}</h4>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <div class="reveal">
                <Testimonials />
            </div>

            <section class="author-section reveal">
                <div class="author-inner">
                    <div class="author-portrait">
                        <img src="https://picsum.photos/400/600" alt="Raunak Das" />
                    </div>
                    <div class="author-bio">
                        <h2>{"Meet Raunak Das"}</h2>
                        <p>
                            {"\"I spent 5 years struggling as a freelancer before I cracked the code. Now, I run a 7-figure design agency. I wrote this book to save you the 5 years of trial and error.\""}
                        </p>
                        <button class="ghost-button">{"Read Full Bio"}</button>
                    </div>
                </div>
            </section>

            <section class="cta-section reveal">
                <div class="cta-backdrop"></div>
                <div class="cta-inner">
                    <h2>{"Ready to Scale?"}</h2>
                    <p>
                        {"Join 10,000+ designers who have transformed their careers with this guide. Instant digital download."}
                    </p>
                    <div class="cta-actions">
                        <button class="cta-primary">
                            <span>{"Get the Guide for $49"}</span>
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <line x1="7" y1="17" x2="17" y2="7" />
                                <polyline points="7 7 17 7 17 17" />
                            </svg>
                        </button>
                        <button class="cta-secondary">{"Download Free Chapter"}</button>
                    </div>
                    <p class="cta-guarantee">{"30-Day Money Back Guarantee • Secure Payment"}</p>
                </div>
            </section>

            <footer class="page-footer">
                <div class="footer-inner">
                    <div class="footer-copyright">{"© 2024 Raunak Das. All rights reserved."}</div>
                    <div class="footer-links">
                        <a href="#">{"Twitter"}</a>
                        <a href="#">{"LinkedIn"}</a>
                        <a href="#">{"Instagram"}</a>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
.landing-page {
    min-height: 100vh;
    background: #000;
    color: #fff;
    font-family: 'Inter', sans-serif;
    font-weight: 400;
    overflow-x: hidden;
}

.landing-page ::selection {
    background: #fff;
    color: #000;
}

/* ---------- hero ---------- */

.hero {
    position: relative;
    height: 100vh;
    max-width: 1600px;
    margin: 0 auto;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    box-sizing: border-box;
}

.hero-top-labels {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    font-size: 0.65rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    font-weight: 500;
    color: rgba(255, 255, 255, 0.6);
    opacity: 0;
    transition: opacity 1s ease;
}

.hero-top-labels.shown {
    opacity: 1;
}

.hero-main {
    flex: 1;
    display: flex;
    flex-direction: column;
    justify-content: center;
    position: relative;
    z-index: 1;
    max-width: 56rem;
}

.hero-kicker,
.hero-title,
.hero-byline {
    opacity: 0;
    transform: translateY(20px);
}

.hero-main.shown .hero-kicker {
    animation: fade-in-up 0.6s cubic-bezier(0.22, 1, 0.36, 1) forwards;
}

.hero-main.shown .hero-title {
    animation: fade-in-up 0.6s cubic-bezier(0.22, 1, 0.36, 1) 0.1s forwards;
}

.hero-main.shown .hero-byline {
    animation: fade-in-up 0.6s cubic-bezier(0.22, 1, 0.36, 1) 0.2s forwards;
}

.hero-kicker {
    font-size: 1.25rem;
    font-weight: 300;
    color: rgba(255, 255, 255, 0.8);
    letter-spacing: 0.02em;
    margin: 0 0 1rem 0;
}

.hero-title {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 3rem;
    font-weight: 500;
    line-height: 0.95;
    letter-spacing: -0.02em;
    margin: 0 0 3rem 0;
}

.hero-byline {
    font-size: 1.1rem;
    font-weight: 300;
    color: rgba(255, 255, 255, 0.9);
    margin: 0;
}

.desktop-break {
    display: none;
}

.hero-footer {
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    opacity: 0;
    transition: opacity 1s ease;
}

.hero-footer.shown {
    opacity: 1;
}

.hero-footer-cta {
    display: flex;
    align-items: center;
    gap: 1rem;
    cursor: pointer;
}

.hero-footer-circle {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.3);
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    transition: background 0.3s ease, color 0.3s ease;
}

.hero-footer-circle svg {
    width: 1rem;
    height: 1rem;
}

.hero-footer-cta:hover .hero-footer-circle {
    background: #fff;
    color: #000;
}

.hero-footer-text {
    max-width: 200px;
    font-size: 0.8rem;
}

.hero-footer-text p {
    margin: 0;
    font-weight: 300;
    color: rgba(255, 255, 255, 0.8);
    line-height: 1.4;
}

.hero-footer-label {
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.65rem;
    color: rgba(255, 255, 255, 0.5) !important;
    margin-bottom: 0.25rem !important;
}

.hero-curve {
    position: absolute;
    left: 0;
    top: 33%;
    width: 8rem;
    height: 16rem;
    pointer-events: none;
    opacity: 0.6;
}

.hero-cylinders {
    position: absolute;
    right: 0;
    bottom: 0;
    width: 12rem;
    height: 12rem;
    pointer-events: none;
    opacity: 0.6;
    transform: translate(25%, 25%);
}

.hero-curve svg,
.hero-cylinders svg {
    width: 100%;
    height: 100%;
    stroke: #fff;
    fill: none;
    stroke-width: 0.5px;
}

.draw-stroke {
    stroke-dasharray: 1;
    stroke-dashoffset: 1;
    opacity: 0;
    animation: draw-line 1.5s ease-in-out 0.5s forwards;
}

/* ---------- scroll reveal ---------- */

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
    opacity: 1;
    transform: none;
}

/* ---------- value proposition ---------- */

.value-section {
    padding: 6rem 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.value-inner {
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: 1fr;
    gap: 4rem;
}

.value-inner h3 {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 1.9rem;
    font-weight: 500;
    margin: 0 0 1.5rem 0;
}

.value-pitch {
    color: rgba(255, 255, 255, 0.6);
    font-size: 1.1rem;
    line-height: 1.7;
    margin: 0 0 2rem 0;
}

.value-stats {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.stat-figure {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 2.25rem;
    margin-bottom: 0.5rem;
}

.stat-label {
    font-size: 0.8rem;
    color: rgba(255, 255, 255, 0.5);
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.feature-list {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

.feature-card {
    display: flex;
    gap: 1rem;
    padding: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    transition: background 0.3s ease;
}

.feature-card:hover {
    background: rgba(255, 255, 255, 0.05);
}

.feature-icon {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.1);
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
}

.feature-icon svg {
    width: 1.5rem;
    height: 1.5rem;
}

.feature-card h4 {
    font-size: 1.2rem;
    font-weight: 500;
    margin: 0 0 0.5rem 0;
}

.feature-card p {
    color: rgba(255, 255, 255, 0.6);
    margin: 0;
}

/* ---------- chapters ---------- */

.chapters-section {
    padding: 6rem 1.5rem;
    background: #09090b;
}

.chapters-inner {
    max-width: 80rem;
    margin: 0 auto;
}

.chapters-header {
    display: flex;
    flex-direction: column;
    margin-bottom: 4rem;
}

.chapters-header h2 {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 2.5rem;
    font-weight: 500;
    margin: 0;
}

.chapters-header p {
    color: rgba(255, 255, 255, 0.5);
    margin: 1rem 0 0 0;
}

.chapters-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1px;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.1);
}

.chapter-cell {
    background: #000;
    padding: 2rem;
    cursor: default;
    transition: background 0.3s ease;
}

.chapter-cell:hover {
    background: #18181b;
}

.chapter-label {
    font-size: 0.8rem;
    color: rgba(255, 255, 255, 0.3);
    margin-bottom: 1rem;
    transition: color 0.3s ease;
}

.chapter-cell:hover .chapter-label {
    color: rgba(255, 255, 255, 0.6);
}

.chapter-cell h4 {
    font-size: 1.2rem;
    font-weight: 500;
    margin: 0;
}

/* ---------- author ---------- */

.author-section {
    padding: 6rem 1.5rem;
}

.author-inner {
    max-width: 64rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 3rem;
}

.author-portrait {
    width: 100%;
    aspect-ratio: 3 / 4;
    border-radius: 0.5rem;
    overflow: hidden;
    background: #27272a;
    filter: grayscale(1);
    transition: filter 0.7s ease;
}

.author-portrait:hover {
    filter: grayscale(0);
}

.author-portrait img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    display: block;
}

.author-bio h2 {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 2.25rem;
    font-weight: 500;
    margin: 0 0 1.5rem 0;
}

.author-bio p {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.7);
    line-height: 1.7;
    margin: 0 0 1.5rem 0;
}

.ghost-button {
    padding: 0.75rem 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 9999px;
    background: transparent;
    color: #fff;
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    cursor: pointer;
    transition: background 0.3s ease, color 0.3s ease;
}

.ghost-button:hover {
    background: #fff;
    color: #000;
}

/* ---------- call to action ---------- */

.cta-section {
    position: relative;
    padding: 8rem 1.5rem;
    overflow: hidden;
}

.cta-backdrop {
    position: absolute;
    inset: 0;
    background: rgba(255, 255, 255, 0.05);
    transform: skewY(3deg) scale(1.1);
    pointer-events: none;
}

.cta-inner {
    position: relative;
    z-index: 1;
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
}

.cta-inner h2 {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 3rem;
    font-weight: 500;
    margin: 0 0 2rem 0;
}

.cta-inner > p {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.6);
    max-width: 42rem;
    margin: 0 auto 3rem auto;
}

.cta-actions {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
}

.cta-primary {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    background: #fff;
    color: #000;
    border: none;
    border-radius: 9999px;
    font-size: 1.1rem;
    font-weight: 500;
    cursor: pointer;
    transition: transform 0.3s ease;
}

.cta-primary:hover {
    transform: scale(1.05);
}

.cta-primary svg {
    width: 1.25rem;
    height: 1.25rem;
}

.cta-secondary {
    padding: 1rem 2rem;
    background: transparent;
    border: none;
    color: rgba(255, 255, 255, 0.7);
    font-size: 1rem;
    text-decoration: underline;
    text-decoration-color: rgba(255, 255, 255, 0.3);
    text-underline-offset: 4px;
    cursor: pointer;
    transition: color 0.3s ease;
}

.cta-secondary:hover {
    color: #fff;
}

.cta-guarantee {
    margin: 2rem 0 0 0;
    font-size: 0.85rem;
    color: rgba(255, 255, 255, 0.4);
}

/* ---------- footer ---------- */

.page-footer {
    padding: 3rem 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.footer-inner {
    max-width: 80rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    text-align: center;
}

.footer-copyright {
    font-size: 0.85rem;
    color: rgba(255, 255, 255, 0.4);
}

.footer-links {
    display: flex;
    gap: 2rem;
    font-size: 0.85rem;
}

.footer-links a {
    color: rgba(255, 255, 255, 0.6);
    text-decoration: none;
    transition: color 0.3s ease;
}

.footer-links a:hover {
    color: #fff;
}

/* ---------- keyframes ---------- */

@keyframes fade-in-up {
    from {
        opacity: 0;
        transform: translateY(20px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}

@keyframes draw-line {
    from {
        stroke-dashoffset: 1;
        opacity: 0;
    }
    to {
        stroke-dashoffset: 0;
        opacity: 1;
    }
}

/* ---------- breakpoints (kept in sync with the carousel tiers) ---------- */

@media (min-width: 640px) {
    .hero {
        padding: 3rem;
    }

    .hero-top-labels {
        font-size: 0.75rem;
    }

    .hero-kicker {
        font-size: 1.5rem;
        margin-bottom: 1.5rem;
    }

    .hero-title {
        font-size: 4.5rem;
    }

    .hero-byline {
        font-size: 1.25rem;
    }

    .desktop-break {
        display: block;
    }

    .hero-curve {
        width: 12rem;
        height: 24rem;
    }

    .hero-cylinders {
        width: 20rem;
        height: 20rem;
    }

    .hero-footer-text {
        font-size: 0.9rem;
    }

    .value-section,
    .chapters-section,
    .author-section {
        padding: 6rem 3rem;
    }

    .cta-section {
        padding: 8rem 3rem;
    }

    .page-footer {
        padding: 3rem;
    }

    .value-inner h3 {
        font-size: 2.25rem;
    }

    .stat-figure {
        font-size: 2.5rem;
    }

    .chapters-header {
        flex-direction: row;
        justify-content: space-between;
        align-items: flex-end;
    }

    .chapters-header h2 {
        font-size: 3rem;
    }

    .chapters-header p {
        margin: 0;
    }

    .chapters-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .author-inner {
        flex-direction: row;
        align-items: center;
    }

    .author-portrait {
        width: 33%;
        flex-shrink: 0;
    }

    .author-bio {
        width: 67%;
    }

    .cta-inner h2 {
        font-size: 4.5rem;
    }

    .cta-actions {
        flex-direction: row;
    }

    .footer-inner {
        flex-direction: row;
        justify-content: space-between;
        text-align: left;
    }
}

@media (min-width: 1024px) {
    .hero {
        padding: 4rem;
    }

    .hero-title {
        font-size: 6rem;
    }

    .value-inner {
        grid-template-columns: 1fr 1fr;
    }

    .chapters-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}
                "#}
            </style>
        </main>
    }
}
