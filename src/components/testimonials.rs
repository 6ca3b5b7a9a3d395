use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use log::debug;

use crate::carousel::{Carousel, WIDE_MIN_WIDTH};

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    company: &'static str,
}

const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "This guide completely changed how I approach client work. I went from charging $50/hr to project-based pricing starting at $5k.",
        author: "Sarah Jenkins",
        role: "Product Designer",
        company: "Freelance",
    },
    Testimonial {
        quote: "The outreach templates alone are worth 10x the price. I closed my first enterprise client within two weeks of using them.",
        author: "Marcus Chen",
        role: "UX Lead",
        company: "Studio Alpha",
    },
    Testimonial {
        quote: "Finally, a resource that talks about the BUSINESS side of design. Raunak demystifies the sales process beautifully.",
        author: "Elena Rodriguez",
        role: "Creative Director",
        company: "Design Co.",
    },
    Testimonial {
        quote: "I was stuck in a feast-or-famine cycle for years. The chapter on retainers helped me stabilize my income.",
        author: "David Kim",
        role: "UI Designer",
        company: "Freelance",
    },
    Testimonial {
        quote: "Practical, actionable, and no-fluff. If you're serious about scaling your design business, you need this.",
        author: "Jessica Foster",
        role: "Brand Strategist",
        company: "Agency X",
    },
];

fn viewport_width() -> f64 {
    // No window outside the browser; fall back to the desktop tier like the
    // initial render of the original page.
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(WIDE_MIN_WIDTH)
}

pub enum TestimonialsMsg {
    Next,
    Prev,
    ViewportWidth(f64),
}

/// "Success Stories" section: a sliding track of testimonial cards with
/// prev/next paging. Page size follows the viewport width.
pub struct Testimonials {
    carousel: Carousel,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl Component for Testimonials {
    type Message = TestimonialsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            carousel: Carousel::new(TESTIMONIALS.len(), viewport_width()),
            resize_listener: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let link = ctx.link().clone();
        let listener = Closure::wrap(Box::new(move || {
            link.send_message(TestimonialsMsg::ViewportWidth(viewport_width()));
        }) as Box<dyn FnMut()>);

        let window = web_sys::window().unwrap();
        window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .unwrap();
        self.resize_listener = Some(listener);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.take()) {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.carousel;
        match msg {
            TestimonialsMsg::Next => self.carousel.next(),
            TestimonialsMsg::Prev => self.carousel.prev(),
            TestimonialsMsg::ViewportWidth(width) => {
                self.carousel.set_viewport_width(width);
                debug!(
                    "viewport {}px -> {} testimonials per page",
                    width,
                    self.carousel.items_per_page()
                );
            }
        }
        self.carousel != before
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.carousel.is_empty() {
            return html! {};
        }

        let len = self.carousel.len();
        let track_style = format!(
            "width: {:.4}%; transform: translateX(-{:.4}%);",
            len as f64 / self.carousel.items_per_page() as f64 * 100.0,
            self.carousel.index() as f64 * (100.0 / len as f64),
        );
        let slot_style = format!("width: {:.4}%;", 100.0 / len as f64);

        html! {
            <section class="testimonials-section">
                <div class="testimonials-inner">
                    <div class="testimonials-header">
                        <div>
                            <h2>{"Success Stories"}</h2>
                            <p>{"Hear from designers who scaled their business."}</p>
                        </div>
                        <div class="testimonials-nav">
                            <button
                                class="testimonials-nav-button"
                                onclick={ctx.link().callback(|_| TestimonialsMsg::Prev)}
                                disabled={!self.carousel.can_go_prev()}
                                aria-label="Previous testimonials"
                            >
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <polyline points="15 18 9 12 15 6" />
                                </svg>
                            </button>
                            <button
                                class="testimonials-nav-button"
                                onclick={ctx.link().callback(|_| TestimonialsMsg::Next)}
                                disabled={!self.carousel.can_go_next()}
                                aria-label="Next testimonials"
                            >
                                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <polyline points="9 18 15 12 9 6" />
                                </svg>
                            </button>
                        </div>
                    </div>

                    <div class="testimonials-viewport">
                        <div class="testimonials-track" style={track_style}>
                            {
                                TESTIMONIALS.iter().map(|testimonial| html! {
                                    <div class="testimonial-slot" style={slot_style.clone()}>
                                        <div class="testimonial-card">
                                            <div>
                                                <span class="testimonial-quote-mark">{"❝"}</span>
                                                <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                                            </div>
                                            <div>
                                                <div class="testimonial-author">{testimonial.author}</div>
                                                <div class="testimonial-role">{format!("{}, {}", testimonial.role, testimonial.company)}</div>
                                            </div>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>

                <style>
                    {r#"
.testimonials-section {
    padding: 6rem 1.5rem;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    overflow: hidden;
}

.testimonials-inner {
    max-width: 80rem;
    margin: 0 auto;
}

.testimonials-header {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    margin-bottom: 3rem;
}

.testimonials-header h2 {
    font-family: 'Space Grotesk', sans-serif;
    font-size: 2.5rem;
    font-weight: 500;
    margin: 0 0 1rem 0;
}

.testimonials-header p {
    color: rgba(255, 255, 255, 0.6);
    margin: 0;
}

.testimonials-nav {
    display: flex;
    gap: 1rem;
}

.testimonials-nav-button {
    width: 2.9rem;
    height: 2.9rem;
    padding: 0.75rem;
    border-radius: 50%;
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: transparent;
    color: #fff;
    cursor: pointer;
    transition: background 0.3s ease, color 0.3s ease;
}

.testimonials-nav-button svg {
    width: 1.25rem;
    height: 1.25rem;
    display: block;
}

.testimonials-nav-button:hover:not(:disabled) {
    background: #fff;
    color: #000;
}

.testimonials-nav-button:disabled {
    opacity: 0.3;
    cursor: not-allowed;
}

.testimonials-viewport {
    overflow: hidden;
}

.testimonials-track {
    display: flex;
    transition: transform 0.5s cubic-bezier(0.22, 1, 0.36, 1);
}

.testimonial-slot {
    padding: 0 0.5rem;
    box-sizing: border-box;
}

.testimonial-card {
    height: 100%;
    padding: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1rem;
    background: rgba(255, 255, 255, 0.05);
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    box-sizing: border-box;
    transition: background 0.3s ease, transform 0.3s ease;
    cursor: default;
}

.testimonial-card:hover {
    background: rgba(255, 255, 255, 0.1);
    transform: scale(1.02);
}

.testimonial-quote-mark {
    display: block;
    font-size: 2rem;
    line-height: 1;
    color: rgba(255, 255, 255, 0.2);
    margin-bottom: 1rem;
}

.testimonial-quote {
    font-size: 1rem;
    font-weight: 300;
    line-height: 1.6;
    margin: 0 0 1.5rem 0;
}

.testimonial-author {
    font-weight: 500;
    font-size: 0.9rem;
}

.testimonial-role {
    font-size: 0.8rem;
    color: rgba(255, 255, 255, 0.5);
}

@media (min-width: 640px) {
    .testimonials-header {
        flex-direction: row;
        justify-content: space-between;
        align-items: flex-end;
    }

    .testimonials-header h2 {
        font-size: 3rem;
    }

    .testimonial-slot {
        padding: 0 1rem;
    }

    .testimonial-card {
        padding: 2rem;
    }

    .testimonial-quote {
        font-size: 1.2rem;
        margin-bottom: 2rem;
    }
}
                    "#}
                </style>
            </section>
        }
    }
}
