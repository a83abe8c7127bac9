use gloo_timers::callback::Interval;
use log::{debug, info};
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::carousel::{CarouselAction, CarouselState};
use crate::components::motion::parallax_offset;
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::Route;

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
}

static SLIDES: [Slide; 4] = [
    Slide {
        title: "Custom Website Design",
        subtitle: "Cinematic, glassmorphic, and modern designs for premium brands.",
        image: "/assets/images/slide1.jpg",
    },
    Slide {
        title: "Website Maintenance",
        subtitle: "Reliable updates that keep your site flawless and fast.",
        image: "/assets/images/slide2.jpg",
    },
    Slide {
        title: "Website Remodeling",
        subtitle: "Transform outdated websites into modern digital experiences.",
        image: "/assets/images/slide3.jpg",
    },
    Slide {
        title: "Quick Start Websites",
        subtitle: "Launch fast with sleek, conversion-ready websites.",
        image: "/assets/images/slide4.jpg",
    },
];

const TESTIMONIALS: [(&str, &str); 3] = [
    (
        "Sophia M.",
        "They transformed our brand presence with a cinematic website that truly resonates.",
    ),
    (
        "David L.",
        "The glassmorphic design elevated our corporate identity. Unforgettable.",
    ),
    (
        "Aisha K.",
        "The immersive UI/UX dramatically boosted engagement across our platforms.",
    ),
];

const PORTFOLIO: [&str; 5] = [
    "portfolio1",
    "portfolio2",
    "portfolio3",
    "portfolio4",
    "portfolio5",
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let carousel = use_reducer(|| CarouselState::new(SLIDES.len()));
    let (_, scroll_y) = use_window_scroll();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Auto-advance until the visitor takes over. The interval lives inside the
    // effect, so it is dropped when `manual` flips or the page unmounts.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |manual: &bool| {
                let interval = (!*manual).then(|| {
                    debug!("Starting carousel auto-advance");
                    Interval::new(CAROUSEL_INTERVAL_MS, move || dispatcher.dispatch(CarouselAction::Tick))
                });
                move || {
                    if interval.is_some() {
                        info!("Carousel auto-advance stopped");
                    }
                    drop(interval);
                }
            },
            carousel.manual,
        );
    }

    let navigate = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };
    let prev = navigate(|| CarouselAction::Prev);
    let next = navigate(|| CarouselAction::Next);

    let slide = &SLIDES[carousel.index];
    let parallax = format!("transform: translateY({:.1}px) scale(1.05);", parallax_offset(scroll_y));

    html! {
        <div class="landing-page">
            <section class="carousel">
                <div class="slide" key={carousel.index}>
                    <div class="slide-bg" style={parallax}>
                        <img src={slide.image} alt={slide.title} />
                    </div>
                    <div class="slide-overlay">
                        <div class="slide-text">
                            <h1 class="slide-title">{slide.title}</h1>
                            <p class="slide-subtitle">{slide.subtitle}</p>
                        </div>
                    </div>
                </div>

                <button class="carousel-arrow left" aria-label="Previous slide" onclick={prev}>{"‹"}</button>
                <button class="carousel-arrow right" aria-label="Next slide" onclick={next}>{"›"}</button>

                <div class="carousel-dots">
                    { for (0..SLIDES.len()).map(|i| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)))
                        };
                        html! {
                            <button
                                class={classes!("dot", (carousel.index == i).then(|| "active"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </section>

            <section class="portfolio">
                <h2>{"Our Portfolio"}</h2>
                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().enumerate().map(|(i, img)| html! {
                        <div class="portfolio-card fade-in-up" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}>
                            <img src={format!("/assets/images/{}.jpg", img)} alt="Portfolio project" loading="lazy" />
                            <div class="portfolio-text">
                                <h3>{"Luxury Web Project"}</h3>
                                <p>{"Cinematic, modern, conversion-focused."}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="vision">
                <h2 class="fade-in-up">{"Our Vision"}</h2>
                <p>{"We design cinematic digital experiences that elevate brands into icons of modern design."}</p>
            </section>

            <section class="testimonials">
                <h2>{"What Clients Say"}</h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, (name, quote))| html! {
                        <div class="testimonial glass-card fade-in-up" style={format!("animation-delay: {:.2}s;", i as f64 * 0.15)}>
                            <p>{format!("“{}”", quote)}</p>
                            <h4>{*name}</h4>
                        </div>
                    }) }
                </div>
            </section>

            <section class="landing-cta">
                <h2>{"Ready to Elevate Your Brand?"}</h2>
                <p>{"Let’s craft a cinematic digital experience that captivates your audience."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">
                    {"Book Consultation"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .slide {
                        position: absolute;
                        inset: 0;
                        animation: fadeIn 0.9s ease-in-out;
                    }
                    .slide-bg {
                        position: absolute;
                        inset: 0;
                        will-change: transform;
                    }
                    .slide-bg img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .slide-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .slide-text {
                        text-align: center;
                        padding: 0 1.5rem;
                        max-width: 48rem;
                    }
                    .slide-title {
                        font-size: 3.75rem;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                        animation: fadeInUp 0.8s ease-out 0.2s both;
                    }
                    .slide-subtitle {
                        font-size: 1.25rem;
                        color: #e5e7eb;
                        animation: fadeInUp 0.8s ease-out 0.4s both;
                    }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 30;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        cursor: pointer;
                        transition: background 0.3s;
                    }
                    .carousel-arrow:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }
                    .carousel-arrow.left { left: 1.5rem; }
                    .carousel-arrow.right { right: 1.5rem; }
                    .carousel-dots {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 30;
                        display: flex;
                        gap: 0.75rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(12px);
                    }
                    .dot {
                        width: 0.625rem;
                        height: 0.625rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.4);
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .dot:hover { background: rgba(255, 255, 255, 0.7); }
                    .dot.active {
                        background: #fff;
                        transform: scale(1.25);
                    }
                    .portfolio, .testimonials {
                        padding: 5rem 1.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .portfolio h2, .testimonials h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .portfolio-grid, .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .portfolio-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s;
                    }
                    .portfolio-card:hover, .testimonial:hover {
                        transform: scale(1.05);
                    }
                    .portfolio-card img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                    }
                    .portfolio-text {
                        padding: 1rem;
                    }
                    .portfolio-text p {
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .vision {
                        padding: 6rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(to right, #1f2937, #000, #111827);
                    }
                    .vision h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                    }
                    .vision p {
                        max-width: 48rem;
                        margin: 0 auto;
                        color: #d1d5db;
                        font-size: 1.125rem;
                    }
                    .testimonial p {
                        margin-bottom: 1rem;
                        color: #e5e7eb;
                    }
                    .landing-cta {
                        padding: 6rem 1.5rem;
                        background: #000;
                        text-align: center;
                    }
                    .landing-cta h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                    }
                    .landing-cta p {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem auto;
                        color: #d1d5db;
                        font-size: 1.125rem;
                    }
                    @media (max-width: 768px) {
                        .slide-title {
                            font-size: 3rem;
                        }
                        .portfolio-grid, .testimonial-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
