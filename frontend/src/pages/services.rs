use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::ParallaxHero;
use crate::components::motion::{magnetic_tilt, tilt_style};
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub tags: [&'static str; 3],
    pub description: &'static str,
    pub image: &'static str,
    pub route: Route,
}

pub fn service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Custom Web Design",
            tags: ["Design", "UX", "Conversion"],
            description: "Tailored, high-impact websites crafted to reflect your brand’s identity and convert visitors into customers.",
            image: "/assets/images/customwebsites.jpg",
            route: Route::CustomWebDesign,
        },
        ServiceCard {
            title: "Website Remodeling",
            tags: ["Redesign", "Performance", "SEO"],
            description: "Transform outdated websites into modern, fast, and visually compelling digital experiences.",
            image: "/assets/images/websiteremodeling.jpg",
            route: Route::WebsiteRemodeling,
        },
        ServiceCard {
            title: "Website Maintenance",
            tags: ["Security", "Updates", "Support"],
            description: "We keep your website secure, optimized, and running smoothly so you can focus on your business.",
            image: "/assets/images/websitemaintenance.jpg",
            route: Route::WebsiteMaintenance,
        },
        ServiceCard {
            title: "Quick Start Websites",
            tags: ["Launch Fast", "Affordable", "Reliable"],
            description: "Professional websites launched quickly, perfect for startups and growing brands.",
            image: "/assets/images/quicksite.jpg",
            route: Route::QuickStartWebsites,
        },
    ]
}

#[derive(Properties, PartialEq)]
struct MagneticCardProps {
    card: ServiceCard,
    index: usize,
}

#[function_component(MagneticCard)]
fn magnetic_card(props: &MagneticCardProps) -> Html {
    let card_ref = use_node_ref();
    let tilt = use_state(|| (0.0, 0.0));

    let onmousemove = {
        let card_ref = card_ref.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = card_ref.cast::<Element>() {
                let rect = el.get_bounding_client_rect();
                let x = e.client_x() as f64 - rect.left();
                let y = e.client_y() as f64 - rect.top();
                tilt.set(magnetic_tilt(x, y, rect.width(), rect.height()));
            }
        })
    };
    let onmouseleave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set((0.0, 0.0)))
    };

    let card = &props.card;
    html! {
        <div class="fade-in-up" style={format!("animation-delay: {:.1}s;", props.index as f64 * 0.2)}>
            <Link<Route> to={card.route.clone()} classes="service-link">
                <div
                    ref={card_ref}
                    class="service-card"
                    style={tilt_style(*tilt)}
                    aria-label={format!("View {} service", card.title)}
                    {onmousemove}
                    {onmouseleave}
                >
                    <img src={card.image} alt={card.title} />
                    <div class="service-body">
                        <div class="service-tags">
                            { for card.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                        </div>
                        <h3>{card.title}</h3>
                        <p>{card.description}</p>
                        <span class="service-more">{"View Service →"}</span>
                    </div>
                </div>
            </Link<Route>>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <main class="services-page">
            <ParallaxHero
                image="/assets/images/backdrop.png"
                alt="Premium Services Hero"
                title="Our Services"
                subtitle="Cinematic, glassmorphic digital experiences built to elevate modern brands."
            />

            <section class="services-list">
                <h2 class="fade-in-up">{"What We Offer"}</h2>
                <div class="services-grid">
                    { for service_cards().into_iter().enumerate().map(|(index, card)| {
                        let key = card.title;
                        html! { <MagneticCard key={key} {card} {index} /> }
                    }) }
                </div>
            </section>

            <section class="trust">
                <p>
                    {"Trusted by "}<strong>{"50+"}</strong>{" brands · "}
                    <strong>{"4+ years"}</strong>{" experience · "}
                    <strong>{"99.9%"}</strong>{" uptime"}
                </p>
            </section>

            <section class="services-cta">
                <h2 class="fade-in-up">{"Let’s Build Something Better"}</h2>
                <p>{"Book a free strategy call and discover how we can elevate your digital presence."}</p>
                <Link<Route> to={Route::Contact} classes="cta-button">{"Book a Free Strategy Call"}</Link<Route>>
            </section>
            <style>
                {r#"
                    .services-list {
                        padding: 6rem 1.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .services-list h2 {
                        font-size: 28pt;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 4rem;
                        letter-spacing: 0.025em;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 3rem;
                    }
                    .service-link {
                        display: block;
                        color: inherit;
                        text-decoration: none;
                    }
                    .service-card {
                        border-radius: 0.75rem;
                        overflow: hidden;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        transition: transform 0.15s ease-out, box-shadow 0.3s;
                    }
                    .service-card:hover {
                        box-shadow: 0 0 40px rgba(36, 237, 162, 0.15);
                    }
                    .service-card img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .service-card:hover img {
                        transform: scale(1.05);
                    }
                    .service-body {
                        padding: 1.5rem;
                    }
                    .service-body h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin: 1rem 0;
                    }
                    .service-body p {
                        color: #d1d5db;
                        line-height: 1.6;
                    }
                    .service-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .tag {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.7);
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .service-more {
                        display: inline-block;
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: #60a5fa;
                        opacity: 0;
                        transition: opacity 0.3s;
                    }
                    .service-card:hover .service-more {
                        opacity: 1;
                    }
                    .trust {
                        padding: 5rem 1.5rem;
                        text-align: center;
                        color: #d1d5db;
                        font-size: 1.125rem;
                    }
                    .trust strong {
                        color: #fff;
                    }
                    .services-cta {
                        padding: 6rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(to top right, #111827, #000, #1f2937);
                    }
                    .services-cta h2 {
                        font-size: 3rem;
                        font-weight: 800;
                        margin-bottom: 1.5rem;
                    }
                    .services-cta p {
                        font-size: 1.125rem;
                        color: #d1d5db;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem auto;
                    }
                    @media (max-width: 768px) {
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_link_to_detail_pages() {
        let cards = service_cards();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.route != Route::Services));
        assert!(cards.iter().all(|c| c.tags.iter().all(|t| !t.is_empty())));
    }
}
