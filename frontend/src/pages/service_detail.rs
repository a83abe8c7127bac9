use yew::prelude::*;

use crate::booking::catalog::Service;
use crate::booking::prefill::contact_href;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceArea {
    CustomWebDesign,
    WebsiteRemodeling,
    WebsiteMaintenance,
    QuickStartWebsites,
}

struct AreaContent {
    title: &'static str,
    image: &'static str,
    tagline: &'static str,
    summary: &'static str,
    includes: &'static [&'static str],
}

impl ServiceArea {
    fn content(self) -> AreaContent {
        match self {
            ServiceArea::CustomWebDesign => AreaContent {
                title: "Custom Web Design",
                image: "/assets/images/customwebsites.jpg",
                tagline: "Tailored, high-impact websites crafted around your brand and built to convert.",
                summary: "We design and build your website from the ground up, shaped around your brand, your audience and the results you need.",
                includes: &[
                    "Brand-Led Design",
                    "UX Strategy",
                    "Responsive Layouts",
                    "SEO",
                    "Animations",
                    "Conversion Focus",
                ],
            },
            ServiceArea::WebsiteRemodeling => AreaContent {
                title: "Website Remodeling",
                image: "/assets/images/websiteremodeling.jpg",
                tagline: "Modernize your site without starting over. We revamp your existing website to boost performance, design, and conversions.",
                summary: "We take your existing website and give it a fresh, modern look with improved performance and user experience to help you convert more visitors into customers.",
                includes: &[
                    "Performance",
                    "Modern Redesign",
                    "Clean Code",
                    "SEO",
                    "UX",
                    "Mobile Optimization",
                    "Conversion Improvements",
                ],
            },
            ServiceArea::WebsiteMaintenance => AreaContent {
                title: "Website Maintenance",
                image: "/assets/images/websitemaintenance.jpg",
                tagline: "Keep your website running smoothly with our comprehensive maintenance services.",
                summary: "We provide ongoing support, updates, and security maintenance to keep your website running smoothly and effectively.",
                includes: &[
                    "Monitoring",
                    "Updates",
                    "Security Maintenance",
                    "Performance Optimization",
                    "Backup Services",
                    "Content Updates",
                    "Technical Support",
                ],
            },
            ServiceArea::QuickStartWebsites => AreaContent {
                title: "Quick Start Websites",
                image: "/assets/images/quicksite.jpg",
                tagline: "Professional websites launched quickly, perfect for startups and growing brands.",
                summary: "A proven layout tailored to your content, delivered in days so you can start taking customers straight away.",
                includes: &[
                    "Fast Turnaround",
                    "Proven Layouts",
                    "Mobile Ready",
                    "SEO Basics",
                    "Domain & Email Setup",
                ],
            },
        }
    }

    /// Booking form service preselected by this page's Get Started link.
    pub fn booking_service(self) -> Service {
        match self {
            ServiceArea::CustomWebDesign | ServiceArea::QuickStartWebsites => Service::CustomDesign,
            ServiceArea::WebsiteRemodeling => Service::Remodeling,
            ServiceArea::WebsiteMaintenance => Service::Maintenance,
        }
    }
}

const DELIVERABLES: [&str; 4] = [
    "Custom design & layout",
    "Responsive development",
    "SEO-friendly structure",
    "Launch-ready website",
];

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub area: ServiceArea,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let content = props.area.content();
    let get_started = contact_href(props.area.booking_service().key(), None);

    html! {
        <main class="service-detail">
            <section class="detail-hero">
                <img src={content.image} alt={content.title} />
                <div class="detail-hero-overlay"></div>
                <div class="detail-hero-text fade-in-up">
                    <h1>{content.title}</h1>
                    <p>{content.tagline}</p>
                </div>
            </section>

            <section class="detail-content">
                <div class="fade-in-up">
                    <h2>{"What This Service Includes"}</h2>
                    <p class="detail-summary">{content.summary}</p>
                    <ul class="detail-includes">
                        { for content.includes.iter().map(|item| html! { <li>{format!("• {}", item)}</li> }) }
                    </ul>
                </div>

                <div class="detail-panel fade-in-up" style="animation-delay: 0.1s;">
                    <h3>{"What You Get"}</h3>
                    <ul>
                        { for DELIVERABLES.iter().map(|item| html! { <li>{format!("→ {}", item)}</li> }) }
                    </ul>
                    <a href={get_started} class="cta-button">{"Get Started"}</a>
                </div>
            </section>
            <style>
                {r#"
                    .detail-hero {
                        position: relative;
                        height: 60vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .detail-hero img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .detail-hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .detail-hero-text {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1.5rem;
                        max-width: 48rem;
                    }
                    .detail-hero-text h1 {
                        font-size: 3.75rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .detail-hero-text p {
                        font-size: 1.125rem;
                        color: #d1d5db;
                    }
                    .detail-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 4rem;
                    }
                    .detail-content h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .detail-summary {
                        color: #d1d5db;
                        line-height: 1.75;
                        margin-bottom: 2rem;
                    }
                    .detail-includes, .detail-panel ul {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        color: #e5e7eb;
                    }
                    .detail-panel {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        padding: 2rem;
                    }
                    .detail-panel h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-bottom: 1.5rem;
                    }
                    .detail-panel .cta-button {
                        margin-top: 2.5rem;
                    }
                    @media (max-width: 768px) {
                        .detail-content {
                            grid-template-columns: 1fr;
                        }
                        .detail-hero-text h1 {
                            font-size: 2.25rem;
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
    fn test_get_started_preselects_bookable_service() {
        for area in [
            ServiceArea::CustomWebDesign,
            ServiceArea::WebsiteRemodeling,
            ServiceArea::WebsiteMaintenance,
            ServiceArea::QuickStartWebsites,
        ] {
            let service = area.booking_service();
            assert!(!service.packages().is_empty());
            assert!(!area.content().includes.is_empty());
        }
        assert_eq!(
            contact_href(ServiceArea::WebsiteMaintenance.booking_service().key(), None),
            "/contact?service=maintenance"
        );
    }
}
