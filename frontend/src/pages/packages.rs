use yew::prelude::*;

use crate::booking::catalog::Service;
use crate::booking::prefill::contact_href;
use crate::components::hero::ParallaxHero;

pub struct PackageCard {
    pub title: &'static str,
    pub service: Service,
    pub description: &'static str,
    pub image: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub static PACKAGES: [PackageCard; 3] = [
    PackageCard {
        title: "Business Professional",
        service: Service::CustomDesign,
        description: "Custom websites made simple. Fast, sleek, and designed to turn clicks into customers.",
        image: "/assets/images/businesspro.jpg",
        price: "$200",
        features: &[
            "Custom Design",
            "SEO Optimization",
            "1 Domain Name",
            "1 Business Email",
            "1 Month Free Hosting",
            "1-3 Days Delivery (Approx)",
            "Reliable Support",
        ],
        featured: false,
    },
    PackageCard {
        title: "E-commerce & Engagement",
        service: Service::Ecommerce,
        description: "Launch a custom eCommerce store designed to sell, scale, and delight your customers.",
        image: "/assets/images/ecommerce.jpg",
        price: "$350",
        features: &[
            "Custom Design",
            "SEO Optimization",
            "1 Domain Name",
            "1 Business Email",
            "1 Month Free Maintenance",
            "3 Month Free Hosting",
            "3-7 Days Delivery (Approx)",
            "Reliable Support",
        ],
        featured: true,
    },
    PackageCard {
        title: "Legacy Impact",
        service: Service::CustomDesign,
        description: "Elevate your online presence with a website tailored to your brand. Seamless design, flawless performance, maximum impact.",
        image: "/assets/images/legacyimpact.jpg",
        price: "$500",
        features: &[
            "Custom Design",
            "SEO Optimization",
            "Unlimited Domain Names",
            "Unlimited Business Emails",
            "3 Month Free Maintenance",
            "3 Month Free Hosting",
            "7-14 Days Delivery (Approx)",
            "Advanced Animations",
            "Brand Strategy",
            "Priority Support",
        ],
        featured: false,
    },
];

const COMPARISON: [(&str, [bool; 3]); 9] = [
    ("Custom Design", [true, true, true]),
    ("SEO Optimization", [true, true, true]),
    ("Responsive Layout", [true, true, true]),
    ("Domain Name", [true, true, true]),
    ("Business Email", [true, true, true]),
    ("Advanced Animations", [false, false, true]),
    ("Free Maintenance", [false, true, true]),
    ("Free Hosting", [false, true, true]),
    ("Priority Support", [false, false, true]),
];

impl PackageCard {
    pub fn get_started_href(&self) -> String {
        contact_href(self.service.key(), Some(self.title))
    }
}

#[function_component(Packages)]
pub fn packages() -> Html {
    let show_comparison = use_state(|| false);

    let toggle = {
        let show_comparison = show_comparison.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_comparison.set(!*show_comparison);
        })
    };

    html! {
        <main class="packages-page">
            <ParallaxHero
                image="/assets/images/backdrop.png"
                alt="Packages"
                title="Pricing Packages"
                subtitle="Flexible pricing for fast launches, scalable growth, and premium digital experiences."
            />

            <section class="package-grid">
                { for PACKAGES.iter().map(|pkg| html! {
                    <div class={classes!("package-card", pkg.featured.then(|| "featured"))}>
                        if pkg.featured {
                            <span class="popular-tag">{"Most Popular"}</span>
                        }
                        <img src={pkg.image} alt={pkg.title} />
                        <div class="package-body">
                            <h3>{pkg.title}</h3>
                            <p class="package-description">{pkg.description}</p>
                            <ul>
                                { for pkg.features.iter().map(|f| html! { <li>{format!("• {}", f)}</li> }) }
                            </ul>
                            <div class="package-footer">
                                <span class="price">{pkg.price}<span class="currency">{" USD"}</span></span>
                                <a href={pkg.get_started_href()} class="get-started">{"Get Started"}</a>
                            </div>
                        </div>
                    </div>
                }) }
            </section>

            <div class="comparison-toggle">
                <button onclick={toggle}>
                    { if *show_comparison { "Hide full comparison ↑" } else { "Compare all features ↓" } }
                </button>
            </div>

            if *show_comparison {
                <div class="comparison fade-in-up">
                    <table>
                        <thead>
                            <tr>
                                <th class="feature-col">{"Feature"}</th>
                                { for PACKAGES.iter().map(|pkg| html! {
                                    <th class={classes!(pkg.featured.then(|| "featured"))}>{pkg.title}</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for COMPARISON.iter().map(|(feature, included)| html! {
                                <tr>
                                    <td class="feature-col">{*feature}</td>
                                    { for included.iter().map(|yes| html! {
                                        <td>{ if *yes { "✔" } else { "—" } }</td>
                                    }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            }
            <style>
                {r#"
                    .package-grid {
                        padding: 5rem 1rem 0 1rem;
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                    }
                    .package-card {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        border-radius: 1rem;
                        overflow: hidden;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
                        transition: transform 0.4s;
                    }
                    .package-card:hover {
                        transform: scale(1.03) perspective(1000px) rotateX(3deg) rotateY(-3deg);
                    }
                    .package-card.featured {
                        border-color: #24eda2;
                        background: rgba(0, 0, 0, 0.7);
                    }
                    .popular-tag {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        font-size: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #24eda2;
                        color: #000;
                        font-weight: 600;
                    }
                    .package-card img {
                        width: 100%;
                        height: 14rem;
                        object-fit: cover;
                    }
                    .package-body {
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        flex-grow: 1;
                    }
                    .package-body h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 0.5rem;
                    }
                    .package-description {
                        color: #d1d5db;
                        font-size: 0.875rem;
                        margin-bottom: 1rem;
                    }
                    .package-body ul {
                        list-style: none;
                        padding: 0;
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin-bottom: 1.5rem;
                    }
                    .package-footer {
                        margin-top: auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .price {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #24eda2;
                    }
                    .currency {
                        font-size: 0.875rem;
                    }
                    .get-started {
                        padding: 0.5rem 1.25rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to right, #24eda2, #00a3f8);
                        color: #000;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.3s;
                    }
                    .get-started:hover {
                        transform: scale(1.05);
                    }
                    .comparison-toggle {
                        text-align: center;
                        margin-top: 5rem;
                    }
                    .comparison-toggle button {
                        background: none;
                        border: none;
                        color: #24eda2;
                        font-size: 0.875rem;
                        cursor: pointer;
                        margin-bottom: 2.5rem;
                    }
                    .comparison-toggle button:hover {
                        text-decoration: underline;
                    }
                    .comparison {
                        max-width: 64rem;
                        margin: 3rem auto 2.5rem auto;
                        padding: 0 1rem;
                        overflow-x: auto;
                    }
                    .comparison table {
                        width: 100%;
                        font-size: 0.875rem;
                        border-collapse: collapse;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .comparison thead {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .comparison th, .comparison td {
                        padding: 1rem;
                        text-align: center;
                    }
                    .comparison th.featured {
                        color: #24eda2;
                    }
                    .comparison .feature-col {
                        text-align: left;
                        color: #d1d5db;
                    }
                    .comparison tbody tr {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    @media (max-width: 1024px) {
                        .package-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .package-grid {
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
    use crate::booking::prefill::PrefillParams;

    #[test]
    fn test_every_package_is_bookable_for_its_service() {
        for pkg in PACKAGES.iter() {
            assert!(pkg.service.offers(pkg.title), "{} not offered", pkg.title);
        }
    }

    #[test]
    fn test_get_started_links_prefill_contact_form() {
        let pkg = &PACKAGES[1];
        let href = pkg.get_started_href();
        let (path, query) = href.split_once('?').unwrap();
        assert_eq!(path, "/contact");
        let params = PrefillParams::parse(query);
        assert_eq!(params.service.as_deref(), Some("ecommerce"));
        assert_eq!(params.package.as_deref(), Some("E-commerce & Engagement"));
    }

    #[test]
    fn test_comparison_has_a_column_per_package() {
        assert_eq!(PACKAGES.len(), COMPARISON[0].1.len());
        assert_eq!(PACKAGES.iter().filter(|p| p.featured).count(), 1);
    }
}
