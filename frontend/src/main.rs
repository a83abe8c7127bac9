use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod booking;
mod config;
mod components {
    pub mod carousel;
    pub mod fade;
    pub mod footer;
    pub mod hero;
    pub mod motion;
    pub mod navigation;
    pub mod toast;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod landing;
    pub mod not_found;
    pub mod packages;
    pub mod service_detail;
    pub mod services;
}

use components::{footer::Footer, navigation::Navbar};
use pages::{
    about::About,
    contact::Contact,
    landing::Landing,
    not_found::NotFound,
    packages::Packages,
    service_detail::{ServiceArea, ServiceDetail},
    services::Services,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/services/custom-web-design")]
    CustomWebDesign,
    #[at("/services/website-remodeling")]
    WebsiteRemodeling,
    #[at("/services/website-maintenance")]
    WebsiteMaintenance,
    #[at("/services/quick-start-websites")]
    QuickStartWebsites,
    #[at("/packages")]
    Packages,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    info!("Rendering {} page", routes.to_path());
    match routes {
        Route::Home => html! { <Landing /> },
        Route::About => html! { <About /> },
        Route::Services => html! { <Services /> },
        Route::CustomWebDesign => html! { <ServiceDetail area={ServiceArea::CustomWebDesign} /> },
        Route::WebsiteRemodeling => html! { <ServiceDetail area={ServiceArea::WebsiteRemodeling} /> },
        Route::WebsiteMaintenance => html! { <ServiceDetail area={ServiceArea::WebsiteMaintenance} /> },
        Route::QuickStartWebsites => html! { <ServiceDetail area={ServiceArea::QuickStartWebsites} /> },
        Route::Packages => html! { <Packages /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Global css={css!(
                r#"
                html, body {
                    margin: 0;
                    padding: 0;
                    font-family: "Urbanist", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    background: #000;
                    color: #fff;
                }
                main {
                    min-height: 100vh;
                    overflow: hidden;
                    background: linear-gradient(to bottom right, #111827, #000, #1f2937);
                }
                .parallax-hero {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .parallax-hero.hero-tall {
                    height: 65vh;
                }
                .parallax-hero.hero-short {
                    height: 60vh;
                }
                .parallax-bg {
                    position: absolute;
                    inset: 0;
                    will-change: transform;
                }
                .parallax-bg img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .parallax-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.4), rgba(0,0,0,0.7), rgba(0,0,0,0.9));
                }
                .parallax-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    max-width: 48rem;
                    padding: 0 1rem;
                }
                .parallax-content h1 {
                    font-size: 3.75rem;
                    font-weight: 800;
                    margin-bottom: 1rem;
                    letter-spacing: -0.025em;
                    filter: drop-shadow(0 0 20px rgba(36, 237, 162, 0.4));
                }
                .parallax-content p {
                    color: #d1d5db;
                    font-size: 1.125rem;
                }
                .card-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                }
                .glass-card {
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                    padding: 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s;
                }
                .cta-button {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(to right, #24eda2, #00a3f8);
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s;
                }
                .cta-button:hover {
                    transform: scale(1.05);
                }
                .fade-in-up {
                    animation: fadeInUp 0.8s ease-out both;
                }
                @media (max-width: 768px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                    .parallax-content h1 {
                        font-size: 2.25rem;
                    }
                }
                "#
            )} />
            <Navbar />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_detail_paths() {
        assert_eq!(
            Route::recognize("/services/website-remodeling"),
            Some(Route::WebsiteRemodeling)
        );
        assert_eq!(Route::QuickStartWebsites.to_path(), "/services/quick-start-websites");
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
    }

    #[test]
    fn test_not_found_fallback() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
