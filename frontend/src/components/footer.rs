use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::Route;

const SOCIALS: [(&str, &str, &str); 3] = [
    ("Twitter", "https://twitter.com", "twitter"),
    ("LinkedIn", "https://linkedin.com", "linkedin"),
    ("Instagram", "https://instagram.com", "instagram"),
];

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand fade-in-up">
                    <img src="/assets/eccentriclogowhite.png" alt="Logo" />
                </div>

                <nav class="footer-explore fade-in-up" style="animation-delay: 0.2s;">
                    <h3>{"Explore"}</h3>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Packages}>{"Packages"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                </nav>

                <div class="footer-connect fade-in-up" style="animation-delay: 0.4s;">
                    <h3>{"Connect"}</h3>
                    <div class="socials">
                        { for SOCIALS.iter().map(|(name, href, class)| html! {
                            <a href={*href} class={classes!("social", *class)} target="_blank" rel="noopener noreferrer">
                                {*name}
                            </a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                {copyright(year)}
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        background: linear-gradient(to bottom right, rgba(0,0,0,0.8), rgba(17,24,39,0.8), rgba(0,0,0,0.9));
                        backdrop-filter: blur(24px);
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .footer-explore {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-explore a {
                        color: #fff;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .footer-explore a:hover {
                        color: #24eda2;
                    }
                    .site-footer h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s, transform 0.3s;
                    }
                    .social:hover {
                        transform: scale(1.1);
                    }
                    .social.twitter:hover { color: #00a3f8; }
                    .social.linkedin:hover { color: #24eda2; }
                    .social.instagram:hover { color: #f472b6; }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        text-align: center;
                        padding: 1.5rem 0;
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .footer-explore, .footer-connect, .footer-brand {
                            align-items: center;
                        }
                        .socials {
                            justify-content: center;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2026), "© 2026 Eccentric Digital. All rights reserved.");
    }
}
