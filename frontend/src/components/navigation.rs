use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::config::{NAV_SCROLL_THRESHOLD, SITE_NAME};
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub route: Route,
    pub dropdown: Vec<(&'static str, Route)>,
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink {
            name: "Home",
            route: Route::Home,
            dropdown: vec![],
        },
        NavLink {
            name: "Services",
            route: Route::Services,
            dropdown: vec![
                ("Custom Web Design", Route::CustomWebDesign),
                ("Website Remodeling", Route::WebsiteRemodeling),
                ("Website Maintenance", Route::WebsiteMaintenance),
                ("Quick Start Websites", Route::QuickStartWebsites),
            ],
        },
        NavLink {
            name: "Packages",
            route: Route::Packages,
            dropdown: vec![],
        },
        NavLink {
            name: "About",
            route: Route::About,
            dropdown: vec![],
        },
        NavLink {
            name: "Contact",
            route: Route::Contact,
            dropdown: vec![],
        },
    ]
}

/// Open/closed state of the burger menu and of the one dropdown that may be
/// expanded at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub dropdown: Option<&'static str>,
}

impl MenuState {
    pub fn hover(self, name: &'static str) -> Self {
        Self {
            dropdown: Some(name),
            ..self
        }
    }

    pub fn leave(self) -> Self {
        Self {
            dropdown: None,
            ..self
        }
    }

    pub fn toggle_dropdown(self, name: &'static str) -> Self {
        let dropdown = if self.dropdown == Some(name) { None } else { Some(name) };
        Self { dropdown, ..self }
    }

    pub fn toggle_mobile(self) -> Self {
        Self {
            mobile_open: !self.mobile_open,
            ..self
        }
    }

    pub fn navigated(self) -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.dropdown == Some(name)
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(MenuState::default);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    let update = |f: fn(MenuState) -> MenuState| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(f(*menu)))
    };
    let toggle_mobile = update(MenuState::toggle_mobile);
    let close_all = update(MenuState::navigated);
    let leave = update(MenuState::leave);

    let links = nav_links();

    let desktop = links.iter().map(|link| {
        if link.dropdown.is_empty() {
            return html! {
                <Link<Route> to={link.route.clone()} classes="nav-link">{link.name}</Link<Route>>
            };
        }
        let name = link.name;
        let onmouseenter = {
            let menu = menu.clone();
            Callback::from(move |_: MouseEvent| menu.set(menu.hover(name)))
        };
        let expanded = menu.is_expanded(name);
        html! {
            <div class="nav-dropdown" {onmouseenter} onmouseleave={leave.clone()}>
                <div onclick={close_all.clone()}>
                    <Link<Route> to={link.route.clone()} classes="nav-link">{name}</Link<Route>>
                </div>
                if expanded {
                    <div class="dropdown-menu" role="menu">
                        { for link.dropdown.iter().map(|(label, route)| html! {
                            <div role="menuitem" onclick={close_all.clone()}>
                                <Link<Route> to={route.clone()} classes="dropdown-item">{*label}</Link<Route>>
                            </div>
                        }) }
                    </div>
                }
            </div>
        }
    });

    let mobile = links.iter().map(|link| {
        if link.dropdown.is_empty() {
            return html! {
                <div onclick={close_all.clone()}>
                    <Link<Route> to={link.route.clone()} classes="mobile-link">{link.name}</Link<Route>>
                </div>
            };
        }
        let name = link.name;
        let toggle = {
            let menu = menu.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu.set(menu.toggle_dropdown(name));
            })
        };
        let expanded = menu.is_expanded(name);
        html! {
            <div class="mobile-group">
                <button class="mobile-link" aria-expanded={expanded.to_string()} onclick={toggle}>
                    {name}
                </button>
                if expanded {
                    <div class="mobile-dropdown">
                        { for link.dropdown.iter().map(|(label, route)| html! {
                            <div onclick={close_all.clone()}>
                                <Link<Route> to={route.clone()} classes="mobile-sublink">{*label}</Link<Route>>
                            </div>
                        }) }
                    </div>
                }
            </div>
        }
    });

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/eccentriclogo.png" alt={format!("{} Logo", SITE_NAME)} />
                </Link<Route>>

                <div class="nav-links">
                    { for desktop }
                    <Link<Route> to={Route::Contact} classes="nav-cta">
                        {"Book Consultation"}
                    </Link<Route>>
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_mobile}>
                    if menu.mobile_open {
                        {"✕"}
                    } else {
                        <span></span>
                        <span></span>
                        <span></span>
                    }
                </button>
            </div>

            if menu.mobile_open {
                <div class="mobile-menu">
                    { for mobile }
                    <div onclick={close_all.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">
                            {"Book Consultation"}
                        </Link<Route>>
                    </div>
                </div>
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: background-color 0.5s ease, border-color 0.5s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid #121212;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo img {
                        height: 3rem;
                        width: auto;
                        transition: transform 0.3s ease-in-out;
                    }
                    .nav-logo img:hover {
                        transform: scale(1.05);
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-link {
                        color: #fff;
                        font-size: 11pt;
                        font-weight: 500;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        transition: color 0.3s;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #24eda2;
                    }
                    .nav-dropdown {
                        position: relative;
                    }
                    .dropdown-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        margin-top: 0.5rem;
                        width: 12rem;
                        border-radius: 0.5rem;
                        background: rgba(0, 0, 0, 0.95);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        overflow: hidden;
                        animation: dropIn 0.3s ease-out;
                    }
                    .dropdown-item {
                        display: block;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        font-size: 10pt;
                        text-decoration: none;
                    }
                    .dropdown-item:hover {
                        background: rgba(0, 163, 248, 0.8);
                    }
                    @keyframes dropIn {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .nav-cta {
                        margin-left: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to right, #24eda2, #00a3f8);
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.3s;
                    }
                    .nav-cta:hover {
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #f3f4f6;
                        cursor: pointer;
                        z-index: 10;
                    }
                    .burger-menu span {
                        display: block;
                        width: 1.75rem;
                        height: 2px;
                        margin: 6px 0;
                        background: currentColor;
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 75%;
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                        padding: 5rem 0;
                        background: rgba(0, 0, 0, 0.9);
                        backdrop-filter: blur(24px);
                        animation: slideFromRight 0.4s ease-out;
                    }
                    .mobile-group, .mobile-dropdown {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .mobile-link {
                        font-size: 1.125rem;
                    }
                    .mobile-sublink {
                        color: #fff;
                        text-decoration: none;
                    }
                    .mobile-sublink:hover {
                        color: #24eda2;
                    }
                    @keyframes slideFromRight {
                        from { opacity: 0; transform: translateX(100%); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_dropdown_lists_detail_pages() {
        let links = nav_links();
        let services = links.iter().find(|l| l.name == "Services").unwrap();
        let routes: Vec<Route> = services.dropdown.iter().map(|(_, r)| r.clone()).collect();
        assert!(routes == vec![
            Route::CustomWebDesign,
            Route::WebsiteRemodeling,
            Route::WebsiteMaintenance,
            Route::QuickStartWebsites,
        ]);
        assert_eq!(links.iter().filter(|l| !l.dropdown.is_empty()).count(), 1);
    }

    #[test]
    fn test_top_level_pages() {
        let names: Vec<&str> = nav_links().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Home", "Services", "Packages", "About", "Contact"]);
    }

    #[test]
    fn test_one_dropdown_at_a_time() {
        let menu = MenuState::default().hover("Services");
        assert!(menu.is_expanded("Services"));
        let menu = menu.toggle_dropdown("Other");
        assert!(!menu.is_expanded("Services"));
        assert!(menu.is_expanded("Other"));
        assert!(!menu.leave().is_expanded("Other"));
    }

    #[test]
    fn test_toggle_dropdown_closes_when_open() {
        let menu = MenuState::default().toggle_dropdown("Services");
        assert!(menu.is_expanded("Services"));
        assert_eq!(menu.toggle_dropdown("Services").dropdown, None);
    }

    #[test]
    fn test_navigation_closes_everything() {
        let menu = MenuState::default().toggle_mobile().toggle_dropdown("Services");
        assert!(menu.mobile_open);
        assert_eq!(menu.navigated(), MenuState::default());
    }
}
