use yew::prelude::*;
use yew_hooks::use_window_scroll;

use super::motion::parallax_offset;

#[derive(Properties, PartialEq)]
pub struct ParallaxHeroProps {
    pub image: AttrValue,
    pub alt: AttrValue,
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::Static("hero-tall"))]
    pub size: AttrValue,
}

/// Full-width page header whose background drifts up as the page scrolls.
#[function_component(ParallaxHero)]
pub fn parallax_hero(props: &ParallaxHeroProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let offset = parallax_offset(scroll_y);

    html! {
        <section class={classes!("parallax-hero", props.size.to_string())}>
            <div class="parallax-bg" style={format!("transform: translateY({:.1}px);", offset)}>
                <img src={props.image.clone()} alt={props.alt.clone()} />
            </div>
            <div class="parallax-overlay"></div>
            <div class="parallax-content fade-in-up">
                <h1>{props.title.clone()}</h1>
                <p>{props.subtitle.clone()}</p>
            </div>
        </section>
    }
}
