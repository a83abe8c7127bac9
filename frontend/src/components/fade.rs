use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInUpProps {
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Slides its children up into place once, after `delay` seconds.
#[function_component(FadeInUp)]
pub fn fade_in_up(props: &FadeInUpProps) -> Html {
    html! {
        <div class={classes!("fade-in-up", props.class.clone())} style={delay_style(props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

pub fn delay_style(delay: f64) -> String {
    format!("animation-delay: {:.2}s;", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_style() {
        assert_eq!(delay_style(0.0), "animation-delay: 0.00s;");
        assert_eq!(delay_style(0.15 * 2.0), "animation-delay: 0.30s;");
    }
}
