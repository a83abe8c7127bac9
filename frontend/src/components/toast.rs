use stylist::yew::styled_component;
use yew::prelude::*;

use crate::booking::notification::Notification;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notification: Option<Notification>,
}

#[styled_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notification) = &props.notification else {
        return html! {};
    };

    let style = css!(
        r#"
        position: fixed;
        top: 1.5rem;
        right: 1.5rem;
        z-index: 60;
        padding: 1rem 1.5rem;
        border-radius: 0.75rem;
        backdrop-filter: blur(24px);
        animation: toastIn 0.3s ease-out;

        &.success {
            background: rgba(36, 237, 162, 0.9);
            border: 1px solid #24eda2;
            color: #000;
        }
    "#
    );

    html! {
        <div class={classes!(style, notification.kind.class())} role="status" aria-live="polite">
            {notification.message.clone()}
        </div>
    }
}
