use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted out of frame."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{"Back to Home"}</Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        text-align: center;
                        padding: 8rem 1.5rem 4rem 1.5rem;
                    }
                    .not-found h1 {
                        font-size: 6rem;
                        font-weight: 800;
                    }
                    .not-found p {
                        color: #d1d5db;
                    }
                "#}
            </style>
        </main>
    }
}
