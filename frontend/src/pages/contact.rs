use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::catalog::Service;
use crate::booking::draft::{BookingAction, BookingDraft, Field};
use crate::booking::notification::{
    dismissal, Notification, NotificationAction, NotificationCenter,
};
use crate::booking::prefill::PrefillParams;
use crate::booking::view::{self, BookingView};
use crate::components::fade::FadeInUp;
use crate::components::hero::ParallaxHero;
use crate::components::toast::Toast;

#[function_component(Contact)]
pub fn contact() -> Html {
    let draft = use_reducer(BookingDraft::default);
    let notifications = use_reducer(NotificationCenter::default);
    let tickets = use_mut_ref(|| 0u64);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);

    // Seed the form from ?service=...&package=... on mount and whenever the
    // query string changes. Keyed on the query only, so edits never re-run it.
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |query: &String| {
                let params = PrefillParams::parse(query);
                if !params.is_empty() {
                    info!("Prefilling booking form from {:?}", params);
                    for action in params.into_actions() {
                        draft.dispatch(action);
                    }
                }
                || ()
            },
            query,
        );
    }

    {
        let dismiss_timer = dismiss_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    dismiss_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_text = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(BookingAction::Set(field, input.value()));
        })
    };

    let on_service = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.dispatch(BookingAction::Set(Field::Service, select.value()));
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            draft.dispatch(BookingAction::Set(Field::Message, textarea.value()));
        })
    };

    let choose = |field: Field, value: String| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.dispatch(BookingAction::Set(field, value.clone()));
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let notifications = notifications.clone();
        let dismiss_timer = dismiss_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!(
                "Consultation request submitted (service: {:?}, date: {:?}, time: {:?})",
                draft.service_key(),
                draft.date,
                draft.time
            );

            let ticket = {
                let mut last = tickets.borrow_mut();
                *last += 1;
                *last
            };
            notifications.dispatch(NotificationAction::Raise {
                ticket,
                notification: Notification::submitted(),
            });

            // Replacing the handle drops, and so cancels, any pending dismissal.
            let dispatcher = notifications.dispatcher();
            let (delay_ms, expire) = dismissal(ticket);
            *dismiss_timer.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                dispatcher.dispatch(expire);
            }));
        })
    };

    let booking_view = BookingView::derive(&draft);
    debug!(
        "Booking stage: {:?}",
        view::stage(&draft, notifications.current().is_some())
    );
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    html! {
        <main class="contact-page">
            <Toast notification={notifications.current().cloned()} />

            <ParallaxHero
                image="/assets/images/backdrop.png"
                alt="Contact"
                title="Let’s Talk"
                subtitle="Book a consultation and let’s bring your digital vision to life."
                size="hero-short"
            />

            <section class="booking">
                <FadeInUp>
                    <div class="booking-card">
                        <div class="booking-intro">
                            <h2>{"Secure Your Spot for a Custom Website That Converts"}</h2>
                            <p>{"Select your service, choose a package, and schedule a consultation. We’ll craft a website that grows your brand and drives results."}</p>
                        </div>
                        <form class="booking-form" onsubmit={on_submit}>
                            <input
                                name="name"
                                placeholder="Your Name"
                                value={draft.name.clone()}
                                oninput={on_text(Field::Name)}
                            />
                            <input
                                name="email"
                                placeholder="Your Email"
                                value={draft.email.clone()}
                                oninput={on_text(Field::Email)}
                            />

                            <select name="service" onchange={on_service}>
                                <option value="" selected={draft.service.is_none()}>{"Select a Service"}</option>
                                { for Service::ALL.iter().map(|service| html! {
                                    <option value={service.key()} selected={draft.service == Some(*service)}>
                                        {service.label()}
                                    </option>
                                }) }
                            </select>

                            if let Some(packages) = &booking_view.packages {
                                <div class="package-choices">
                                    <p class="choice-label">{"Choose a package"}</p>
                                    <div class="choice-grid two">
                                        { for packages.iter().map(|choice| html! {
                                            <button
                                                type="button"
                                                key={choice.label.clone()}
                                                class={classes!("choice", choice.selected.then(|| "selected"))}
                                                onclick={choose(Field::Package, choice.label.clone())}
                                            >
                                                {choice.label.clone()}
                                            </button>
                                        }) }
                                    </div>
                                </div>
                            }

                            <input
                                type="date"
                                name="date"
                                min={today}
                                value={draft.date.clone()}
                                oninput={on_text(Field::Date)}
                            />

                            if let Some(slots) = &booking_view.slots {
                                <div class="choice-grid four">
                                    { for slots.iter().map(|choice| html! {
                                        <button
                                            type="button"
                                            key={choice.label.clone()}
                                            class={classes!("choice", "slot", choice.selected.then(|| "selected"))}
                                            onclick={choose(Field::Time, choice.label.clone())}
                                        >
                                            {choice.label.clone()}
                                        </button>
                                    }) }
                                </div>
                            }

                            <textarea
                                name="message"
                                rows="5"
                                placeholder="Tell us about your project (optional)"
                                value={draft.message.clone()}
                                oninput={on_message}
                            />

                            <button type="submit" class="submit-button">{"Send Request"}</button>
                        </form>
                    </div>
                </FadeInUp>
            </section>
            <style>
                {r#"
                    .booking {
                        padding: 5rem 1rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .booking-card {
                        background: rgba(0, 0, 0, 0.7);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                        padding: 2rem;
                        backdrop-filter: blur(24px);
                    }
                    .booking-intro {
                        text-align: center;
                        margin-bottom: 1.25rem;
                    }
                    .booking-intro h2 {
                        font-size: 1.875rem;
                        font-weight: 800;
                        margin-bottom: 1rem;
                    }
                    .booking-intro p {
                        font-size: 0.875rem;
                        color: #4ade80;
                    }
                    .booking-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .booking-form input,
                    .booking-form select,
                    .booking-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        background: rgba(0, 0, 0, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                        outline: none;
                        transition: border-color 0.3s, box-shadow 0.3s;
                        box-sizing: border-box;
                        font-family: inherit;
                    }
                    .booking-form input:focus,
                    .booking-form select:focus,
                    .booking-form textarea:focus {
                        border-color: #24eda2;
                        box-shadow: 0 0 0 1px #24eda2;
                    }
                    .choice-label {
                        font-size: 0.875rem;
                        color: #9ca3af;
                        margin-bottom: 0.75rem;
                    }
                    .choice-grid {
                        display: grid;
                        gap: 0.75rem;
                    }
                    .choice-grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .choice-grid.four {
                        grid-template-columns: repeat(4, 1fr);
                    }
                    .choice {
                        padding: 0.75rem 0;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: transparent;
                        color: #fff;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: border-color 0.3s, background 0.3s;
                    }
                    .choice.slot {
                        padding: 0.5rem 0;
                    }
                    .choice:hover {
                        border-color: #24eda2;
                    }
                    .choice.selected {
                        background: #24eda2;
                        border-color: #24eda2;
                        color: #000;
                    }
                    .submit-button {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: none;
                        background: linear-gradient(to right, #24eda2, #00a3f8);
                        color: #000;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    @media (max-width: 640px) {
                        .choice-grid.two {
                            grid-template-columns: 1fr;
                        }
                        .choice-grid.four {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </main>
    }
}
