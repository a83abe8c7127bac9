use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fade::FadeInUp;
use crate::components::hero::ParallaxHero;
use crate::Route;

const VALUES: [(&str, &str); 3] = [
    (
        "Innovation",
        "We embrace modern frameworks, cinematic motion, and forward-thinking design to keep brands ahead of the curve.",
    ),
    (
        "Reliability",
        "Performance, security, and stability come first, with proactive maintenance and real-world reliability.",
    ),
    (
        "Transformation",
        "We turn outdated sites into modern, immersive platforms that drive attention and results.",
    ),
];

const TEAM: [(&str, &str, &str); 3] = [
    ("Rodique", "Creative Director", "/assets/images/team-rodique.jpg"),
    ("Sophia", "Lead Designer", "/assets/images/team-sophia.jpg"),
    ("David", "Frontend Engineer", "/assets/images/team-david.jpg"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <main class="about-page">
            <ParallaxHero
                image="/assets/images/backdrop.png"
                alt="About Us"
                title="About Us"
                subtitle="We don’t just build websites. We craft immersive digital experiences that elevate brands and tell unforgettable stories."
            />

            <section class="about-story">
                <FadeInUp>
                    <h2>{"Our Story"}</h2>
                </FadeInUp>
                <FadeInUp delay={0.1}>
                    <p>
                        {"Founded on the belief that every brand deserves a digital presence as bold as its vision, we blend strategy, design, and technology to create cinematic web experiences. From custom web design and website remodeling to reliable maintenance and quick-start launches, our mission has always been simple: build digital platforms that look incredible, perform flawlessly, and grow with you."}
                    </p>
                </FadeInUp>
            </section>

            <section class="about-values">
                <FadeInUp>
                    <h2>{"Our Values"}</h2>
                </FadeInUp>
                <div class="card-grid">
                    { for VALUES.iter().enumerate().map(|(i, (title, desc))| html! {
                        <FadeInUp delay={i as f64 * 0.15} class="glass-card lift">
                            <h3>{*title}</h3>
                            <p>{*desc}</p>
                        </FadeInUp>
                    }) }
                </div>
            </section>

            <section class="about-team">
                <FadeInUp>
                    <h2>{"Meet the Team"}</h2>
                </FadeInUp>
                <div class="card-grid">
                    { for TEAM.iter().enumerate().map(|(i, (name, role, image))| html! {
                        <FadeInUp delay={i as f64 * 0.15} class="glass-card grow">
                            <img class="team-photo" src={*image} alt={*name} />
                            <h3>{*name}</h3>
                            <p class="team-role">{*role}</p>
                        </FadeInUp>
                    }) }
                </div>
            </section>

            <section class="about-cta">
                <FadeInUp>
                    <h2>{"Ready to Build Something Exceptional?"}</h2>
                </FadeInUp>
                <FadeInUp delay={0.1}>
                    <p>{"Let’s transform your vision into a cinematic digital experience that performs as beautifully as it looks."}</p>
                </FadeInUp>
                <FadeInUp delay={0.2}>
                    <Link<Route> to={Route::Contact} classes="cta-button">{"Start Your Project"}</Link<Route>>
                </FadeInUp>
            </section>
            <style>
                {r#"
                    .about-story {
                        padding: 5rem 1.5rem;
                        max-width: 64rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .about-story p {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        line-height: 1.75;
                    }
                    .about-page h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .about-values {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(to top right, #111827, #000, #1f2937);
                    }
                    .about-team {
                        padding: 5rem 1.5rem;
                        text-align: center;
                    }
                    .team-photo {
                        width: 10rem;
                        height: 10rem;
                        border-radius: 9999px;
                        object-fit: cover;
                        margin: 0 auto 1.5rem auto;
                        display: block;
                    }
                    .team-role {
                        color: #9ca3af;
                    }
                    .lift:hover {
                        transform: translateY(-6px);
                    }
                    .grow:hover {
                        transform: scale(1.05);
                    }
                    .about-cta {
                        padding: 6rem 1.5rem;
                        text-align: center;
                        background: linear-gradient(to bottom, #000, #111827);
                    }
                    .about-cta p {
                        color: #d1d5db;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem auto;
                    }
                "#}
            </style>
        </main>
    }
}
