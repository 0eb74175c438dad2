use chrono::Datelike;
use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::contact_form::{ContactForm, SubmitterHandle};
use crate::config::SiteConfig;
use crate::contact::services::SERVICES;
use crate::contact::submit::submitter_for;
use crate::reveal::{RevealObserver, REVEAL_SELECTORS};

const PORTFOLIO: &[(&str, &str)] = &[
    ("Інтернет-магазин кераміки", "E-commerce"),
    ("Сайт для стоматологічної клініки", "Веб-розробка"),
    ("Ребрендинг кав'ярні", "Дизайн"),
    ("Кампанія для фестивалю", "Маркетинг"),
];

const TEAM: &[(&str, &str)] = &[
    ("Андрій Коваль", "Керівник проєктів"),
    ("Марія Шевчук", "UI/UX дизайнерка"),
    ("Ігор Мельник", "Full-stack розробник"),
];

const REVIEWS: &[(&str, &str)] = &[
    ("Оксана, власниця кав'ярні", "Новий сайт приніс нам удвічі більше замовлень онлайн."),
    ("Дмитро, клініка «Усмішка»", "Все вчасно, зрозуміло і без зайвих питань."),
    ("Наталія, фестиваль «Лан»", "Кампанія перевершила всі наші очікування."),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let submitter = {
        let config = props.config.clone();
        use_state(move || SubmitterHandle(submitter_for(&config)))
    };

    // Cards are in the DOM once this runs; hide them and reveal on scroll.
    {
        let threshold = props.config.reveal_threshold;
        use_effect_with_deps(
            move |_| {
                let observer = RevealObserver::attach(REVEAL_SELECTORS, threshold);
                move || drop(observer)
            },
            (),
        );
    }

    let header_offset = props.config.header_offset_px;
    let year = chrono::Local::now().year();

    html! {
        <main class="landing">
            <section id="home" class="hero">
                <div class="container">
                    <h1>{"Сайти, що працюють на ваш бізнес"}</h1>
                    <p>{"Проєктуємо, розробляємо та просуваємо сайти для малого й середнього бізнесу."}</p>
                    <AnchorLink href="#contact" class={classes!("btn", "btn-primary")} header_offset={header_offset}>
                        {"Обговорити проєкт"}
                    </AnchorLink>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2>{"Послуги"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <h3>{service.label}</h3>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="portfolio" class="portfolio">
                <div class="container">
                    <h2>{"Портфоліо"}</h2>
                    <div class="portfolio-grid">
                        { for PORTFOLIO.iter().map(|(title, category)| html! {
                            <div class="portfolio-item">
                                <span class="portfolio-category">{*category}</span>
                                <h3>{*title}</h3>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="team" class="team">
                <div class="container">
                    <h2>{"Команда"}</h2>
                    <div class="team-grid">
                        { for TEAM.iter().map(|(name, role)| html! {
                            <div class="team-member">
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="reviews" class="reviews">
                <div class="container">
                    <h2>{"Відгуки"}</h2>
                    <div class="reviews-grid">
                        { for REVIEWS.iter().map(|(author, text)| html! {
                            <div class="review-card">
                                <p>{*text}</p>
                                <span class="review-author">{*author}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2>{"Зв'яжіться з нами"}</h2>
                    <ContactForm submitter={(*submitter).clone()} />
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>{format!("© {} Промінь. Всі права захищено.", year)}</p>
                </div>
            </footer>

            <style>
                {r#"
                .container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }
                .header { position: fixed; top: 0; left: 0; right: 0; z-index: 1000; transition: all 0.3s ease; }
                .nav-container { display: flex; align-items: center; justify-content: space-between; height: 80px; }
                .nav-links { display: flex; gap: 2rem; list-style: none; }
                .menu-toggle { display: none; background: none; border: none; font-size: 1.5rem; cursor: pointer; }
                .hero { padding: 160px 0 100px; text-align: center; }
                section { padding: 80px 0; }
                .services-grid, .portfolio-grid, .team-grid, .reviews-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 2rem;
                }
                .service-card, .portfolio-item, .team-member, .review-card {
                    padding: 2rem;
                    border-radius: 12px;
                    background: #ffffff;
                    box-shadow: 0 5px 20px rgba(0,0,0,0.08);
                }
                .contact-form { display: flex; flex-direction: column; gap: 1rem; max-width: 640px; margin: 0 auto; }
                .form-row { display: flex; gap: 1rem; }
                .form-row > * { flex: 1; }
                .btn-primary:disabled { opacity: 0.7; cursor: wait; }
                @media (max-width: 768px) {
                    .menu-toggle { display: block; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 80px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #ffffff;
                        padding: 1rem 20px;
                    }
                    .nav-links.active { display: flex; }
                    .form-row { flex-direction: column; }
                }
                "#}
            </style>
        </main>
    }
}
