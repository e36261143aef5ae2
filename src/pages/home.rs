use yew::prelude::*;

use crate::components::subscribe::SubscribeForm;
use crate::config;
use crate::hooks::scroll_reveal::use_scroll_reveal;

const INCLUDED: &[&str] = &[
    "Accommodation for 7 nights in a beautiful villa surrounded by nature",
    "Delicious meals - nourishing brunch, dinner and snacks prepared daily by our private chef",
    "Daily yoga classes, morning and evening, to help you reconnect with your body and mind",
    "Breath work and meditation sessions to deepen your awareness and help you to let go",
];

const ACTIVITIES: &[&str] = &[
    "Cold plunge",
    "Temezcal (a traditional sweat lodge)",
    "Surf lessons with private instructors",
    "Sunset horseback riding on the beach",
    "Trip to Montezuma waterfalls",
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_reveal();

    html! {
        <div class="home-page">
            <section id="hero" class="hero">
                <div class="hero-inner">
                    <p class="hero-kicker">{"Lumi Soulscape"}</p>
                    <h1>{"Yoga Retreat"}</h1>
                    <p class="hero-place">{"Santa Teresa, Costa Rica"}</p>
                    <p class="hero-dates">{"24.01 - 31.01.2026"}</p>
                </div>
                <div class="scroll-indicator">
                    <span></span>
                </div>
            </section>

            <section id="subscribe" class="section">
                <div class="section-inner narrow scroll-fade-in">
                    <h2>{"Stay in the loop"}</h2>
                    <p>
                        {"Leave your name and email and we'll send you the full retreat \
                          offer, early-bird pricing and news about future retreats."}
                    </p>
                    <SubscribeForm />
                </div>
            </section>

            <section id="about" class="section alternate">
                <div class="section-inner narrow scroll-fade-in">
                    <h2>{"Who is it for?"}</h2>
                    <p>
                        {"Our Yoga Retreat is dedicated to all kind of yogis, whether you \
                          already have experience and wish to deepen your practice or you \
                          just want to start somewhere, this space is here for you."}
                    </p>
                    <p>
                        {"This is a moment for you to disconnect from the burden of the \
                          everyday life, to take care of you, your body, your soul and to \
                          reconnect with your true self."}
                    </p>
                </div>
            </section>

            <section id="location" class="section">
                <div class="section-inner split">
                    <div class="scroll-slide-left">
                        <h2>{"Location"}</h2>
                        <p>
                            {"Santa Teresa, a small surf town - where jungle meets the \
                              ocean. Known for its stunning sunsets, wild beaches, and \
                              laid-back energy, it is a magnetic place that attracts \
                              surfers, yogis, and free spirits from all over the world."}
                        </p>
                        <p>
                            {"Wake up to the sound of the waves, move with nature, and \
                              feel the pura vida flow in every moment."}
                        </p>
                    </div>
                    <div class="image-frame beach scroll-slide-right"></div>
                </div>
            </section>

            <section id="accommodation" class="section alternate">
                <div class="section-inner split">
                    <div class="image-frame villa scroll-slide-left"></div>
                    <div class="scroll-slide-right">
                        <h2>{"Where we'll stay"}</h2>
                        <p>
                            {"Our home for the retreat will be Villa Gaspar Terrazas - a \
                              beautiful boutique hotel nestled in the lush Costa Rican \
                              jungle, just a few minutes walk from Playa Hermosa."}
                        </p>
                        <p>
                            {"The villa offers two-person rooms, each with a private \
                              bathroom and spacious terrace overlooking the jungle."}
                        </p>
                        <p>
                            {"Start your day flowing through your yoga practice in a \
                              jungle-view shala, spend the afternoon relaxing by the pool \
                              or exploring the area, and at night fall asleep to the \
                              soothing sounds of nature under a sky full of stars."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="food" class="section">
                <div class="section-inner split">
                    <div class="scroll-slide-left">
                        <h2>{"What we'll eat"}</h2>
                        <p>
                            {"For seven days, our private chef will prepare delicious, \
                              fully vegetarian meals made with fresh and local \
                              ingredients. Each dish is crafted to nourish not only your \
                              body, but also your soul."}
                        </p>
                        <p>
                            {"The colors, textures, and flavors of the food will awaken \
                              your senses and invite you to connect more deeply within \
                              yourself and the vibrant energy of Costa Rica."}
                        </p>
                    </div>
                    <div class="image-frame food scroll-slide-right"></div>
                </div>
            </section>

            <section id="included" class="section alternate">
                <div class="section-inner">
                    <h2 class="centered scroll-fade-in">{"What's Included"}</h2>
                    <div class="included-grid">
                        {
                            for INCLUDED.iter().map(|&item| html! {
                                <div class="included-card scroll-scale-in">
                                    <span class="check">{"✓"}</span>
                                    <p>{item}</p>
                                </div>
                            })
                        }
                    </div>
                    <div class="activities scroll-fade-in">
                        <h3>{"Optional Activities"}</h3>
                        <ul>
                            { for ACTIVITIES.iter().map(|&item| html! { <li>{item}</li> }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section id="contact" class="section contact">
                <div class="section-inner narrow scroll-fade-in">
                    <h2>{"Book your spot today!"}</h2>
                    <p>
                        {"Send us an email to receive the full retreat offer - "}
                        <a class="contact-email" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            {config::CONTACT_EMAIL}
                        </a>
                    </p>
                    <p>{"We can't wait to meet you and enjoy our time in Costa Rica together!"}</p>
                    <a class="contact-button" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                        {"Contact Us"}
                    </a>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"© 2026 Lumi Soulscape Costa Rica. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                .home-page {
                    overflow-x: hidden;
                }

                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    color: #fffdf9;
                    background: linear-gradient(rgba(20, 32, 26, 0.45), rgba(20, 32, 26, 0.55)),
                        linear-gradient(160deg, #3e7d96 0%, #5e8b6b 55%, #33423b 100%);
                }

                .hero-inner {
                    padding: 0 1.5rem;
                    animation: hero-fade 1.2s ease both;
                }

                .hero-kicker {
                    font-size: 1.6rem;
                    letter-spacing: 0.12em;
                    opacity: 0.9;
                    margin-bottom: 0.75rem;
                }

                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 300;
                    letter-spacing: 0.08em;
                    margin: 0 0 1.5rem;
                }

                .hero-place {
                    font-size: 1.6rem;
                    margin-bottom: 0.5rem;
                }

                .hero-dates {
                    font-size: 1.25rem;
                    opacity: 0.9;
                }

                @keyframes hero-fade {
                    from {
                        opacity: 0;
                        transform: translateY(18px);
                    }
                    to {
                        opacity: 1;
                        transform: none;
                    }
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 24px;
                    height: 40px;
                    border: 2px solid rgba(255, 253, 249, 0.5);
                    border-radius: 999px;
                    display: flex;
                    justify-content: center;
                }

                .scroll-indicator span {
                    width: 4px;
                    height: 12px;
                    margin-top: 8px;
                    border-radius: 999px;
                    background: rgba(255, 253, 249, 0.5);
                    animation: indicator-bounce 1.6s ease-in-out infinite;
                }

                @keyframes indicator-bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }

                section[id] {
                    scroll-margin-top: 72px;
                }

                .section {
                    padding: 5.5rem 1.5rem;
                }

                .section.alternate {
                    background: #f1ece3;
                }

                .section-inner {
                    max-width: 1080px;
                    margin: 0 auto;
                }

                .section-inner.narrow {
                    max-width: 720px;
                    text-align: center;
                }

                .section-inner.split {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .section h2 {
                    font-size: 2.6rem;
                    font-weight: 300;
                    margin: 0 0 1.5rem;
                }

                .section h2.centered {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section p {
                    color: #5a6660;
                    font-size: 1.05rem;
                    line-height: 1.7;
                    margin: 0 0 1.25rem;
                }

                .image-frame {
                    height: 24rem;
                    border-radius: 18px;
                    box-shadow: 0 18px 40px rgba(51, 66, 59, 0.18);
                }

                .image-frame.beach {
                    background: linear-gradient(135deg, #7db3c9, #3e7d96);
                }

                .image-frame.villa {
                    background: linear-gradient(135deg, #8fae8b, #4d7459);
                }

                .image-frame.food {
                    background: linear-gradient(135deg, #d9b98a, #b07d4f);
                }

                .included-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 3rem;
                }

                .included-card {
                    display: flex;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 14px;
                    background: #fffdf9;
                    box-shadow: 0 8px 24px rgba(51, 66, 59, 0.08);
                }

                .included-card .check {
                    color: #5e8b6b;
                    font-size: 1.2rem;
                }

                .included-card p {
                    margin: 0;
                }

                .activities {
                    padding: 2rem;
                    border-radius: 18px;
                    background: rgba(94, 139, 107, 0.08);
                }

                .activities h3 {
                    text-align: center;
                    font-size: 1.6rem;
                    font-weight: 300;
                    margin: 0 0 1.25rem;
                }

                .activities ul {
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 0.75rem;
                    margin: 0;
                    padding: 0;
                }

                .activities li {
                    position: relative;
                    padding-left: 1.4rem;
                    color: #5a6660;
                }

                .activities li::before {
                    content: "✦";
                    position: absolute;
                    left: 0;
                    color: #5e8b6b;
                }

                .section.contact {
                    background: #33423b;
                    color: #faf7f2;
                }

                .section.contact p {
                    color: rgba(250, 247, 242, 0.85);
                }

                .contact-email {
                    color: inherit;
                }

                .contact-button {
                    display: inline-block;
                    margin-top: 1rem;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: #faf7f2;
                    color: #33423b;
                    font-size: 1.1rem;
                    text-decoration: none;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .contact-button:hover {
                    transform: scale(1.04);
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.25);
                }

                .site-footer {
                    padding: 2rem 1.5rem;
                    text-align: center;
                    font-size: 0.85rem;
                    color: #8a938e;
                }

                .scroll-fade-in,
                .scroll-slide-left,
                .scroll-slide-right,
                .scroll-scale-in {
                    opacity: 0;
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .scroll-fade-in { transform: translateY(24px); }
                .scroll-slide-left { transform: translateX(-40px); }
                .scroll-slide-right { transform: translateX(40px); }
                .scroll-scale-in { transform: scale(0.92); }

                .scroll-fade-in.animate,
                .scroll-slide-left.animate,
                .scroll-slide-right.animate,
                .scroll-scale-in.animate {
                    opacity: 1;
                    transform: none;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }

                    .hero-kicker,
                    .hero-place {
                        font-size: 1.25rem;
                    }

                    .section {
                        padding: 4rem 1.25rem;
                    }

                    .section-inner.split {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }

                    .image-frame {
                        height: 16rem;
                    }

                    .included-grid,
                    .activities ul {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
