use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::components::booking_modal::BookingModal;
use crate::components::loading_screen::LoadingScreen;
use crate::components::nav::{scroll_to_section, Nav};
use crate::components::particle_field::ParticleField;
use crate::components::reveal::{Reveal, RevealStyle, REVEAL_CSS};
use crate::components::review_carousel::ReviewCarousel;
use crate::components::sports_showcase::{SportCard, SportsShowcase};
use crate::components::stat_counter::StatCounter;
use crate::config;
use crate::content::{Sport, FACILITIES, REVIEWS};
use crate::effects::konami::KonamiTracker;
use crate::effects::particles::ParticleKind;

const SPIN_MS: u32 = 4000;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🏆", "Pro-Grade Surfaces", "Turf, hard courts and wooden floors maintained to tournament standard."),
    ("👨‍🏫", "Expert Coaches", "Certified coaches for cricket, football, tennis, archery and badminton."),
    ("🕕", "Open 6 am - 11 pm", "Early birds and night owls both get their slot, all week."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let booking_open = use_state(|| false);
    let booking_sport = use_state(|| None::<Sport>);
    let spinning = use_state(|| false);
    let hero_stats_live = use_state(|| false);

    // Konami code spins the hero silhouettes
    {
        let spinning = spinning.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(KonamiTracker::new()));
                let spin_timer = Rc::new(RefCell::new(None::<Timeout>));
                let listener = window().map(|window| {
                    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if tracker.borrow_mut().push(&e.code()) {
                            info!("Konami code entered");
                            spinning.set(true);
                            let spinning = spinning.clone();
                            *spin_timer.borrow_mut() =
                                Some(Timeout::new(SPIN_MS, move || spinning.set(false)));
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    if let Err(e) = window.add_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    ) {
                        error!("Failed to attach Konami listener: {:?}", e);
                    }
                    (window, keydown)
                });

                move || {
                    if let Some((window, keydown)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open_booking = {
        let booking_open = booking_open.clone();
        let booking_sport = booking_sport.clone();
        Callback::from(move |sport: Option<Sport>| {
            booking_sport.set(sport);
            booking_open.set(true);
        })
    };
    let book_any = {
        let open_booking = open_booking.clone();
        Callback::from(move |_: ()| open_booking.emit(None))
    };
    let book_any_click = {
        let open_booking = open_booking.clone();
        Callback::from(move |_: MouseEvent| open_booking.emit(None))
    };
    let book_sport = {
        let open_booking = open_booking.clone();
        Callback::from(move |sport: Sport| open_booking.emit(Some(sport)))
    };
    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| booking_open.set(false))
    };
    let explore = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("sports");
    });
    let start_hero_stats = {
        let hero_stats_live = hero_stats_live.clone();
        Callback::from(move |_: ()| hero_stats_live.set(true))
    };

    html! {
        <div class="landing-page">
            <LoadingScreen />
            <Nav on_book={book_any} />

            <header id="home" class="hero">
                <div class="arena-bg"></div>
                <ParticleField kind={ParticleKind::Bubble} />
                <div class="hero-particles">
                    <ParticleField kind={ParticleKind::Spark} />
                </div>
                <div class={classes!("sports-silhouettes", (*spinning).then(|| "spinning"))}>
                    <span class="sport-silhouette cricket">{"🏏"}</span>
                    <span class="sport-silhouette football">{"⚽"}</span>
                    <span class="sport-silhouette tennis">{"🎾"}</span>
                    <span class="sport-silhouette archery">{"🏹"}</span>
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="title-line">{"Mumbai's Ultimate"}</span>
                        <span class="title-line accent">{"Multi-Sports Arena"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Cricket nets, football turf, tennis, archery and badminton under one roof. Book in seconds over WhatsApp."}
                    </p>
                    <div class="hero-cta">
                        <button class="btn-primary" onclick={book_any_click.clone()}>{"Book a Slot"}</button>
                        <a href="#sports" class="btn-secondary" onclick={explore}>{"Explore Sports"}</a>
                    </div>
                    <Reveal on_reveal={start_hero_stats} class="hero-stats">
                        <StatCounter target={5} label="Sports" active={*hero_stats_live} />
                        <StatCounter target={12500} label="Happy players" suffix="+" active={*hero_stats_live} />
                        <StatCounter target={18} label="Courts & pitches" active={*hero_stats_live} />
                    </Reveal>
                </div>
            </header>

            <section id="about" class="about">
                <div class="section-header">
                    <Reveal><h2>{"Built for Players"}</h2></Reveal>
                </div>
                <div class="about-grid">
                    <div class="feature-list">
                        { for FEATURES.iter().enumerate().map(|(i, (icon, title, detail))| html! {
                            <Reveal style={RevealStyle::SlideLeft} delay_ms={i as u32 * 200} class="feature-item">
                                <span class="feature-icon">{*icon}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*detail}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                    <Reveal style={RevealStyle::Zoom} delay_ms={300} class="arena-showcase">
                        <div class="arena-visual">{"🏟️"}</div>
                    </Reveal>
                </div>
            </section>

            <section id="sports" class="sports">
                <ParticleField kind={ParticleKind::Spark} />
                <div class="section-header">
                    <Reveal><h2>{"Pick Your Game"}</h2></Reveal>
                    <Reveal delay_ms={150}><p>{"Tap a card to see rates, or dive into the numbers below."}</p></Reveal>
                </div>
                <div class="sports-grid-premium">
                    { for Sport::ALL.iter().enumerate().map(|(i, sport)| html! {
                        <Reveal delay_ms={i as u32 * 150} class="animate-sport-card">
                            <SportCard sport={*sport} on_book={book_sport.clone()} />
                        </Reveal>
                    }) }
                </div>
                <Reveal>
                    <SportsShowcase />
                </Reveal>
            </section>

            <section id="facilities" class="facilities">
                <div class="section-header">
                    <Reveal><h2>{"World-Class Facilities"}</h2></Reveal>
                </div>
                <div class="facilities-grid">
                    { for FACILITIES.iter().enumerate().map(|(i, facility)| html! {
                        <Reveal style={RevealStyle::Zoom} delay_ms={i as u32 * 100} class="facility-item">
                            <div class="facility-icon">{facility.icon}</div>
                            <h3>{facility.title}</h3>
                            <p>{facility.detail}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="rates" class="rates">
                <div class="section-header">
                    <Reveal><h2>{"Simple Hourly Rates"}</h2></Reveal>
                </div>
                <div class="rates-grid">
                    { for Sport::ALL.iter().enumerate().map(|(i, sport)| {
                        let sport = *sport;
                        let book = {
                            let book_sport = book_sport.clone();
                            Callback::from(move |_: MouseEvent| book_sport.emit(sport))
                        };
                        html! {
                            <Reveal style={RevealStyle::Flip} delay_ms={i as u32 * 200} class="rate-card">
                                <div class="rate-icon">{sport.icon()}</div>
                                <h3>{sport.name()}</h3>
                                <p class="rate-price">{format!("₹{}", sport.hourly_rate())}<small>{"/hour"}</small></p>
                                <p class="rate-note">{format!("Up to {} players", sport.max_players())}</p>
                                <button class="btn-primary" onclick={book}>{"Book"}</button>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section id="reviews" class="reviews">
                <div class="section-header">
                    <Reveal><h2>{"What Players Say"}</h2></Reveal>
                </div>
                <ReviewCarousel reviews={REVIEWS} />
            </section>

            <section id="location" class="location">
                <div class="section-header">
                    <Reveal><h2>{"Visit Us"}</h2></Reveal>
                </div>
                <div class="location-grid">
                    <div class="location-details">
                        <Reveal style={RevealStyle::SlideLeft} class="detail-item">
                            <strong>{"📍 Address"}</strong>
                            <p>{"Plot 42, Link Road, Andheri West, Mumbai 400053"}</p>
                        </Reveal>
                        <Reveal style={RevealStyle::SlideLeft} delay_ms={150} class="detail-item">
                            <strong>{"🕕 Hours"}</strong>
                            <p>{"Every day, 6:00 am - 11:00 pm"}</p>
                        </Reveal>
                        <Reveal style={RevealStyle::SlideLeft} delay_ms={300} class="detail-item">
                            <strong>{"✉️ Email"}</strong>
                            <p><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></p>
                        </Reveal>
                    </div>
                    <Reveal style={RevealStyle::SlideRight} class="map-placeholder">
                        <span>{"🗺️"}</span>
                        <p>{"5 min from Andheri metro station"}</p>
                    </Reveal>
                </div>
            </section>

            <footer class="footer-cta">
                <h2>{"Ready to Play?"}</h2>
                <p>{"Grab your slot before the weekend fills up."}</p>
                <button class="btn-primary" onclick={book_any_click}>{"Book on WhatsApp"}</button>
                <p class="footer-legal">{"© Athlon Sports, Mumbai"}</p>
            </footer>

            <BookingModal
                open={*booking_open}
                sport={*booking_sport}
                on_close={close_booking}
            />

            <style>{REVEAL_CSS}</style>
            <style>
                {r#"
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1a1d2e;
                        overflow-x: hidden;
                    }
                    .landing-page section {
                        position: relative;
                        padding: 6rem 2rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-header h2 {
                        font-size: 2.6rem;
                        margin: 0 0 0.5rem;
                    }
                    .btn-primary, .btn-secondary {
                        display: inline-block;
                        padding: 0.9rem 1.8rem;
                        border-radius: 999px;
                        border: none;
                        font-weight: 700;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        transition: transform 0.3s cubic-bezier(0.33, 1, 0.68, 1), box-shadow 0.3s ease;
                    }
                    .btn-primary {
                        background: #ff6b35;
                        color: #fff;
                    }
                    .btn-secondary {
                        background: transparent;
                        color: #fff;
                        border: 2px solid rgba(255, 255, 255, 0.7);
                    }
                    .btn-primary:hover, .btn-secondary:hover {
                        transform: scale(1.05);
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #fff;
                        background: radial-gradient(circle at 20% 20%, #2a3a9e, #0a0e27 70%);
                        overflow: hidden;
                    }
                    .hero-particles {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 5;
                        max-width: 820px;
                        padding: 0 1.5rem;
                    }
                    .hero-title {
                        font-size: clamp(2.4rem, 6vw, 4.4rem);
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .title-line {
                        display: block;
                        opacity: 0;
                        animation: riseIn 0.8s cubic-bezier(0.25, 1, 0.5, 1) forwards 1.8s;
                    }
                    .title-line.accent {
                        color: #ff6b35;
                        animation-delay: 2.1s;
                    }
                    .hero-subtitle, .hero-cta {
                        opacity: 0;
                        animation: riseIn 0.6s cubic-bezier(0.33, 1, 0.68, 1) forwards;
                    }
                    .hero-subtitle { animation-delay: 2.6s; font-size: 1.2rem; opacity: 0; }
                    .hero-cta {
                        animation-delay: 2.9s;
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        margin: 2rem 0;
                    }
                    .hero-stats {
                        display: flex;
                        justify-content: center;
                        gap: 3rem;
                    }
                    .stat-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .stat-number {
                        font-size: 2.2rem;
                        font-weight: 800;
                    }
                    .stat-label {
                        font-size: 0.85rem;
                        opacity: 0.8;
                    }
                    .sports-silhouettes {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .sport-silhouette {
                        position: absolute;
                        font-size: 5rem;
                        opacity: 0.6;
                        animation: floatY 3s ease-in-out infinite alternate;
                    }
                    .sport-silhouette.cricket { top: 18%; left: 8%; }
                    .sport-silhouette.football { top: 65%; left: 12%; animation-duration: 2.5s; animation-delay: 0.5s; }
                    .sport-silhouette.tennis { top: 20%; right: 10%; animation-duration: 3.5s; animation-delay: 1s; }
                    .sport-silhouette.archery { top: 68%; right: 8%; animation-duration: 2.8s; animation-delay: 1.5s; }
                    .sports-silhouettes.spinning .sport-silhouette {
                        animation: konamiSpin 2s cubic-bezier(0.65, 0, 0.35, 1) 2 alternate;
                    }
                    .about-grid, .location-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                        align-items: center;
                    }
                    .feature-item {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .feature-icon { font-size: 2rem; }
                    .arena-visual {
                        font-size: 10rem;
                        text-align: center;
                    }
                    .sports {
                        background: #f4f6ff;
                        overflow: hidden;
                    }
                    .sports-grid-premium {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                        max-width: 1200px;
                        margin: 0 auto 4rem;
                    }
                    .sport-card-3d {
                        perspective: 1000px;
                        height: 300px;
                        cursor: pointer;
                    }
                    .card-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        transition: transform 0.6s cubic-bezier(0.65, 0, 0.35, 1), box-shadow 0.4s ease;
                        transform-style: preserve-3d;
                        border-radius: 20px;
                        box-shadow: 0 20px 60px rgba(74, 91, 245, 0.15);
                    }
                    .sport-card-3d:hover .card-inner {
                        box-shadow: 0 30px 80px rgba(74, 91, 245, 0.4);
                    }
                    .sport-card-3d.flipped .card-inner {
                        transform: rotateY(180deg);
                    }
                    .card-front, .card-back {
                        position: absolute;
                        inset: 0;
                        padding: 1.5rem;
                        border-radius: 20px;
                        background: #fff;
                        backface-visibility: hidden;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        overflow: hidden;
                    }
                    .card-back {
                        transform: rotateY(180deg);
                        background: linear-gradient(135deg, #4a5bf5, #2a3a9e);
                        color: #fff;
                    }
                    .sport-icon {
                        font-size: 3rem;
                        transition: transform 0.4s cubic-bezier(0.33, 1, 0.68, 1);
                    }
                    .sport-card-3d:hover .sport-icon {
                        transform: scale(1.2) rotate(10deg);
                    }
                    .card-front .particle {
                        position: absolute;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #4a5bf5;
                        opacity: 0;
                        transform: scale(0.5);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .card-front .particle:nth-child(1) { top: 15%; left: 20%; }
                    .card-front .particle:nth-child(2) { top: 25%; right: 15%; transition-delay: 0.1s; }
                    .card-front .particle:nth-child(3) { bottom: 20%; left: 30%; transition-delay: 0.2s; }
                    .sport-card-3d:hover .card-front .particle {
                        opacity: 1;
                        transform: scale(1.5);
                    }
                    .flip-hint {
                        margin-top: auto;
                        font-size: 0.8rem;
                        color: #888;
                    }
                    .card-rate, .rate-price {
                        font-size: 2rem;
                        font-weight: 800;
                    }
                    .showcase-buttons {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        justify-content: center;
                        margin-bottom: 2rem;
                    }
                    .showcase-btn {
                        padding: 0.6rem 1.3rem;
                        border-radius: 999px;
                        border: 2px solid #4a5bf5;
                        background: #fff;
                        color: #4a5bf5;
                        font-weight: 700;
                        cursor: pointer;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    .showcase-btn.active {
                        background: #4a5bf5;
                        color: #fff;
                    }
                    .showcase-panel {
                        display: none;
                        max-width: 900px;
                        margin: 0 auto;
                        background: #fff;
                        border-radius: 24px;
                        padding: 2rem;
                        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.08);
                    }
                    .showcase-panel.active {
                        display: block;
                        animation: riseIn 0.5s cubic-bezier(0.33, 1, 0.68, 1);
                    }
                    .panel-stats {
                        display: flex;
                        justify-content: space-around;
                        color: #4a5bf5;
                    }
                    .facilities-grid, .rates-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .facility-item, .rate-card {
                        background: #fff;
                        border-radius: 20px;
                        padding: 2rem;
                        text-align: center;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
                    }
                    .facility-icon {
                        font-size: 2.5rem;
                        transition: transform 0.3s cubic-bezier(0.33, 1, 0.68, 1);
                    }
                    .facility-item:hover .facility-icon {
                        transform: scale(1.15) rotate(15deg);
                    }
                    .rate-card.animate:hover {
                        transform: translateY(-8px) scale(1.03);
                    }
                    .rate-icon { font-size: 2.5rem; }
                    .reviews {
                        background: #f4f6ff;
                    }
                    .map-placeholder {
                        min-height: 260px;
                        border-radius: 24px;
                        background: linear-gradient(135deg, #dfe4ff, #f4f6ff);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.1rem;
                    }
                    .map-placeholder span { font-size: 4rem; }
                    .detail-item { margin-bottom: 1.5rem; }
                    .footer-cta {
                        text-align: center;
                        padding: 5rem 2rem 3rem;
                        background: #0a0e27;
                        color: #fff;
                    }
                    .footer-legal {
                        margin-top: 3rem;
                        opacity: 0.6;
                        font-size: 0.85rem;
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(40px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes floatY {
                        from { transform: translateY(0) rotate(0); }
                        to { transform: translateY(-20px) rotate(6deg); }
                    }
                    @keyframes konamiSpin {
                        from { transform: rotate(0) scale(1); }
                        to { transform: rotate(720deg) scale(1.5); }
                    }
                    @media (max-width: 900px) {
                        .about-grid, .location-grid {
                            grid-template-columns: 1fr;
                        }
                        .hero-stats {
                            gap: 1.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
