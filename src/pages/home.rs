use yew::prelude::*;
use web_sys::window;

use crate::config::{self, InfoCard};
use crate::countdown::{CountdownClock, TimeLeft};

#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let time_left = use_state(TimeLeft::default);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                let mut clock = CountdownClock::new();
                clock.start(config::event_start(), move |left| time_left.set(left));
                move || clock.stop()
            },
            (), // Empty dependencies array means the clock starts once on mount
        );
    }

    let units = [
        ("days", time_left.days),
        ("hours", time_left.hours),
        ("minutes", time_left.minutes),
        ("seconds", time_left.seconds),
    ];

    html! {
        <div class="countdown">
            { for units.into_iter().map(|(unit, value)| html! {
                <div class="time-unit" key={unit}>
                    <div class="time-value">{ value }</div>
                    <div class="time-label">{ unit }</div>
                </div>
            }) }
        </div>
    }
}

fn render_info_card(card: &InfoCard) -> Html {
    html! {
        <div class="info-card" key={card.title}>
            <i class={format!("fas {} card-icon", card.icon)}></i>
            <h3>{ card.title }</h3>
            <p>{ card.text }</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let landing_css = r#"
        .landing-container {
            min-height: 100vh;
            color: white;
            padding: 2rem;
            font-family: 'Inter', sans-serif;
            text-align: center;
            background: linear-gradient(-45deg, #0a0c1b, #1a1f3d, #2d1948);
            background-size: 400% 400%;
            animation: gradientShift 15s ease infinite;
        }
        @keyframes gradientShift {
            0% { background-position: 0% 50%; }
            50% { background-position: 100% 50%; }
            100% { background-position: 0% 50%; }
        }
        .hero-title {
            font-size: 4rem;
            margin: 2rem 0;
            background: linear-gradient(90deg, #00ff88, #00ffee);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            text-shadow: 0 0 20px rgba(0, 255, 136, 0.3);
        }
        .hero-tagline {
            font-size: 1.2rem;
            opacity: 0.9;
        }
        .countdown {
            display: flex;
            justify-content: center;
            gap: 2rem;
            margin: 3rem 0;
            flex-wrap: wrap;
        }
        .time-unit {
            background: rgba(255, 255, 255, 0.1);
            padding: 1.5rem;
            border-radius: 15px;
            backdrop-filter: blur(10px);
            min-width: 120px;
        }
        .time-value {
            font-size: 2.5rem;
            font-weight: bold;
        }
        .time-label {
            text-transform: uppercase;
            opacity: 0.8;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 2rem;
            max-width: 1200px;
            margin: 3rem auto;
        }
        .info-card {
            background: rgba(255, 255, 255, 0.05);
            padding: 2rem;
            border-radius: 20px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(10px);
            min-height: 250px;
        }
        .card-icon {
            font-size: 2.5rem;
            margin-bottom: 1rem;
            color: #00ff88;
        }
        .cta-button {
            background: linear-gradient(90deg, #00ff88, #00ffee);
            color: #0a0c1b;
            padding: 1.5rem 3rem;
            border-radius: 50px;
            text-decoration: none;
            font-weight: bold;
            display: inline-block;
            margin: 2rem 0;
            cursor: pointer;
            transition: transform 0.3s ease;
        }
        .cta-button:hover {
            transform: scale(1.05);
        }
        .landing-footer {
            margin-top: 3rem;
            opacity: 0.8;
        }
        .landing-footer i {
            font-size: 1.5rem;
            color: #00ff88;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 2.5rem;
            }
        }
    "#;

    html! {
        <div class="landing-container">
            <style>{ landing_css }</style>
            <h1 class="hero-title">{ config::EVENT_NAME }</h1>
            <p class="hero-tagline">{ config::EVENT_TAGLINE }</p>
            <CountdownTimer />
            <div class="card-grid">
                { for config::INFO_CARDS.iter().map(render_info_card) }
            </div>
            <a
                class="cta-button"
                href={config::REGISTRATION_URL}
                target="_blank"
                rel="noopener noreferrer"
            >
                { config::REGISTRATION_LABEL }
            </a>
            <div class="landing-footer">
                <i class="fas fa-rocket"></i>
                <p>{ config::FOOTER_TEXT }</p>
            </div>
        </div>
    }
}
