use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{LOADING_FADE_MS, LOADING_HOLD_MS};

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Showing,
    Fading,
    Gone,
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let stage = use_state(|| Stage::Showing);

    {
        let setter = stage.setter();
        use_effect_with_deps(
            move |stage| {
                let next = match stage {
                    Stage::Showing => Some((LOADING_HOLD_MS, Stage::Fading)),
                    Stage::Fading => Some((LOADING_FADE_MS, Stage::Gone)),
                    Stage::Gone => None,
                };
                let timeout = next.map(|(delay, next)| Timeout::new(delay, move || setter.set(next)));
                move || drop(timeout)
            },
            *stage,
        );
    }

    if *stage == Stage::Gone {
        return html! {};
    }

    html! {
        <div
            id="loading-screen"
            class={classes!("loading-screen", (*stage == Stage::Fading).then(|| "fading"))}
        >
            <div class="loader-ball">{"⚽"}</div>
            <p>{"Warming up..."}</p>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 1000;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #0a0e27;
                        color: #fff;
                        opacity: 1;
                        transition: opacity 0.5s ease;
                    }
                    .loading-screen.fading {
                        opacity: 0;
                    }
                    .loader-ball {
                        font-size: 3rem;
                        animation: bounce 0.6s ease-in-out infinite alternate;
                    }
                    @keyframes bounce {
                        from { transform: translateY(0) rotate(0); }
                        to { transform: translateY(-30px) rotate(180deg); }
                    }
                "#}
            </style>
        </div>
    }
}
