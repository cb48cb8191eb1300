use std::collections::HashMap;

use fastrand::Rng;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::effects::particles::{next_spawn_delay, ParticleKind, ParticleSpec, MAX_LIVE_PARTICLES};

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub kind: ParticleKind,
    #[prop_or(MAX_LIVE_PARTICLES)]
    pub max_live: usize,
}

pub enum ParticleFieldMsg {
    Spawn,
    Expire(u64),
}

/// Decorative layer that keeps spawning short-lived particles.
pub struct ParticleField {
    rng: Rng,
    next_id: u64,
    live: Vec<ParticleSpec>,
    spawner: Option<Timeout>,
    expiries: HashMap<u64, Timeout>,
}

impl ParticleField {
    fn schedule_spawn(&mut self, ctx: &Context<Self>) {
        let delay = next_spawn_delay(ctx.props().kind, &mut self.rng);
        let link = ctx.link().clone();
        self.spawner = Some(Timeout::new(delay, move || {
            link.send_message(ParticleFieldMsg::Spawn);
        }));
    }
}

impl Component for ParticleField {
    type Message = ParticleFieldMsg;
    type Properties = ParticleFieldProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut field = Self {
            rng: Rng::new(),
            next_id: 0,
            live: Vec::new(),
            spawner: None,
            expiries: HashMap::new(),
        };
        match ctx.props().kind {
            ParticleKind::Bubble => ctx.link().send_message(ParticleFieldMsg::Spawn),
            ParticleKind::Spark => field.schedule_spawn(ctx),
        }
        field
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ParticleFieldMsg::Spawn => {
                let changed = self.live.len() < ctx.props().max_live;
                if changed {
                    let id = self.next_id;
                    self.next_id += 1;
                    let spec = ParticleSpec::spawn(ctx.props().kind, id, &mut self.rng);
                    let link = ctx.link().clone();
                    self.expiries.insert(
                        id,
                        Timeout::new(spec.duration_ms, move || {
                            link.send_message(ParticleFieldMsg::Expire(id));
                        }),
                    );
                    self.live.push(spec);
                }
                self.schedule_spawn(ctx);
                changed
            }
            ParticleFieldMsg::Expire(id) => {
                self.expiries.remove(&id);
                let before = self.live.len();
                self.live.retain(|particle| particle.id != id);
                self.live.len() != before
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let layer = match ctx.props().kind {
            ParticleKind::Spark => "particle-layer",
            ParticleKind::Bubble => "hero-bubble-system",
        };
        html! {
            <div class={layer} aria-hidden="true">
                { for self.live.iter().map(|particle| html! {
                    <div key={particle.id} class={particle.class()} style={particle.style()}></div>
                }) }
                <style>
                    {r#"
                        .particle-layer, .hero-bubble-system {
                            position: absolute;
                            inset: 0;
                            overflow: hidden;
                            pointer-events: none;
                        }
                        .hero-bubble-system {
                            z-index: 4;
                        }
                        .dynamic-particle {
                            position: absolute;
                            border-radius: 50%;
                            background: linear-gradient(45deg, #4a5bf5, #7b8cff);
                            opacity: 0;
                            animation-name: sparkRise;
                            animation-timing-function: cubic-bezier(0.33, 1, 0.68, 1);
                            animation-fill-mode: forwards;
                        }
                        .hero-bubble {
                            position: absolute;
                            border-radius: 50%;
                            border: 1px solid rgba(74, 91, 245, 0.2);
                            background: radial-gradient(circle at 30% 30%, rgba(255, 255, 255, 0.8), rgba(74, 91, 245, 0.3));
                            opacity: 0;
                            animation-name: bubbleRise;
                            animation-timing-function: linear;
                            animation-fill-mode: forwards;
                        }
                        @keyframes sparkRise {
                            from { opacity: 0; transform: translateY(50px) scale(0) rotate(0); }
                            to { opacity: var(--peak-opacity); transform: translateY(-100px) scale(1) rotate(360deg); }
                        }
                        @keyframes bubbleRise {
                            0% { opacity: 0; transform: translate(0, 50px) scale(0.5) rotate(0); }
                            15% { opacity: var(--peak-opacity); }
                            50% { transform: translate(var(--drift), -55vh) scale(0.8) rotate(180deg); }
                            100% { opacity: var(--peak-opacity); transform: translate(0, calc(-100vh - 100px)) scale(1) rotate(360deg); }
                        }
                    "#}
                </style>
            </div>
        }
    }
}
