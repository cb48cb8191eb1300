use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::stat_counter::StatCounter;
use crate::content::Sport;

const PANEL_SWAP_DELAY_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct SportCardProps {
    pub sport: Sport,
    pub on_book: Callback<Sport>,
}

/// Flip card: the front sells the sport, the back carries the rate.
#[function_component(SportCard)]
pub fn sport_card(props: &SportCardProps) -> Html {
    let flipped = use_state(|| false);
    let sport = props.sport;

    let flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(!*flipped))
    };
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_book.emit(sport);
        })
    };

    html! {
        <div class={classes!("sport-card-3d", (*flipped).then(|| "flipped"))} onclick={flip}>
            <div class="card-inner">
                <div class="card-front">
                    <span class="particle"></span>
                    <span class="particle"></span>
                    <span class="particle"></span>
                    <div class="sport-icon">{sport.icon()}</div>
                    <h3>{sport.name()}</h3>
                    <p>{sport.tagline()}</p>
                    <span class="flip-hint">{"Tap for rates"}</span>
                </div>
                <div class="card-back">
                    <h3>{sport.name()}</h3>
                    <p class="card-rate">{format!("₹{}", sport.hourly_rate())}<small>{"/hour"}</small></p>
                    <p>{format!("Up to {} players", sport.max_players())}</p>
                    <button class="btn-primary" onclick={book}>{"Book this"}</button>
                </div>
            </div>
        </div>
    }
}

/// Tabbed showcase: picking a sport lights its button at once and swaps
/// the panel in shortly after, which restarts the panel's counters.
#[function_component(SportsShowcase)]
pub fn sports_showcase() -> Html {
    let active = use_state(|| Sport::Cricket);
    let shown = use_state(|| Some(Sport::Cricket));
    let pending = use_mut_ref(|| None::<Timeout>);

    let select = {
        let active = active.clone();
        let shown = shown.clone();
        let pending = pending.clone();
        move |sport: Sport| {
            let active = active.clone();
            let shown = shown.clone();
            let pending = pending.clone();
            Callback::from(move |_: MouseEvent| {
                if *active == sport && *shown == Some(sport) {
                    return;
                }
                active.set(sport);
                shown.set(None);
                let shown = shown.clone();
                *pending.borrow_mut() = Some(Timeout::new(PANEL_SWAP_DELAY_MS, move || {
                    shown.set(Some(sport));
                }));
            })
        }
    };

    html! {
        <div class="sports-showcase">
            <div class="showcase-buttons">
                { for Sport::ALL.iter().map(|sport| html! {
                    <button
                        class={classes!("showcase-btn", (*active == *sport).then(|| "active"))}
                        data-sport={sport.slug()}
                        onclick={select(*sport)}
                    >
                        <span>{sport.icon()}</span>{" "}{sport.name()}
                    </button>
                }) }
            </div>
            { for Sport::ALL.iter().map(|sport| {
                let visible = *shown == Some(*sport);
                html! {
                    <div
                        id={format!("{}-panel", sport.slug())}
                        class={classes!("showcase-panel", visible.then(|| "active"))}
                    >
                        <div class="panel-copy">
                            <h3>{sport.icon()}{" "}{sport.name()}</h3>
                            <p>{sport.tagline()}</p>
                        </div>
                        <div class="panel-stats">
                            { for sport.stats().iter().map(|(label, target)| html! {
                                <StatCounter
                                    target={*target}
                                    label={*label}
                                    suffix="+"
                                    active={visible}
                                />
                            }) }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
