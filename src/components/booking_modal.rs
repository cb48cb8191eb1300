use chrono::Local;
use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;

use crate::booking::request::{time_slots, BookingForm};
use crate::config;
use crate::content::Sport;

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    #[prop_or_default]
    pub sport: Option<Sport>,
    pub on_close: Callback<()>,
}

fn field_value(event: &Event) -> String {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
        return select.value();
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}

/// Upper bound for the players input; the largest squad until a sport is picked.
fn booking_max_players(sport_slug: &str) -> u8 {
    match Sport::from_slug(sport_slug) {
        Some(sport) => sport.max_players(),
        None => Sport::ALL.iter().map(|sport| sport.max_players()).max().unwrap_or(1),
    }
}

fn blank_form(sport: Option<Sport>) -> BookingForm {
    BookingForm {
        sport: sport.map(|s| s.slug().to_string()).unwrap_or_default(),
        date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        players: "2".to_string(),
        ..BookingForm::default()
    }
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let form = use_state(|| blank_form(props.sport));
    let error_msg = use_state(|| None::<String>);
    let sent = use_state(|| false);

    // Fresh form, with the chosen sport, every time the modal opens
    {
        let form = form.clone();
        let error_msg = error_msg.clone();
        let sent = sent.clone();
        use_effect_with_deps(
            move |(open, sport)| {
                if *open {
                    form.set(blank_form(*sport));
                    error_msg.set(None);
                    sent.set(false);
                }
                || ()
            },
            (props.open, props.sport),
        );
    }

    // Escape closes
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    window().map(|window| {
                        let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                on_close.emit(());
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        if let Err(e) = window.add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        ) {
                            error!("Failed to attach booking Escape listener: {:?}", e);
                        }
                        (window, keydown)
                    })
                } else {
                    None
                };
                move || {
                    if let Some((window, keydown)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let on_input = |apply: fn(&mut BookingForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, field_value(&e));
            form.set(next);
        })
    };
    let on_change = |apply: fn(&mut BookingForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            apply(&mut next, field_value(&e));
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let error_msg = error_msg.clone();
        let sent = sent.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate(Local::now().date_naive()) {
                Ok(request) => {
                    let url = request.whatsapp_url(config::WHATSAPP_NUMBER);
                    info!(
                        "Opening WhatsApp booking for {} on {} at {}",
                        request.sport.name(),
                        request.date,
                        request.time
                    );
                    if let Some(window) = window() {
                        if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                            error!("Failed to open WhatsApp: {:?}", e);
                        }
                    }
                    error_msg.set(None);
                    sent.set(true);
                }
                Err(e) => {
                    warn!("Booking form rejected: {}", e);
                    error_msg.set(Some(e.to_string()));
                }
            }
        })
    };

    let max_players = booking_max_players(&form.sport);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="booking-overlay" onclick={close.clone()}>
            <div class="booking-modal" onclick={keep_open}>
                <button class="booking-close" aria-label="Close" onclick={close.clone()}>{"✕"}</button>
                <h2>{"Book Your Slot"}</h2>
                <p class="booking-sub">{"We'll confirm availability on WhatsApp within minutes."}</p>
                {
                    if *sent {
                        html! {
                            <div class="booking-success">
                                <div class="success-icon">{"✅"}</div>
                                <p>{"WhatsApp should have opened with your booking details. Just hit send!"}</p>
                                <button class="btn-secondary" onclick={close}>{"Done"}</button>
                            </div>
                        }
                    } else {
                        html! {
                            <form class="booking-form" {onsubmit}>
                                if let Some(message) = &*error_msg {
                                    <div class="booking-error">{message}</div>
                                }
                                <label>
                                    {"Name"}
                                    <input type="text" placeholder="Your full name"
                                        value={form.name.clone()}
                                        oninput={on_input(|f, v| f.name = v)} />
                                </label>
                                <label>
                                    {"Phone"}
                                    <input type="tel" placeholder="+91 98xxx xxxxx"
                                        value={form.phone.clone()}
                                        oninput={on_input(|f, v| f.phone = v)} />
                                </label>
                                <div class="booking-row">
                                    <label>
                                        {"Sport"}
                                        <select onchange={on_change(|f, v| f.sport = v)}>
                                            <option value="" selected={form.sport.is_empty()}>{"Choose a sport"}</option>
                                            { for Sport::ALL.iter().map(|sport| html! {
                                                <option value={sport.slug()} selected={form.sport == sport.slug()}>
                                                    {format!("{} {}", sport.icon(), sport.name())}
                                                </option>
                                            }) }
                                        </select>
                                    </label>
                                    <label>
                                        {"Players"}
                                        <input type="number" min="1" max={max_players.to_string()}
                                            value={form.players.clone()}
                                            oninput={on_input(|f, v| f.players = v)} />
                                    </label>
                                </div>
                                <div class="booking-row">
                                    <label>
                                        {"Date"}
                                        <input type="date"
                                            value={form.date.clone()}
                                            oninput={on_input(|f, v| f.date = v)} />
                                    </label>
                                    <label>
                                        {"Time"}
                                        <select onchange={on_change(|f, v| f.time = v)}>
                                            <option value="" selected={form.time.is_empty()}>{"Pick a slot"}</option>
                                            { for time_slots().into_iter().map(|slot| {
                                                let selected = form.time == slot;
                                                html! {
                                                    <option value={slot.clone()} {selected}>{slot}</option>
                                                }
                                            }) }
                                        </select>
                                    </label>
                                </div>
                                <label>
                                    {"Notes (optional)"}
                                    <textarea rows="3" placeholder="Coaching, equipment, birthday party..."
                                        value={form.notes.clone()}
                                        oninput={on_input(|f, v| f.notes = v)} />
                                </label>
                                <button type="submit" class="btn-primary booking-submit">
                                    {"Send on WhatsApp"}
                                </button>
                            </form>
                        }
                    }
                }
            </div>
            <style>
                {r#"
                    .booking-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 500;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(10, 14, 39, 0.75);
                        backdrop-filter: blur(6px);
                        animation: overlayIn 0.3s ease;
                    }
                    .booking-modal {
                        position: relative;
                        width: min(520px, 92vw);
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 24px;
                        padding: 2.5rem 2rem 2rem;
                        animation: modalIn 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .booking-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        border: none;
                        background: none;
                        font-size: 1.3rem;
                        cursor: pointer;
                    }
                    .booking-sub {
                        color: #666;
                        margin-bottom: 1.5rem;
                    }
                    .booking-form label {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                        margin-bottom: 1rem;
                        font-weight: 600;
                        font-size: 0.9rem;
                        color: #333;
                        flex: 1;
                    }
                    .booking-form input,
                    .booking-form select,
                    .booking-form textarea {
                        padding: 0.7rem 0.9rem;
                        border: 1px solid #d8dbe8;
                        border-radius: 10px;
                        font: inherit;
                        font-weight: 400;
                    }
                    .booking-row {
                        display: flex;
                        gap: 1rem;
                    }
                    .booking-error {
                        background: #fff0ec;
                        color: #c0392b;
                        border-radius: 10px;
                        padding: 0.7rem 1rem;
                        margin-bottom: 1rem;
                    }
                    .booking-submit {
                        width: 100%;
                        background: #25d366;
                    }
                    .booking-success {
                        text-align: center;
                    }
                    .success-icon {
                        font-size: 3rem;
                    }
                    @keyframes overlayIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes modalIn {
                        from { opacity: 0; transform: translateY(40px) scale(0.95); }
                        to { opacity: 1; transform: none; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_cap_follows_selected_sport() {
        assert_eq!(booking_max_players("tennis"), 4);
        assert_eq!(booking_max_players("football"), 14);
    }

    #[test]
    fn players_cap_without_sport_is_largest_squad() {
        assert_eq!(booking_max_players(""), Sport::Cricket.max_players());
        assert_eq!(booking_max_players("polo"), 22);
    }
}
