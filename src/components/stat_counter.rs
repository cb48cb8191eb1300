use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::animation::counter::{format_thousands, value_at, COUNT_UP_DURATION_MS};

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Counting starts when this turns true.
    #[prop_or(true)]
    pub active: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let shown = use_state_eq(|| 0u32);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(target, active)| {
                let target = *target;
                let ticker = Rc::new(RefCell::new(None::<Interval>));
                let mut stopper = None;

                if *active {
                    let started = Date::now();
                    shown.set(0);
                    *ticker.borrow_mut() = Some(Interval::new(FRAME_MS, move || {
                        shown.set(value_at(target, Date::now() - started, COUNT_UP_DURATION_MS));
                    }));
                    // Let the last frame land, then stop ticking.
                    let ticker = ticker.clone();
                    stopper = Some(Timeout::new(COUNT_UP_DURATION_MS as u32 + FRAME_MS * 2, move || {
                        ticker.borrow_mut().take();
                    }));
                }

                move || {
                    drop(stopper);
                    ticker.borrow_mut().take();
                }
            },
            (props.target, props.active),
        );
    }

    html! {
        <div class="stat-item">
            <span class="stat-number">{format_thousands(*shown)}{props.suffix.clone()}</span>
            <span class="stat-label">{props.label.clone()}</span>
        </div>
    }
}
