use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::animation::scroll::{crosses_start, REVEAL_START, SLIDE_REVEAL_START};

#[derive(Clone, Copy, PartialEq)]
pub enum RevealStyle {
    FadeUp,
    SlideLeft,
    SlideRight,
    Zoom,
    Flip,
}

impl RevealStyle {
    fn class(self) -> &'static str {
        match self {
            RevealStyle::FadeUp => "reveal-fade-up",
            RevealStyle::SlideLeft => "reveal-slide-left",
            RevealStyle::SlideRight => "reveal-slide-right",
            RevealStyle::Zoom => "reveal-zoom",
            RevealStyle::Flip => "reveal-flip",
        }
    }

    fn start(self) -> f64 {
        match self {
            RevealStyle::SlideLeft | RevealStyle::SlideRight => SLIDE_REVEAL_START,
            _ => REVEAL_START,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealStyle::FadeUp)]
    pub style: RevealStyle,
    /// Stagger offset applied after the element crosses the start line.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_reveal: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content that animates in once, the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let on_reveal = props.on_reveal.clone();
        let style = props.style;
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |_| {
                let triggered = Rc::new(Cell::new(false));
                let stagger = Rc::new(RefCell::new(None::<Timeout>));
                let pending = stagger.clone();
                let listener = window().map(|window| {
                    let viewport = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        if triggered.get() {
                            return;
                        }
                        let element = match node.cast::<Element>() {
                            Some(element) => element,
                            None => return,
                        };
                        let viewport_height = viewport
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        let top = element.get_bounding_client_rect().top();
                        if crosses_start(top, viewport_height, style.start()) {
                            triggered.set(true);
                            let revealed = revealed.clone();
                            let on_reveal = on_reveal.clone();
                            *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                                revealed.set(true);
                                on_reveal.emit(());
                            }));
                        }
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::error!("Failed to attach reveal scroll listener: {:?}", e);
                    }

                    // Elements already on screen reveal without waiting for a scroll
                    let _ = scroll_callback
                        .as_ref()
                        .unchecked_ref::<web_sys::js_sys::Function>()
                        .call0(&wasm_bindgen::JsValue::NULL);

                    (window, scroll_callback)
                });

                move || {
                    stagger.borrow_mut().take();
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.style.class(),
                props.class.clone(),
                (*revealed).then(|| "animate")
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Shared transition rules for every `Reveal` wrapper.
pub const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transition: opacity 0.8s cubic-bezier(0.25, 1, 0.5, 1),
                    transform 0.8s cubic-bezier(0.25, 1, 0.5, 1);
    }
    .reveal-fade-up { transform: translateY(50px); }
    .reveal-slide-left { transform: translateX(-60px); }
    .reveal-slide-right { transform: translateX(60px); }
    .reveal-zoom {
        transform: scale(0.8);
        transition-timing-function: cubic-bezier(0.34, 1.56, 0.64, 1);
    }
    .reveal-flip {
        transform: perspective(800px) rotateX(-90deg);
        transform-origin: center bottom;
    }
    .reveal.animate {
        opacity: 1;
        transform: none;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_start_earlier_than_fades() {
        assert_eq!(RevealStyle::SlideLeft.start(), SLIDE_REVEAL_START);
        assert_eq!(RevealStyle::SlideRight.start(), SLIDE_REVEAL_START);
        assert_eq!(RevealStyle::FadeUp.start(), REVEAL_START);
        assert_eq!(RevealStyle::Zoom.start(), REVEAL_START);
    }

    #[test]
    fn every_style_has_css() {
        for style in [
            RevealStyle::FadeUp,
            RevealStyle::SlideLeft,
            RevealStyle::SlideRight,
            RevealStyle::Zoom,
            RevealStyle::Flip,
        ] {
            assert!(REVEAL_CSS.contains(&format!(".{}", style.class())));
        }
    }
}
