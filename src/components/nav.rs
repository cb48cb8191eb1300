use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::animation::scroll::{anchor_target, nav_is_scrolled};
use crate::config;

/// (section id, label, icon)
pub const SECTIONS: &[(&str, &str, &str)] = &[
    ("home", "Home", "🏟️"),
    ("sports", "Sports", "🏏"),
    ("facilities", "Facilities", "🏋️"),
    ("rates", "Rates", "💰"),
    ("reviews", "Reviews", "⭐"),
    ("location", "Visit", "📍"),
];

/// Smooth-scrolls to the section with `id`, leaving room for the fixed nav.
pub fn scroll_to_section(id: &str) {
    if let Some(window) = window() {
        let element = window.document().and_then(|document| document.get_element_by_id(id));
        if let Some(element) = element {
            let top = element.get_bounding_client_rect().top();
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let options = ScrollToOptions::new();
            options.set_top(anchor_target(top, scroll_y, config::NAV_OFFSET_PX));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        } else {
            log::warn!("No section with id '{}' to scroll to", id);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let scrolled_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = scrolled_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(nav_is_scrolled(scroll_y));
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::error!("Failed to attach nav scroll listener: {:?}", e);
                    }
                    (window, scroll_callback)
                });

                move || {
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let book = {
        let menu_open = menu_open.clone();
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book.emit(());
        })
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="nav-logo" onclick={go_to("home")}>
                    <span class="mini-sport-icon">{"🏏"}</span>
                    <span class="mini-sport-icon">{"⚽"}</span>
                    <span class="mini-sport-icon">{"🎾"}</span>
                    <span class="logo-text">{"ATHLON"}<strong>{"SPORTS"}</strong></span>
                </a>

                <button
                    class={classes!("mobile-menu-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul class={classes!("nav-links", (*menu_open).then(|| "mobile-open"))}>
                    { for SECTIONS.iter().map(|(id, label, icon)| html! {
                        <li>
                            <a href={format!("#{}", id)} onclick={go_to(*id)}>
                                <span class="nav-icon">{*icon}</span>
                                <span class="nav-label">{*label}</span>
                                <span class="nav-hover-effect"></span>
                            </a>
                        </li>
                    }) }
                    <li>
                        <button class="btn-primary nav-book" onclick={book}>{"Book Now"}</button>
                    </li>
                </ul>
            </div>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.2rem 2rem;
                        transition: background 0.4s ease, padding 0.4s ease, box-shadow 0.4s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(10, 14, 39, 0.95);
                        backdrop-filter: blur(10px);
                        padding: 0.7rem 2rem;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.25);
                    }
                    .nav-container {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.3rem;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 800;
                        letter-spacing: 0.08em;
                    }
                    .nav-logo strong {
                        color: #ff6b35;
                        margin-left: 0.3rem;
                    }
                    .mini-sport-icon {
                        display: inline-block;
                        animation: popIn 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .mini-sport-icon:nth-child(2) { animation-delay: 0.2s; }
                    .mini-sport-icon:nth-child(3) { animation-delay: 0.4s; }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-links a {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 0.4rem;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-icon {
                        display: inline-block;
                        animation: spinIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both 0.5s;
                        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .nav-links a:hover .nav-icon {
                        transform: scale(1.3) rotate(15deg);
                    }
                    .nav-hover-effect {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -6px;
                        height: 2px;
                        background: #ff6b35;
                        transform: scaleX(0);
                        transition: transform 0.3s ease;
                    }
                    .nav-links a:hover .nav-hover-effect {
                        transform: scaleX(1.1);
                    }
                    .mobile-menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .mobile-menu-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .mobile-menu-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                    .mobile-menu-toggle.active span:nth-child(2) { opacity: 0; }
                    .mobile-menu-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                    @keyframes popIn {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    @keyframes spinIn {
                        from { transform: scale(0) rotate(-180deg); }
                        to { transform: scale(1) rotate(0); }
                    }
                    @media (max-width: 900px) {
                        .mobile-menu-toggle {
                            display: block;
                        }
                        .nav-links {
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            background: rgba(10, 14, 39, 0.97);
                            padding: 1.5rem;
                            transform: translateY(-10px);
                            opacity: 0;
                            pointer-events: none;
                            transition: opacity 0.3s ease, transform 0.3s ease;
                        }
                        .nav-links.mobile-open {
                            transform: translateY(0);
                            opacity: 1;
                            pointer-events: auto;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
