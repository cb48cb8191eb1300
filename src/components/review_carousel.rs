use gloo_timers::callback::Timeout;
use log::{debug, error};
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::carousel::controller::{Carousel, CarouselConfig, Effect, Phase};
use crate::content::Review;

#[derive(Properties, PartialEq)]
pub struct ReviewCarouselProps {
    pub reviews: &'static [Review],
    #[prop_or_default]
    pub config: CarouselConfig,
}

pub enum ReviewCarouselMsg {
    Next,
    Prev,
    PointerEnter,
    PointerLeave,
    GestureStart(f64),
    GestureMove(f64),
    GestureEnd,
    AutoplayFired,
    Settled,
}

/// Owns the carousel controller and the timers its effects ask for.
/// Dropping a `Timeout` cancels it, so replacing or clearing a handle is
/// all the cancellation there is.
pub struct ReviewCarousel {
    carousel: Option<Carousel>,
    autoplay: Option<Timeout>,
    settle: Option<Timeout>,
    transition: Option<String>,
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

/// Five stars, filled up to `rating`.
fn star_rating(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

impl ReviewCarousel {
    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Commit(motion) => {
                    self.transition = Some(motion.ease.transition(motion.duration_ms));
                    let link = ctx.link().clone();
                    self.settle = Some(Timeout::new(motion.duration_ms, move || {
                        link.send_message(ReviewCarouselMsg::Settled);
                    }));
                }
                Effect::SnapBack(motion) => {
                    self.transition = Some(motion.ease.transition(motion.duration_ms));
                }
                Effect::Follow(_) => self.transition = None,
                Effect::ScheduleAutoplay(delay) => {
                    let link = ctx.link().clone();
                    self.autoplay = Some(Timeout::new(delay, move || {
                        link.send_message(ReviewCarouselMsg::AutoplayFired);
                    }));
                }
                Effect::CancelAutoplay => self.autoplay = None,
            }
        }
    }

    fn render_review(review: &Review, active: bool) -> Html {
        let stars = star_rating(review.rating);
        html! {
            <div class={classes!("review-card", active.then(|| "active"))}>
                <div class="review-stars">
                    {stars}
                </div>
                <p class="review-text">{format!("“{}”", review.text)}</p>
                <div class="review-author">
                    <span class="review-sport" title={review.sport.name()}>{review.sport.icon()}</span>
                    <div>
                        <strong>{review.author}</strong>
                        <span class="review-role">{review.role}</span>
                    </div>
                </div>
            </div>
        }
    }
}

impl Component for ReviewCarousel {
    type Message = ReviewCarouselMsg;
    type Properties = ReviewCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let carousel = match Carousel::with_config(props.reviews.len(), props.config.clone()) {
            Ok(carousel) => Some(carousel),
            Err(e) => {
                error!("Review carousel disabled: {}", e);
                None
            }
        };

        let mut this = Self {
            carousel,
            autoplay: None,
            settle: None,
            transition: None,
        };
        let effects = this.carousel.as_mut().map(Carousel::start).unwrap_or_default();
        this.run(ctx, effects);
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let carousel = match self.carousel.as_mut() {
            Some(carousel) => carousel,
            None => return false,
        };

        let effects = match msg {
            ReviewCarouselMsg::Next => carousel.next(),
            ReviewCarouselMsg::Prev => carousel.prev(),
            ReviewCarouselMsg::PointerEnter => carousel.pointer_enter(),
            ReviewCarouselMsg::PointerLeave => carousel.pointer_leave(),
            ReviewCarouselMsg::GestureStart(x) => carousel.gesture_start(x),
            ReviewCarouselMsg::GestureMove(x) => carousel.gesture_move(x),
            ReviewCarouselMsg::GestureEnd => carousel.gesture_end(),
            ReviewCarouselMsg::AutoplayFired => {
                self.autoplay = None;
                carousel.autoplay_fired()
            }
            ReviewCarouselMsg::Settled => {
                self.settle = None;
                carousel.finish_animation();
                debug!("Review carousel settled: {:?}", carousel.state());
                return true;
            }
        };

        let changed = !effects.is_empty();
        self.run(ctx, effects);
        changed
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let carousel = match &self.carousel {
            Some(carousel) if !carousel.is_inert() => carousel,
            _ => return html! {},
        };
        let link = ctx.link();
        let phase = carousel.phase();
        let dragging = phase == Phase::Dragging;

        let track_style = format!(
            "transform: translate3d({:.1}px, 0, 0); transition: {};",
            carousel.offset(),
            self.transition.as_deref().unwrap_or("none"),
        );

        let ontouchstart = link.batch_callback(|e: TouchEvent| {
            first_touch_x(&e).map(ReviewCarouselMsg::GestureStart)
        });
        let ontouchmove = link.batch_callback(|e: TouchEvent| {
            first_touch_x(&e).map(ReviewCarouselMsg::GestureMove)
        });
        let ontouchend = link.callback(|_: TouchEvent| ReviewCarouselMsg::GestureEnd);
        let ontouchcancel = link.callback(|_: TouchEvent| ReviewCarouselMsg::GestureEnd);
        let onmousedown = link.callback(|e: MouseEvent| {
            e.prevent_default();
            ReviewCarouselMsg::GestureStart(e.client_x() as f64)
        });
        // The button may have been released outside the page
        let onmousemove = link.batch_callback(move |e: MouseEvent| {
            dragging.then(|| {
                if e.buttons() & 1 == 0 {
                    ReviewCarouselMsg::GestureEnd
                } else {
                    ReviewCarouselMsg::GestureMove(e.client_x() as f64)
                }
            })
        });
        let onmouseup = link.batch_callback(move |_: MouseEvent| {
            dragging.then(|| ReviewCarouselMsg::GestureEnd)
        });

        html! {
            <div
                class={classes!("reviews-carousel", (!carousel.autoplay_pending()).then(|| "paused"))}
                onmouseenter={link.callback(|_| ReviewCarouselMsg::PointerEnter)}
                onmouseleave={link.callback(|_| ReviewCarouselMsg::PointerLeave)}
                {onmousemove}
                {onmouseup}
            >
                <div class="review-viewport">
                    <div
                        class={classes!(
                            "review-track",
                            (phase == Phase::Animating).then(|| "busy"),
                            dragging.then(|| "dragging")
                        )}
                        style={track_style}
                        {ontouchstart}
                        {ontouchmove}
                        {ontouchend}
                        {ontouchcancel}
                        {onmousedown}
                    >
                        { for ctx.props().reviews.iter().enumerate().map(|(i, review)| {
                            Self::render_review(review, i == carousel.index())
                        }) }
                    </div>
                </div>
                <div class="carousel-controls">
                    <button class="carousel-btn prev-btn" aria-label="Previous review"
                        onclick={link.callback(|_| ReviewCarouselMsg::Prev)}>
                        {"‹"}
                    </button>
                    <div class="carousel-dots">
                        { for (0..carousel.len()).map(|i| html! {
                            <span class={classes!("dot", (i == carousel.index()).then(|| "active"))}></span>
                        }) }
                    </div>
                    <button class="carousel-btn next-btn" aria-label="Next review"
                        onclick={link.callback(|_| ReviewCarouselMsg::Next)}>
                        {"›"}
                    </button>
                </div>
                <style>
                    {r#"
                        .reviews-carousel {
                            position: relative;
                            max-width: 1140px;
                            margin: 0 auto;
                        }
                        .review-viewport {
                            overflow: hidden;
                            padding: 1rem 0 2rem;
                        }
                        .review-track {
                            display: flex;
                            gap: 20px;
                            will-change: transform;
                            cursor: grab;
                            user-select: none;
                            touch-action: pan-y;
                        }
                        .review-track.dragging {
                            cursor: grabbing;
                        }
                        .review-track.busy {
                            pointer-events: none;
                        }
                        .review-card {
                            flex: 0 0 360px;
                            background: #fff;
                            border-radius: 20px;
                            padding: 2rem;
                            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
                            opacity: 0.6;
                            transform: scale(0.95);
                            transition: opacity 0.4s ease, transform 0.4s ease;
                        }
                        .review-card.active {
                            opacity: 1;
                            transform: scale(1);
                        }
                        .review-stars {
                            color: #ffb400;
                            font-size: 1.2rem;
                            margin-bottom: 1rem;
                        }
                        .review-text {
                            color: #444;
                            line-height: 1.6;
                            min-height: 6rem;
                        }
                        .review-author {
                            display: flex;
                            align-items: center;
                            gap: 0.75rem;
                            margin-top: 1.5rem;
                        }
                        .review-sport {
                            font-size: 2rem;
                        }
                        .review-role {
                            display: block;
                            color: #888;
                            font-size: 0.85rem;
                        }
                        .carousel-controls {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 1.5rem;
                        }
                        .carousel-btn {
                            width: 48px;
                            height: 48px;
                            border-radius: 50%;
                            border: none;
                            background: #4a5bf5;
                            color: #fff;
                            font-size: 1.8rem;
                            cursor: pointer;
                            transition: transform 0.3s ease;
                        }
                        .carousel-btn:hover {
                            transform: scale(1.1);
                        }
                        .carousel-dots .dot {
                            display: inline-block;
                            width: 10px;
                            height: 10px;
                            margin: 0 4px;
                            border-radius: 50%;
                            background: #ccd;
                            transition: background 0.3s ease, transform 0.3s ease;
                        }
                        .carousel-dots .dot.active {
                            background: #4a5bf5;
                            transform: scale(1.3);
                        }
                        .reviews-carousel.paused .carousel-dots .dot.active {
                            background: #ff6b35;
                        }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(star_rating(4), "★★★★☆");
        assert_eq!(star_rating(0), "☆☆☆☆☆");
    }

    #[test]
    fn stars_cap_at_five() {
        assert_eq!(star_rating(9), "★★★★★");
    }
}
