use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <div class="not-found-icon">{"🏏"}</div>
            <h1>{"Out of bounds!"}</h1>
            <p>{"That page isn't on our fixture list."}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">
                {"Back to the arena"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: #0a0e27;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .not-found-icon {
                        font-size: 5rem;
                        animation: notFoundSpin 3s ease-in-out infinite;
                    }
                    .not-found .btn-primary {
                        margin-top: 1.5rem;
                        padding: 0.9rem 1.8rem;
                        border-radius: 999px;
                        background: #ff6b35;
                        color: #fff;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    @keyframes notFoundSpin {
                        0%, 100% { transform: rotate(-15deg); }
                        50% { transform: rotate(15deg); }
                    }
                "#}
            </style>
        </div>
    }
}
