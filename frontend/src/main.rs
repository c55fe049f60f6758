use yew::prelude::*;
use log::{info, Level};

mod config;
mod complaint_client;
mod components {
    pub mod complaint_modal;
    pub mod cta;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod rewards;
    pub mod savings_chart;
    pub mod trust;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

const NAV_LINKS: [(&str, &str); 4] = [
    ("Features", "#features"),
    ("Rewards", "#rewards"),
    ("Progress", "#progress"),
    ("Security", "#trust"),
];

#[function_component]
fn Nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">{"🔒 Vault"}</a>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span class="burger-icon">{"☰"}</span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    { for NAV_LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                    <a href="#cta" class="nav-cta" onclick={close_menu.clone()}>{"Get Started"}</a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: rgba(23, 37, 84, 0.7);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }

                .nav-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                }

                .nav-logo {
                    color: #fff;
                    font-size: 1.25rem;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #dbeafe;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: #22d3ee;
                }

                .nav-cta {
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #06b6d4, #10b981);
                    color: #fff;
                    text-decoration: none;
                }

                .burger-menu {
                    display: none;
                    border: none;
                    background: none;
                    color: #fff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(23, 37, 84, 0.95);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }
    // Route the complaints crate's tracing events to the console too
    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        log::warn!("tracing subscriber already set: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
