use yew::prelude::*;

use crate::components::{
    cta::CallToAction,
    features::Features,
    footer::Footer,
    hero::Hero,
    rewards::Rewards,
    savings_chart::SavingsChart,
    trust::Trust,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero />
            <Features />
            <Rewards />
            <SavingsChart />
            <Trust />
            <CallToAction />
            <Footer />

            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                    line-height: 1.5;
                }

                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                "#}
            </style>
        </div>
    }
}
