use yew::prelude::*;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section id="cta" class="cta">
            <div class="cta__glow cta__glow--cyan"></div>
            <div class="cta__glow cta__glow--emerald"></div>

            <div class="cta__content">
                <span class="cta__badge">{"🚀 Join into Smart Savers cult. Let's Lockin"}</span>
                <h2>
                    {"Start Saving with"}<br />
                    <span class="gradient-text">{"Vault Today"}</span>
                </h2>
                <p>
                    {"Take control of your financial future. Build wealth with discipline, earn rewards, and achieve your goals faster than ever."}
                </p>
                <button type="button" class="cta__button" disabled=true>
                    {"COMING VERY SOON"}
                </button>
            </div>

            <style>
                {r#"
                .cta {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #172554, #164e63 50%, #064e3b);
                    color: #fff;
                    text-align: center;
                }

                .cta__glow {
                    position: absolute;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse 4s ease-in-out infinite;
                }

                .cta__glow--cyan {
                    top: 25%;
                    left: 25%;
                    background: rgba(6, 182, 212, 0.2);
                }

                .cta__glow--emerald {
                    bottom: 25%;
                    right: 25%;
                    background: rgba(16, 185, 129, 0.2);
                    animation-delay: 1s;
                }

                .cta__content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .cta__badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    background: rgba(16, 185, 129, 0.2);
                    border: 1px solid rgba(16, 185, 129, 0.3);
                    color: #6ee7b7;
                }

                .cta h2 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                }

                .cta p {
                    font-size: 1.25rem;
                    color: #dbeafe;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .cta__button {
                    min-width: 200px;
                    padding: 1rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #06b6d4, #10b981);
                    color: #fff;
                    font-size: 1rem;
                    cursor: default;
                }
                "#}
            </style>
        </section>
    }
}
