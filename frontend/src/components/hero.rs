use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_to_features = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("features"))
        {
            section.scroll_into_view();
        }
    });

    html! {
        <section class="hero">
            <div class="hero__glow hero__glow--cyan"></div>
            <div class="hero__glow hero__glow--emerald"></div>
            <div class="hero__grid"></div>

            <div class="hero__content">
                <div class="hero__text">
                    <h1>
                        {"VAULTIFY"}<br /><br />
                        {"Save Smarter."}<br />
                        <span class="gradient-text">{"Earn Rewards."}</span><br />
                        {"Secure Your Future."}
                    </h1>
                    <p>
                        {"Vault is your intelligent savings companion. Lock in your goals, automate your emergency fund, and earn rewards while building wealth with discipline."}
                    </p>
                    <div class="hero__buttons">
                        <a href="#cta" class="hero__primary">
                            <span>{"Get Started"}</span>
                            <i class="arrow">{"→"}</i>
                        </a>
                        <a href="#features" class="hero__secondary" onclick={scroll_to_features}>
                            {"▶ See How It Works"}
                        </a>
                    </div>
                </div>

                <div class="hero__mockup">
                    <img src="/assets/vault-app.png" alt="Vaultify Mobile App Interface" />
                    <div class="floating-badge floating-badge--saved">{"+₹250 saved!"}</div>
                    <div class="floating-badge floating-badge--goal">{"🎯 Goal: 75%"}</div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #172554, #1e3a8a 50%, #164e63);
                    color: #fff;
                }

                .hero__glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation: pulse 4s ease-in-out infinite;
                }

                .hero__glow--cyan {
                    top: 5rem;
                    left: 2.5rem;
                    width: 18rem;
                    height: 18rem;
                    background: rgba(6, 182, 212, 0.2);
                }

                .hero__glow--emerald {
                    bottom: 5rem;
                    right: 2.5rem;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(16, 185, 129, 0.2);
                    animation-delay: 1s;
                }

                .hero__grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(6, 182, 212, 0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(6, 182, 212, 0.1) 1px, transparent 1px);
                    background-size: 50px 50px;
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                .hero__content {
                    position: relative;
                    z-index: 1;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    max-width: 1200px;
                    width: 100%;
                }

                .hero__text h1 {
                    font-size: 4rem;
                    line-height: 1.1;
                    opacity: 0;
                    animation: fadeUp 0.8s 0.3s forwards;
                }

                .hero__text p {
                    font-size: 1.25rem;
                    color: #dbeafe;
                    max-width: 32rem;
                    margin: 1.5rem 0;
                    opacity: 0;
                    animation: fadeUp 0.8s 0.5s forwards;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #22d3ee, #34d399);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero__buttons {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero__primary,
                .hero__secondary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    color: #fff;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero__primary {
                    background: linear-gradient(90deg, #06b6d4, #10b981);
                }

                .hero__primary:hover {
                    box-shadow: 0 8px 24px rgba(6, 182, 212, 0.5);
                }

                .hero__primary:hover .arrow {
                    transform: translateX(4px);
                }

                .arrow {
                    transition: transform 0.3s ease;
                }

                .hero__secondary {
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }

                .hero__mockup {
                    position: relative;
                    display: flex;
                    justify-content: center;
                }

                .hero__mockup img {
                    max-width: 79%;
                    height: auto;
                }

                .floating-badge {
                    position: absolute;
                    padding: 0.75rem 1.5rem;
                    border-radius: 1rem;
                    font-size: 0.875rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.25);
                }

                .floating-badge--saved {
                    top: 2.5rem;
                    right: -1.5rem;
                    background: #10b981;
                    animation: float 3s ease-in-out infinite;
                }

                .floating-badge--goal {
                    bottom: 5rem;
                    left: -1.5rem;
                    background: #06b6d4;
                    animation: float 4s 1s ease-in-out infinite reverse;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }

                @media (max-width: 900px) {
                    .hero__content {
                        grid-template-columns: 1fr;
                    }

                    .hero__text h1 {
                        font-size: 2.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
