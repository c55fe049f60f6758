use yew::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🔒",
        title: "Lock-In Savings Wallets",
        description: "Time-locked savings with customizable milestones. Your money stays secure until you reach your goal.",
    },
    Feature {
        icon: "🛡️",
        title: "Emergency Fund Automation",
        description: "Auto-allocate funds at 25%, 50%, 75%, and 100% thresholds. Build your safety net effortlessly.",
    },
    Feature {
        icon: "🎁",
        title: "Rewards & Discounts",
        description: "Unlock location-based rewards, exclusive coupons, and cashback as you save consistently.",
    },
    Feature {
        icon: "📈",
        title: "Goal Tracking",
        description: "Visual dashboards track your progress in real-time. Stay motivated with intuitive charts and insights.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features">
            <div class="section-heading">
                <span class="section-tag">{"Core Features"}</span>
                <h2>{"Everything You Need to "}<span class="gradient-text">{"Save Smarter"}</span></h2>
                <p>{"Vaultify combines smart automation, gamification, and financial discipline to help you achieve your savings goals."}</p>
            </div>

            <div class="features__grid">
                { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                    <div class="feature-card" style={format!("animation-delay: {}ms", i * 100)}>
                        <div class="feature-card__icon">{ feature.icon }</div>
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .features {
                    padding: 6rem 2rem;
                    background: #fff;
                    color: #0f172a;
                }

                .section-heading {
                    text-align: center;
                    max-width: 42rem;
                    margin: 0 auto 4rem;
                }

                .section-heading h2 {
                    font-size: 2.5rem;
                    margin: 1rem 0;
                }

                .section-heading p {
                    color: #64748b;
                    font-size: 1.1rem;
                }

                .section-tag {
                    display: inline-block;
                    padding: 0.4rem 1rem;
                    border-radius: 9999px;
                    background: #ecfeff;
                    color: #0891b2;
                    font-size: 0.875rem;
                }

                .features__grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .feature-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid #e2e8f0;
                    opacity: 0;
                    animation: fadeUp 0.6s forwards;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .feature-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.08);
                }

                .feature-card__icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .feature-card h3 {
                    font-size: 1.25rem;
                    margin-bottom: 0.5rem;
                }

                .feature-card p {
                    color: #64748b;
                }
                "#}
            </style>
        </section>
    }
}
