use yew::prelude::*;

struct Reward {
    name: &'static str,
    discount: &'static str,
    distance_km: f32,
    color: &'static str,
    // Marker position on the map, in percent.
    left: u8,
    top: u8,
}

const REWARDS: [Reward; 4] = [
    Reward { name: "Coffee Shop", discount: "20% OFF", distance_km: 0.3, color: "#f59e0b", left: 33, top: 25 },
    Reward { name: "Fitness Center", discount: "1 Month Free", distance_km: 0.5, color: "#10b981", left: 72, top: 33 },
    Reward { name: "Restaurant", discount: "₹250 OFF", distance_km: 0.8, color: "#a855f7", left: 25, top: 70 },
    Reward { name: "Book Store", discount: "15% OFF", distance_km: 1.2, color: "#3b82f6", left: 66, top: 75 },
];

#[function_component(Rewards)]
pub fn rewards() -> Html {
    html! {
        <section id="rewards" class="rewards">
            <div class="rewards__content">
                <div class="rewards__map">
                    <div class="map-grid"></div>
                    <svg class="map-lines">
                        { for REWARDS.iter().map(|r| html! {
                            <line x1="50%" y1="50%"
                                x2={format!("{}%", r.left)} y2={format!("{}%", r.top)}
                                stroke="rgba(16, 185, 129, 0.3)" stroke-width="2" stroke-dasharray="5,5" />
                        }) }
                    </svg>
                    <div class="map-you">{"📍"}</div>
                    { for REWARDS.iter().enumerate().map(|(i, r)| html! {
                        <div class="map-marker"
                            style={format!("left: {}%; top: {}%; background: {}; animation-delay: {}ms;",
                                r.left, r.top, r.color, 300 + i * 100)}>
                            {"🏷️"}
                        </div>
                    }) }
                    <div class="map-card">
                        <span class="map-card__title">{"New reward unlocked!"}</span>
                        <span>{"Coffee Shop · 20% OFF"}</span>
                    </div>
                </div>

                <div class="rewards__text">
                    <span class="section-tag">{"✨ Location-Based Rewards"}</span>
                    <h2>{"Earn While You "}<span class="gradient-text">{"Save"}</span></h2>
                    <p>
                        {"The more you save, the more you earn. Vault unlocks exclusive discounts and cashback offers from local businesses near you."}
                    </p>
                    <ul class="reward-list">
                        { for REWARDS.iter().map(|r| html! {
                            <li class="reward-item">
                                <span class="reward-item__dot" style={format!("background: {};", r.color)}></span>
                                <div class="reward-item__info">
                                    <span class="reward-item__name">{ r.name }</span>
                                    <span class="reward-item__distance">{ format!("📍 {} Km away", r.distance_km) }</span>
                                </div>
                                <span class="reward-item__discount">{ r.discount }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>

            <style>
                {r#"
                .rewards {
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #ecfdf5, #ecfeff);
                    color: #0f172a;
                }

                .rewards__content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .rewards__map {
                    position: relative;
                    height: 26rem;
                    border-radius: 1.5rem;
                    background: #fff;
                    overflow: hidden;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.08);
                }

                .map-grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(16, 185, 129, 0.08) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(16, 185, 129, 0.08) 1px, transparent 1px);
                    background-size: 40px 40px;
                }

                .map-lines {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }

                .map-you {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    transform: translate(-50%, -50%);
                    font-size: 2rem;
                    animation: pulse 2s ease-in-out infinite;
                }

                .map-marker {
                    position: absolute;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transform: translate(-50%, -50%) scale(0);
                    animation: markerIn 0.4s forwards;
                }

                @keyframes markerIn {
                    to { transform: translate(-50%, -50%) scale(1); }
                }

                .map-card {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    flex-direction: column;
                    padding: 0.75rem 1.25rem;
                    border-radius: 0.75rem;
                    background: #fff;
                    box-shadow: 0 10px 20px rgba(15, 23, 42, 0.12);
                    font-size: 0.875rem;
                }

                .map-card__title {
                    font-weight: 600;
                }

                .rewards__text h2 {
                    font-size: 2.5rem;
                    margin: 1rem 0;
                }

                .rewards__text p {
                    color: #475569;
                    margin-bottom: 2rem;
                }

                .reward-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .reward-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #fff;
                    transition: transform 0.3s ease;
                }

                .reward-item:hover {
                    transform: translateX(4px);
                }

                .reward-item__dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                }

                .reward-item__info {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }

                .reward-item__distance {
                    color: #64748b;
                    font-size: 0.8rem;
                }

                .reward-item__discount {
                    color: #059669;
                    font-weight: 600;
                }

                @media (max-width: 900px) {
                    .rewards__content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
