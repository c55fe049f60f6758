use yew::prelude::*;

use crate::components::complaint_modal::ComplaintModal;

const LINK_GROUPS: [(&str, [&str; 4]); 4] = [
    ("Product", ["Features", "How It Works", "Pricing", "Rewards"]),
    ("Company", ["About", "Blog", "Careers", "Press"]),
    ("Resources", ["Help Center", "Security", "Privacy", "Terms"]),
    ("Connect", ["Twitter", "LinkedIn", "Instagram", "Facebook"]),
];

const SOCIALS: [&str; 3] = ["Twitter", "LinkedIn", "Instagram"];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <div class="footer__logo">
                        <span class="footer__lock">{"🔒"}</span>
                        <span class="footer__name">{"Vault"}</span>
                    </div>
                    <p>{"The smart savings platform that helps you build wealth with discipline, automation, and rewards."}</p>
                    <div class="footer__complaint">
                        <ComplaintModal />
                    </div>
                    <div class="footer__socials">
                        { for SOCIALS.iter().map(|social| html! {
                            <a href="#" class="footer__social" aria-label={*social}>
                                <span class="footer__social-dot"></span>
                            </a>
                        }) }
                    </div>
                </div>

                { for LINK_GROUPS.iter().map(|(group, links)| html! {
                    <div class="footer__links">
                        <h3>{ *group }</h3>
                        <ul>
                            { for links.iter().map(|link| html! {
                                <li><a href="#">{ *link }</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <div class="footer__bottom">
                <p>{"© 2024 Vault. All rights reserved."}</p>
                <div class="footer__legal">
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Cookie Policy"}</a>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 4rem 2rem 2rem;
                }

                .footer__grid {
                    display: grid;
                    grid-template-columns: 2fr repeat(4, 1fr);
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto 3rem;
                }

                .footer__logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .footer__lock {
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #06b6d4, #10b981);
                }

                .footer__name {
                    font-size: 1.5rem;
                    color: #fff;
                }

                .footer__brand p {
                    color: #9ca3af;
                    max-width: 24rem;
                    margin-bottom: 1.5rem;
                }

                .footer__complaint {
                    margin-bottom: 1.5rem;
                }

                .footer__socials {
                    display: flex;
                    gap: 1rem;
                }

                .footer__social {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.5rem;
                    background: #1f2937;
                    transition: background 0.3s ease;
                }

                .footer__social:hover {
                    background: linear-gradient(135deg, #06b6d4, #10b981);
                }

                .footer__social-dot {
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    background: #9ca3af;
                }

                .footer__links h3 {
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .footer__links ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer a:hover {
                    color: #22d3ee;
                }

                .footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .footer__legal {
                    display: flex;
                    gap: 1.5rem;
                }

                @media (max-width: 900px) {
                    .footer__grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
