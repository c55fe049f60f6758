use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum TransactionStatus {
    Completed,
    Locked,
    Automated,
}

impl TransactionStatus {
    fn icon(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "✓",
            TransactionStatus::Locked => "🔒",
            TransactionStatus::Automated => "⚡",
        }
    }

    fn class(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Locked => "locked",
            TransactionStatus::Automated => "automated",
        }
    }
}

struct Transaction {
    kind: &'static str,
    amount: &'static str,
    date: &'static str,
    status: TransactionStatus,
}

const TRANSACTIONS: [Transaction; 4] = [
    Transaction { kind: "Deposit", amount: "+₹500", date: "Dec 18, 2024", status: TransactionStatus::Completed },
    Transaction { kind: "Goal: Vacation", amount: "-₹200", date: "Dec 17, 2024", status: TransactionStatus::Locked },
    Transaction { kind: "Reward Earned", amount: "+₹25", date: "Dec 16, 2024", status: TransactionStatus::Completed },
    Transaction { kind: "Emergency Fund", amount: "+₹150", date: "Dec 15, 2024", status: TransactionStatus::Automated },
];

const SECURITY_FEATURES: [(&str, &str, &str); 3] = [
    ("🛡️", "Bank-Level Encryption", "256-bit SSL encryption protects all your data"),
    ("🔐", "Secure Lock-In", "Your savings are protected with time-based locks"),
    ("👁️", "Full Transparency", "Clear penalty structure and complete transaction history"),
];

const BADGES: [&str; 3] = ["RBI Approved", "256-bit SSL", "SOC 2 Certified"];

#[function_component(Trust)]
pub fn trust() -> Html {
    html! {
        <section id="trust" class="trust">
            <div class="trust__content">
                <div class="ledger">
                    <div class="ledger__header">
                        <div>
                            <h3>{"Recent Activity"}</h3>
                            <span class="ledger__sub">{"Every rupee accounted for"}</span>
                        </div>
                        <button type="button" class="ledger__all">{"View All"}</button>
                    </div>

                    { for TRANSACTIONS.iter().map(|t| {
                        let credit = t.amount.starts_with('+');
                        html! {
                            <div class="ledger__row">
                                <div class={classes!("ledger__icon", t.status.class())}>{ t.status.icon() }</div>
                                <div class="ledger__info">
                                    <span>{ t.kind }</span>
                                    <span class="ledger__date">{ t.date }</span>
                                </div>
                                <span class={classes!("ledger__amount", credit.then_some("credit"))}>{ t.amount }</span>
                            </div>
                        }
                    }) }

                    <div class="penalty">
                        <span class="penalty__title">{"⚠️ Early Withdrawal Policy"}</span>
                        <p>
                            {"Breaking a lock-in incurs a penalty depending how soon you withdraw. Stay disciplined, stay rewarded."}
                        </p>
                    </div>
                </div>

                <div class="trust__text">
                    <span class="section-tag">{"Security & Trust"}</span>
                    <h2>{"Your Money Is "}<span class="gradient-text">{"Safe With Us"}</span></h2>
                    <p>
                        {"Built with enterprise-grade security. Your financial data is encrypted, protected, and always in your control."}
                    </p>

                    { for SECURITY_FEATURES.iter().map(|(icon, title, description)| html! {
                        <div class="security-item">
                            <div class="security-item__icon">{ *icon }</div>
                            <div>
                                <h4>{ *title }</h4>
                                <p>{ *description }</p>
                            </div>
                        </div>
                    }) }

                    <div class="badges">
                        { for BADGES.iter().map(|badge| html! {
                            <span class="badge">{ format!("✓ {}", badge) }</span>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .trust {
                    padding: 6rem 2rem;
                    background: #fff;
                    color: #0f172a;
                }

                .trust__content {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .ledger {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #f8fafc;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.06);
                }

                .ledger__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }

                .ledger__sub,
                .ledger__date {
                    color: #64748b;
                    font-size: 0.8rem;
                }

                .ledger__all {
                    border: none;
                    background: none;
                    color: #0891b2;
                    cursor: pointer;
                }

                .ledger__row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.75rem 0;
                    border-bottom: 1px solid #e2e8f0;
                }

                .ledger__icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .ledger__icon.completed { background: #d1fae5; }
                .ledger__icon.locked { background: #cffafe; }
                .ledger__icon.automated { background: #f3e8ff; }

                .ledger__info {
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                }

                .ledger__amount.credit {
                    color: #059669;
                }

                .penalty {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: #fffbeb;
                    border: 1px solid #fde68a;
                    font-size: 0.875rem;
                }

                .penalty__title {
                    font-weight: 600;
                }

                .trust__text h2 {
                    font-size: 2.5rem;
                    margin: 1rem 0;
                }

                .trust__text > p {
                    color: #475569;
                    margin-bottom: 2rem;
                }

                .security-item {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                }

                .security-item__icon {
                    font-size: 1.5rem;
                }

                .security-item p {
                    color: #64748b;
                    font-size: 0.9rem;
                }

                .badges {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }

                .badge {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: #ecfdf5;
                    color: #047857;
                    font-size: 0.8rem;
                }

                @media (max-width: 900px) {
                    .trust__content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
