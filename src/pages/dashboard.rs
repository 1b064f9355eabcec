use yew::prelude::*;

struct ServiceModule {
    num: &'static str,
    title: &'static str,
    desc: &'static str,
}

const MODULES: [ServiceModule; 4] = [
    ServiceModule {
        num: "I",
        title: "Strategic Asset Valuation",
        desc: "Independent valuations for intangible assets, complex portfolios, and physical reserves utilizing globally recognized modeling standards.",
    },
    ServiceModule {
        num: "II",
        title: "Financial Structuring",
        desc: "Transforming operational data into Tier-1 institution-ready financial models with optimized capital frameworks.",
    },
    ServiceModule {
        num: "III",
        title: "Deal Readiness & Compliance",
        desc: "Comprehensive compliance defense layer for cross-border transactions and SPV structure coordination.",
    },
    ServiceModule {
        num: "IV",
        title: "Execution Infrastructure",
        desc: "Secure data rooms with encrypted audit trails and chain-of-custody management.",
    },
];

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let handle_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            on_logout.emit(());
        })
    };

    html! {
        <div class="dashboard-page">
            <style>
                {r#"
                .dashboard-page {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    overflow-y: auto;
                    font-family: var(--rs-body-font);
                    color: var(--rs-text);
                }
                .dashboard-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 20px 48px;
                }
                .dashboard-header .site-logo { font-size: 13px; font-weight: 600; letter-spacing: 4px; }
                .logout-button {
                    background: none;
                    border: none;
                    font-size: 11px;
                    letter-spacing: 2px;
                    color: var(--rs-muted);
                    cursor: pointer;
                }
                .logout-button:hover { color: var(--rs-text); }
                .dashboard-main { flex: 1; padding: 24px 48px; max-width: 1200px; margin: 0 auto; width: 100%; }
                .dashboard-title {
                    font-family: var(--rs-heading-font);
                    font-size: clamp(24px, 3vw, 36px);
                    font-weight: 400;
                }
                .dashboard-kicker { font-size: 10px; letter-spacing: 3px; color: var(--rs-accent); margin: 8px 0 32px; }
                .module-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: calc(var(--rs-gap) * 2);
                }
                .module-card {
                    border-top: 2px solid #e0e0e0;
                    padding-top: 16px;
                    transition: border-color 0.2s ease;
                }
                .module-card:hover { border-top-color: var(--rs-text); }
                .module-num { font-family: var(--rs-heading-font); font-size: 12px; color: var(--rs-accent); }
                .module-card h2 { font-family: var(--rs-heading-font); font-size: 18px; font-weight: 400; margin: 8px 0; }
                .module-card p { font-size: 13px; line-height: 1.6; color: #555555; }
                .compliance-notice {
                    margin-top: 40px;
                    padding: 16px 20px;
                    background: var(--rs-surface);
                    border-left: 2px solid var(--rs-accent);
                    font-size: 12px;
                    line-height: 1.6;
                    color: #555555;
                }
                .dashboard-footer { padding: 20px 48px; font-size: 10px; color: var(--rs-muted); }
                @media (max-width: 900px) {
                    .dashboard-header, .dashboard-main, .dashboard-footer { padding-left: 24px; padding-right: 24px; }
                }
                "#}
            </style>
            <header class="dashboard-header">
                <div class="site-logo">{"RESONANCE SYNC"}</div>
                <button class="logout-button" onclick={handle_logout}>{"LOGOUT"}</button>
            </header>
            <main class="dashboard-main">
                <h1 class="dashboard-title">{"Capital Formation Solutions"}</h1>
                <p class="dashboard-kicker">{"FOR INSTITUTIONAL INVESTORS"}</p>
                <div class="module-grid">
                    { MODULES.iter().map(|module| html! {
                        <div class="module-card" key={module.num}>
                            <span class="module-num">{module.num}</span>
                            <h2>{module.title}</h2>
                            <p>{module.desc}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
                <div class="compliance-notice">
                    <p>
                        {"Important Notice: We do not provide investment advice, brokerage services, or fund escrow. \
                          Our services are strictly related to deal readiness, asset valuation, and compliance advisory."}
                    </p>
                </div>
            </main>
            <footer class="dashboard-footer">
                {"Resonance Sync Ltd | A Delaware Corporation"}
            </footer>
        </div>
    }
}
