use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::submission::{GateEvent, GateState, PendingTimer, SubmissionStatus, Wakeup};
use crate::auth::validation::Field;
use crate::config::SubmissionConfig;

const PROMISES: [&str; 4] = [
    "Institutional-grade asset valuation",
    "Investor-ready financial structuring",
    "Full compliance and deal readiness",
    "Secure, encrypted data environments",
];

#[derive(Properties, PartialEq)]
pub struct GatePageProps {
    pub config: SubmissionConfig,
    pub on_login: Callback<()>,
}

#[function_component(GatePage)]
pub fn gate_page(props: &GatePageProps) -> Html {
    html! {
        <div class="gate-page">
            <style>
                {r#"
                .gate-page {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    font-family: var(--rs-body-font);
                    color: var(--rs-text);
                }
                .site-header, .site-footer {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 20px 48px;
                }
                .site-logo {
                    font-size: 13px;
                    font-weight: 600;
                    letter-spacing: 4px;
                }
                .gate-main {
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 64px;
                    padding: 0 48px;
                }
                .content-section { flex: 1; max-width: 620px; }
                .main-title {
                    font-family: var(--rs-heading-font);
                    font-size: clamp(24px, 3vw, 40px);
                    font-weight: 400;
                    line-height: 1.15;
                    margin-bottom: 12px;
                }
                .subtitle-text {
                    font-family: var(--rs-heading-font);
                    font-style: italic;
                    font-size: clamp(14px, 1.5vw, 18px);
                    margin-bottom: 20px;
                }
                .description-section {
                    font-size: clamp(13px, 1vw, 15px);
                    line-height: 1.6;
                    color: #444444;
                }
                .description-section p { margin-bottom: 8px; }
                .promise-section { margin-top: 28px; }
                .promise-label {
                    display: block;
                    font-size: 9px;
                    letter-spacing: 3px;
                    color: var(--rs-accent);
                    margin-bottom: 10px;
                }
                .promise-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 6px 24px;
                    font-size: 13px;
                }
                .site-footer {
                    font-size: 10px;
                    color: var(--rs-muted);
                }
                .site-footer .disclaimer { max-width: 280px; text-align: right; line-height: 1.4; }
                @media (max-width: 900px) {
                    .gate-main {
                        flex-direction: column;
                        justify-content: center;
                        gap: 16px;
                        padding: 0 24px;
                    }
                    .content-section { text-align: center; }
                    .description-p2 { display: none; }
                    .promise-grid { grid-template-columns: 1fr; }
                    .site-header, .site-footer { padding: 16px 24px; }
                }
                "#}
            </style>
            <header class="site-header">
                <div class="site-logo">{"RESONANCE SYNC"}</div>
            </header>
            <main class="gate-main">
                <div class="content-section">
                    <h1 class="main-title">{"Institutional Solutions for Capital Formation"}</h1>
                    <p class="subtitle-text">{"Capital Readiness for Global Markets."}</p>
                    <div class="description-section">
                        <p>
                            {"We provide elite, institutional-grade solutions to drive your business forward, \
                              from strategic asset valuation to comprehensive compliance frameworks."}
                        </p>
                        <p class="description-p2">
                            {"Whether you're looking to optimize your capital structure, prepare for \
                              institutional investors, or ensure cross-border deal readiness, our solutions \
                              align with the highest industry standards."}
                        </p>
                    </div>
                    <div class="promise-section">
                        <span class="promise-label">{"OUR PROMISE"}</span>
                        <div class="promise-grid">
                            { PROMISES.iter().map(|promise| html! { <span>{*promise}</span> }).collect::<Html>() }
                        </div>
                    </div>
                </div>
                <GateForm config={props.config.clone()} on_login={props.on_login.clone()} />
            </main>
            <footer class="site-footer">
                <span>{"Resonance Sync Ltd | A Delaware Corporation"}</span>
                <span class="disclaimer">
                    {"We do not provide investment advice, brokerage services, or escrow of funds."}
                </span>
            </footer>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GateFormProps {
    pub config: SubmissionConfig,
    pub on_login: Callback<()>,
}

#[function_component(GateForm)]
pub fn gate_form(props: &GateFormProps) -> Html {
    let state = use_reducer({
        let config = props.config.clone();
        move || GateState::new(config)
    });

    // Keep exactly the timer the current status asks for. The Timeout is
    // dropped (and so cancelled) when that changes or the form unmounts.
    {
        let dispatcher = state.dispatcher();
        let on_login = props.on_login.clone();
        let fire = {
            let state = state.clone();
            move |wakeup: Wakeup| state.fire(wakeup)
        };
        use_effect_with_deps(
            move |pending: &Option<PendingTimer>| {
                let timeout = (*pending).map(|timer| {
                    let fired = fire(timer.wakeup);
                    Timeout::new(timer.delay_ms, move || {
                        if let GateEvent::VerificationResolved(Err(e)) = &fired.event {
                            gloo_console::error!("Submission error:", e.to_string());
                        }
                        dispatcher.dispatch(fired.event);
                        if fired.emit_login {
                            on_login.emit(());
                        }
                    })
                });
                move || drop(timeout)
            },
            state.pending_timer(),
        );
    }

    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(GateEvent::SubmitAttempted);
        })
    };

    let locked = state.is_locked();
    let succeeded = state.status == SubmissionStatus::Succeeded;

    html! {
        <div class="form-section">
            <style>
                {r#"
                .form-section { width: 380px; max-width: 100%; }
                .form-container {
                    background: var(--rs-surface);
                    border: 1px solid #e0e0de;
                    border-radius: 8px;
                    padding: 28px;
                }
                .form-title {
                    font-family: var(--rs-heading-font);
                    font-size: clamp(18px, 2vw, 24px);
                    font-weight: 400;
                    margin-bottom: 4px;
                }
                .form-subtitle { font-size: clamp(11px, 0.9vw, 13px); color: #666666; margin-bottom: 18px; }
                .form-field { margin-bottom: var(--rs-gap); }
                .form-field label {
                    display: block;
                    margin-bottom: 4px;
                    font-size: 13px;
                    font-weight: 500;
                    color: #333333;
                }
                .required-mark { color: var(--rs-error); }
                .gate-input {
                    width: 100%;
                    height: var(--rs-field-height);
                    padding: 0 12px;
                    font-size: 16px;
                    font-family: var(--rs-body-font);
                    border: 1px solid var(--rs-border);
                    border-radius: 6px;
                    outline: none;
                    background: #ffffff;
                    color: var(--rs-text);
                    box-sizing: border-box;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }
                .gate-input.is-focused {
                    border: 2px solid var(--rs-accent);
                    box-shadow: 0 0 0 2px rgba(139, 115, 85, 0.1);
                }
                .gate-input.has-error { border: 2px solid var(--rs-error); }
                .gate-input::placeholder { color: #999999; }
                .gate-input:disabled { background-color: #f5f5f5; cursor: not-allowed; }
                .field-error { color: var(--rs-error); font-size: 12px; margin-top: 2px; }
                .field-hint { color: var(--rs-muted); font-size: 11px; margin-top: 4px; }
                .form-notice {
                    color: var(--rs-error);
                    font-size: 12px;
                    margin-bottom: 10px;
                }
                .submit-button {
                    width: 100%;
                    height: var(--rs-field-height);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                    border: none;
                    border-radius: 6px;
                    background-color: var(--rs-accent);
                    color: #ffffff;
                    font-size: 12px;
                    letter-spacing: 2px;
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }
                .submit-button:hover:enabled { background-color: var(--rs-accent-hover); }
                .submit-button:disabled { cursor: not-allowed; opacity: 0.85; }
                .submit-button.succeeded { background-color: var(--rs-success); opacity: 1; }
                .submit-button .spinner { animation: spin 1s linear infinite; }
                .privacy-note { font-size: 10px; color: var(--rs-muted); margin-top: 12px; text-align: center; }
                .privacy-note a { color: var(--rs-accent); }
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                "#}
            </style>
            <div class="form-container">
                <h2 class="form-title">{"Client Access"}</h2>
                <p class="form-subtitle">{"Enter your details to access our services."}</p>
                <form {onsubmit} novalidate=true>
                    {
                        if let Some(notice) = state.notice {
                            html! { <div class="form-notice">{notice}</div> }
                        } else {
                            html! {}
                        }
                    }
                    { Field::ALL.into_iter().map(|field| render_field(field, &state)).collect::<Html>() }
                    <button
                        type="submit"
                        class={classes!("submit-button", succeeded.then_some("succeeded"))}
                        disabled={locked}
                    >
                        { submit_icon(state.status) }
                        {state.submit_label()}
                    </button>
                    <p class="privacy-note">
                        {"By submitting, you agree to our "}
                        <a href="#">{"Privacy Policy"}</a>
                        {"."}
                    </p>
                </form>
            </div>
        </div>
    }
}

fn render_field(field: Field, state: &UseReducerHandle<GateState>) -> Html {
    let error = state.errors.get(field);
    let focused = state.focused == Some(field);

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(GateEvent::FieldChanged(field, input.value()));
        })
    };
    let onfocus = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(GateEvent::Focused(field)))
    };
    let onblur = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(GateEvent::Blurred))
    };

    html! {
        <div class="form-field" key={field.id()}>
            <label for={field.id()}>
                {field.label()}{" "}<span class="required-mark">{"*"}</span>
            </label>
            <input
                id={field.id()}
                type={field.input_type()}
                class={classes!("gate-input", error.is_some().then_some("has-error"), focused.then_some("is-focused"))}
                value={state.form.value(field).to_string()}
                placeholder={field.placeholder()}
                autocomplete={field.autocomplete()}
                disabled={state.is_locked()}
                {oninput}
                {onfocus}
                {onblur}
            />
            {
                if let Some(error) = error {
                    html! { <div class="field-error">{error.message(field)}</div> }
                } else {
                    html! {}
                }
            }
            {
                if field == Field::ReferralCode {
                    html! { <p class="field-hint">{"Valid referral code required for access."}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn submit_icon(status: SubmissionStatus) -> Html {
    match status {
        SubmissionStatus::Idle => html! {},
        SubmissionStatus::Submitting => html! {
            <svg class="spinner" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="10" stroke-opacity="0.3"></circle>
                <path d="M12 2a10 10 0 0 1 10 10" stroke-opacity="1"></path>
            </svg>
        },
        SubmissionStatus::Succeeded => html! {
            <svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
                <polyline points="20 6 9 17 4 12"></polyline>
            </svg>
        },
    }
}
