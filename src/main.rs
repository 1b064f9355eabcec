use log::{info, Level};
use yew::prelude::*;

mod config;
mod session;
mod theme;
mod auth {
    pub mod submission;
    pub mod validation;
}
mod pages {
    pub mod dashboard;
    pub mod gate;
}
mod components {
    pub mod background;
}

use components::background::Background;
use config::SiteConfig;
use pages::{dashboard::Dashboard, gate::GatePage};
use session::{Session, SessionAction, SessionView};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let session = use_reducer(Session::default);

    let handle_login = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Login))
    };
    let handle_logout = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::Logout))
    };

    let view = match session.view() {
        SessionView::Gate => {
            info!("Rendering gate page");
            html! { <GatePage config={props.config.submission.clone()} on_login={handle_login} /> }
        }
        SessionView::Dashboard => {
            info!("Rendering dashboard");
            html! { <Dashboard on_logout={handle_logout} /> }
        }
    };

    html! {
        <>
            <style>{props.config.theme.stylesheet()}</style>
            <Background />
            {view}
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    let config = SiteConfig::load();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
