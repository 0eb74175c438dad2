use yew::prelude::*;
use log::{info, Level};

use landing_frontend::components::header::Header;
use landing_frontend::config::SiteConfig;
use landing_frontend::notification::host::NotificationHost;
use landing_frontend::pages::landing::Landing;

#[cfg(debug_assertions)]
const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: Level = Level::Info;

#[function_component]
fn App() -> Html {
    let config = use_state(SiteConfig::load);

    html! {
        <NotificationHost timings={config.toast_timings()}>
            <Header config={(*config).clone()} />
            <Landing config={(*config).clone()} />
        </NotificationHost>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(LOG_LEVEL).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
