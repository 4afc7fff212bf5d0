// Terra Precision landing page (Leptos 0.8, client-side rendered)
// Created by the Terra Precision web team (c)2025

mod analytics;
mod dialog;
mod http;
mod sections;
mod timers;

use lead_capture::SiteConfig;
use leptos::prelude::*;
use sections::*;
use tracing::{debug, error};

fn main() {
    console_error_panic_hook::set_once();
    install_logging();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Routes `tracing` events (ours and `lead_capture`'s) to the browser console.
fn install_logging() {
    if tracing_wasm::try_set_as_global_default().is_err() {
        debug!("tracing subscriber already installed");
    }
}

#[component]
fn App() -> impl IntoView {
    let config = match SiteConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid site config, using defaults");
            SiteConfig::default()
        }
    };
    dialog::LeadDialog::provide(&config);
    provide_context(config);

    view! {
        <Header />
        <main>
            <Hero />
            <Solutions />
            <AboutBenefits />
            <PlatformPreview />
            <Contact />
        </main>
        <Footer />
        <LeadModal />
        <Toast />
    }
}
