use lead_capture::SiteConfig;
use leptos::ev;
use leptos::prelude::*;

use super::platform::go_to_platform;

const MENU: [(&str, &str); 5] = [
    ("Início", "#inicio"),
    ("Soluções", "#solucoes"),
    ("Sobre", "#sobre"),
    ("Plataforma", "#plataforma"),
    ("Contato", "#contato"),
];

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // solid background once the hero is mostly out of view
    let listener = window_event_listener(ev::scroll, move |_| {
        let window = window();
        let y = window.scroll_y().unwrap_or_default();
        let height = window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        set_scrolled.set(y > height * 0.8);
    });
    on_cleanup(move || listener.remove());

    let platform_url = config.platform_url.clone();
    let login = move |_| go_to_platform(&platform_url);

    view! {
        <header class=move || if scrolled.get() { "header solid" } else { "header" }>
            <div class="header-inner">
                <a href="#inicio" class="header-brand">
                    <img src="assets/tp-logo.svg" alt="Terra Precision" />
                </a>
                <nav class="header-links">
                    {MENU
                        .iter()
                        .map(|(label, href)| view! { <a href=*href class="header-link">{*label}</a> })
                        .collect_view()}
                    <button class="btn btn-primary header-login" on:click=login>
                        "Entrar"
                    </button>
                </nav>
                <button
                    class="header-burger"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="header-drawer">
                    {MENU
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="header-drawer-link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}
