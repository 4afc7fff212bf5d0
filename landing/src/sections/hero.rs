use std::time::Duration;

use leptos::prelude::*;

use super::animation::{use_counter, use_cycle};
use crate::dialog::use_lead_dialog;

const SLIDES: [&str; 4] = [
    "assets/hero-tech-agriculture.svg",
    "assets/hero-tech-agriculture_5.svg",
    "assets/hero-tech-agriculture_4.svg",
    "assets/hero-tech-agriculture_3.svg",
];

const SLIDE_PERIOD: Duration = Duration::from_secs(5);

#[component]
pub fn Hero() -> impl IntoView {
    let dialog = use_lead_dialog();
    let slide = use_cycle(SLIDES.len(), SLIDE_PERIOD);

    view! {
        <section id="inicio" class="hero">
            <div class="hero-slides">
                {SLIDES
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <img
                                src=*src
                                alt=""
                                class=move || if slide.get() == i { "hero-slide active" } else { "hero-slide" }
                            />
                        }
                    })
                    .collect_view()}
                <div class="hero-overlay"></div>
            </div>

            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Inteligência Artificial na Agricultura"
                    </div>
                    <h1 class="hero-title">
                        "Transformando dados em"
                        <br />
                        <span class="hero-title-accent">"produtividade"</span>
                    </h1>
                    <p class="hero-description">
                        "Tecnologia em Agricultura de Precisão para aumentar eficiência e reduzir custos na sua propriedade rural"
                    </p>
                    <div class="hero-actions">
                        <a href="#contato" class="btn btn-primary">
                            "Fale Conosco →"
                        </a>
                        <button class="btn btn-secondary" on:click=move |_| dialog.open("Teste Grátis")>
                            "Solicitar Teste Gratuito"
                        </button>
                    </div>
                    <div class="hero-stats">
                        <HeroStat target=95 prefix="+" label="Precisão" millis=2500 />
                        <HeroStat target=30 prefix="-" label="Redução de custos" millis=2000 />
                        <HeroStat target=25 prefix="+" label="Produtividade" millis=2200 />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroStat(target: u32, prefix: &'static str, label: &'static str, millis: u64) -> impl IntoView {
    let count = use_counter(target, Duration::from_millis(millis));
    view! {
        <div class="hero-stat">
            <div class="hero-stat-value">{move || format!("{prefix}{}%", count.get())}</div>
            <div class="hero-stat-label">{label}</div>
        </div>
    }
}
