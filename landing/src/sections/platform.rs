use std::time::Duration;

use lead_capture::SiteConfig;
use leptos::prelude::*;
use tracing::error;

use crate::dialog::use_lead_dialog;

/// Leaves the landing page for the customer platform. The short delay lets
/// the button's press animation finish.
pub(crate) fn go_to_platform(url: &str) {
    let url = url.to_string();
    set_timeout(
        move || {
            if let Err(err) = window().location().set_href(&url) {
                error!(error = ?err, "platform redirect failed");
            }
        },
        Duration::from_millis(200),
    );
}

const FEATURES: [(&str, &str); 4] = [
    ("Solicite Serviços Rápido", "Solicite serviços de forma rápida e fácil"),
    ("Centralização dos Dados", "Acompanhe e gerencie suas ordens de serviços em um só lugar"),
    ("Acesso 24/7", "Plataforma disponível quando e onde você precisar"),
    ("Analytics", "Métricas detalhadas e insights para tomada de decisão"),
];

const DASHBOARD_STATS: [(&str, &str); 4] = [
    ("Área Total", "867.06 ha"),
    ("Processados", "3"),
    ("Em Análise", "5"),
    ("Concluídos", "12"),
];

const ORDERS: [(&str, &str, &str); 3] = [
    ("OS-0142", "Mapeamento por Drone", "Concluído"),
    ("OS-0143", "Falhas de Plantio", "Em Processamento"),
    ("OS-0144", "Linhas de Colheita", "Em Análise"),
];

fn order_status_class(status: &str) -> &'static str {
    match status {
        "Concluído" => "order-status done",
        "Em Processamento" => "order-status running",
        _ => "order-status pending",
    }
}

#[component]
pub fn PlatformPreview() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let dialog = use_lead_dialog();
    let platform_url = config.platform_url.clone();

    view! {
        <section id="plataforma" class="platform">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Plataforma Terra Precision"</p>
                    <h2 class="section-title">"Toda sua operação em uma única plataforma"</h2>
                    <p class="section-description">
                        "Gerencie, acompanhe e otimize todos os seus serviços agrícolas em tempo real. "
                        "Interface intuitiva, resultados precisos."
                    </p>
                </div>

                <div class="platform-grid">
                    <div class="platform-dashboard">
                        <div class="dashboard-stats">
                            {DASHBOARD_STATS
                                .iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="dashboard-stat">
                                            <span class="dashboard-stat-value">{*value}</span>
                                            <span class="dashboard-stat-label">{*label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <ul class="dashboard-orders">
                            {ORDERS
                                .iter()
                                .map(|(id, service, status)| {
                                    view! {
                                        <li class="dashboard-order">
                                            <span class="order-id">{*id}</span>
                                            <span class="order-service">{*service}</span>
                                            <span class=order_status_class(status)>{*status}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="platform-features">
                        {FEATURES
                            .iter()
                            .map(|(title, description)| {
                                view! {
                                    <article class="feature-card">
                                        <h3 class="feature-title">{*title}</h3>
                                        <p class="feature-description">{*description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="platform-cta">
                    <p>"Experimente a diferença de uma gestão verdadeiramente digital"</p>
                    <div class="platform-actions">
                        <button class="btn btn-primary" on:click=move |_| go_to_platform(&platform_url)>
                            "Acessar Plataforma"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| dialog.open("Teste Grátis - Plataforma Section")
                        >
                            "Solicitar Teste Gratuito"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_order_has_a_status_style() {
        assert_eq!(order_status_class("Concluído"), "order-status done");
        assert_eq!(order_status_class("Em Processamento"), "order-status running");
        assert_eq!(order_status_class("Em Análise"), "order-status pending");
    }
}
