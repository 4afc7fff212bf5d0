use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("100+", "Clientes atendidos"),
    ("50K+", "Hectares mapeados"),
    ("4+", "Anos de experiência"),
];

const BENEFITS: [(&str, &str, &str); 4] = [
    (
        "Aumento de Produtividade",
        "Identifique problemas antes que afetem a colheita e tome decisões baseadas em dados.",
        "+25%",
    ),
    (
        "Redução de Custos",
        "Aplique insumos apenas onde é necessário e elimine desperdícios operacionais.",
        "-40%",
    ),
    (
        "Precisão nos Dados",
        "Mapas e relatórios georeferenciados com qualidade de imagem superior.",
        "95%",
    ),
    (
        "Economia de Tempo",
        "Análises entregues em horas, não em semanas, para agir no momento certo.",
        "-30%",
    ),
];

#[component]
pub fn AboutBenefits() -> impl IntoView {
    view! {
        <section id="sobre" class="about">
            <div class="container">
                <div class="about-grid">
                    <div class="about-text">
                        <p class="section-eyebrow">"Sobre a Terra Precision"</p>
                        <h2 class="section-title">"Agricultura de precisão feita por quem entende do campo"</h2>
                        <p class="section-description">
                            "Unimos drones, processamento de imagens e inteligência artificial para entregar "
                            "informação acionável ao produtor rural, da aquisição dos dados até o plano de ação."
                        </p>
                        <div class="about-stats">
                            {STATS
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="about-stat">
                                            <span class="about-stat-value">{*value}</span>
                                            <span class="about-stat-label">{*label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="benefits-grid">
                        {BENEFITS
                            .iter()
                            .map(|(title, description, highlight)| {
                                view! {
                                    <article class="benefit-card">
                                        <span class="benefit-highlight">{*highlight}</span>
                                        <h3 class="benefit-title">{*title}</h3>
                                        <p class="benefit-description">{*description}</p>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
