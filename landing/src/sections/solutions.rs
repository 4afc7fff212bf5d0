use std::time::Duration;

use leptos::prelude::*;

use super::animation::{use_carousel, use_counter, use_cycle};

const AUTOPLAY_PERIOD: Duration = Duration::from_secs(4);
const STEP_IMAGE_PERIOD: Duration = Duration::from_millis(1500);
const BENEFIT_PERIOD: Duration = Duration::from_millis(2500);

struct Metric {
    value: u32,
    suffix: &'static str,
    label: &'static str,
}

const fn metric(value: u32, suffix: &'static str, label: &'static str) -> Metric {
    Metric { value, suffix, label }
}

/// What the expanded card shows above the metrics.
enum Media {
    Video(&'static str),
    /// Processing steps shown one after another
    Steps(&'static [&'static str]),
}

struct Solution {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    cover: &'static str,
    /// `(text, highlighted)` segments of the headline inside the details
    impact: &'static [(&'static str, bool)],
    media: Media,
    metrics: [Metric; 3],
    how_it_works: [(&'static str, &'static str); 3],
    differential: &'static str,
    results: [&'static str; 3],
}

static SOLUTIONS: [Solution; 5] = [
    Solution {
        title: "Mapeamento por Drone",
        description: "Captura de imagens aéreas de alta resolução para identificar problemas rapidamente e planejar ações com precisão estratégica.",
        features: ["Alta Qualidade de Imagem", "Análise em Tempo Real", "Mapas georeferenciados"],
        cover: "assets/drone-mapping.svg",
        impact: &[
            ("Mapeie cada hectare com ", false),
            ("precisão", true),
            (" e transforme a gestão do campo em mais ", false),
            ("produtividade", true),
            (" e ", false),
            ("lucro", true),
        ],
        media: Media::Video("assets/mapeamento.mp4"),
        metrics: [
            metric(500, "+", "Hectares/dia"),
            metric(98, "%", "Precisão"),
            metric(45, "%", "Redução de custos"),
        ],
        how_it_works: [
            ("Voo Autônomo", "Drone mapeia área automaticamente"),
            ("GSD de 2cm", "Imagens de altíssima resolução"),
            ("Altíssima Precisão", "Imagens georreferenciadas"),
        ],
        differential: "A Terra Precision oferece uma análise completa da sua propriedade, desde o operacional até a geração de dados que apoiam decisões mais precisas.",
        results: [
            "Visão Completa e Detalhada da Propriedade",
            "Monitoramento da Produtividade",
            "Planejamento de Operações com Precisão",
        ],
    },
    Solution {
        title: "Processamento de Imagens",
        description: "Geração de ortomosaicos detalhados e georeferenciados para visualização completa e análise precisa da sua propriedade.",
        features: ["Ortomosaicos", "Análise multiespectral", "Modelos Digitais"],
        cover: "assets/image-processing.svg",
        impact: &[
            ("Transforme sua fazenda em ", false),
            ("dados", true),
            (" e seus ", false),
            ("dados", true),
            (" em ", false),
            ("mais produtividade.", true),
        ],
        media: Media::Steps(&["assets/orto_image.svg", "assets/ndvi_image.svg", "assets/dem_image.svg"]),
        metrics: [
            metric(100, "%", "Qualidade de Imagem"),
            metric(99, "%", "Acurácia"),
            metric(12, "h", "Agilidade na Entrega"),
        ],
        how_it_works: [
            ("Upload em Nuvem", "Envie imagens de qualquer fonte"),
            ("IA Processamento", "Algoritmos otimizados"),
            ("Insights Precisos", "Mapas de calor e relatórios"),
        ],
        differential: "Nossos processamentos são realizados em servidores de altíssima capacidade computacional, garantindo máxima qualidade e precisão nos dados.",
        results: [
            "Ortomosaicos georeferenciados de alta precisão",
            "Índices vegetativos (NDVI, NDRE, etc.)",
            "Modelos 3D do terreno para planejamento",
        ],
    },
    Solution {
        title: "Linhas de Colheita",
        description: "Inteligência Artificial para identificar linhas precisas de colheita, otimizando rendimento e reduzindo erros operacionais.",
        features: ["Automação completa", "Precisão centimétrica", "Otimização de rotas"],
        cover: "assets/harvest-lines.svg",
        impact: &[
            ("Reduza em ", false),
            ("40%", true),
            (" o tempo de colheita com ", false),
            ("rotas identificadas", true),
            (" por Inteligência Artificial", false),
        ],
        media: Media::Steps(&["assets/lines_image_2.svg", "assets/lines_image_1.svg"]),
        metrics: [
            metric(40, "%", "Tempo reduzido"),
            metric(98, "%", "Precisão de rota"),
            metric(35, "%", "Economia combustível"),
        ],
        how_it_works: [
            ("Análise do Campo", "Mapeamento completo da área"),
            ("Inteligência Artificial", "Identificação automática das rotas"),
            ("Execução Perfeita", "Integração com GPS do maquinário"),
        ],
        differential: "Além de contar com uma IA treinada em milhares de hectares em diferentes cenários, a nossa solução passa por um controle de qualidade, garantindo ainda mais precisão e excelência nos resultados.",
        results: [
            "Aumento da Eficiência e Produtividade",
            "Redução de Perdas",
            "Otimização do Uso de Insumos",
        ],
    },
    Solution {
        title: "Falhas de Plantio",
        description: "Identificação altamente precisa de Falhas de Plantio através do uso de Inteligência Artificial",
        features: ["Inteligência Artificial", "Detecção Automática", "Diferentes Cenários de Solo"],
        cover: "assets/planting-failures.svg",
        impact: &[
            ("Identifique ", false),
            ("Falhas de Plantio", true),
            (" e transforme perdas em ", false),
            ("produtividade", true),
        ],
        media: Media::Steps(&["assets/gaps_image_1.svg", "assets/gaps_image_2.svg"]),
        metrics: [
            metric(95, "%", "Taxa detecção"),
            metric(5, "%", "Aumento de produtividade"),
            metric(4, "h", "Análise rápida"),
        ],
        how_it_works: [
            ("Varredura Total", "100% da área analisada"),
            ("Inteligência Artificial", "Detecção automática de falhas"),
            ("Plano de Ação", "Relatório com recomendações"),
        ],
        differential: "Treinada em milhares de hectares e diversos cenários, nossa IA entrega máxima precisão e qualidade em diferentes tipos de solos e estágios da cultura.",
        results: [
            "Aumento de Produtividade",
            "Otimização de Custos",
            "Tomada de Decisão Baseada em Dados",
        ],
    },
    Solution {
        title: "Linhas de Paralelismo",
        description: "Diagnóstico preciso de desvios no alinhamento das linhas de plantio para otimizar a colheita mecanizada.",
        features: ["Diagnóstico Rápido", "Qualidade do Plantio", "Máxima Eficiência"],
        cover: "assets/parallelism-lines.svg",
        impact: &[
            ("Aumente em ", false),
            ("25% a eficiência operacional", true),
            (" com a ", false),
            ("identificação e correção", true),
            (" do paralelismo da sua plantação", false),
        ],
        media: Media::Steps(&[
            "assets/para_image_1.svg",
            "assets/para_image_2.svg",
            "assets/para_image_3.svg",
            "assets/para_image_4.svg",
        ]),
        metrics: [
            metric(98, "%", "Precisão de identificação"),
            metric(25, "%", "Eficiência aumentada"),
            metric(15, "%", "Redução de perdas"),
        ],
        how_it_works: [
            ("Análise Automática", "Análise das linhas de colheita"),
            ("Identificação Precisa", "Identificação do paralelismo das linhas"),
            ("Relatório Analítico", "Relatório com classificações do paralelismo"),
        ],
        differential: "Nossa solução identifica erros de paralelismo com precisão centimétrica, classificando-os desde o ponto mais crítico até o ideal.",
        results: [
            "Redução de Perdas",
            "Aumento da Eficiência Operacional",
            "Aumento de Produtividade",
        ],
    },
];

const BENEFIT_WORDS: [&str; 4] = ["seu campo", "sua equipe", "seu tempo", "seus recursos"];

/// At most one card is expanded; toggling the open one collapses it.
fn toggle_expansion(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) { None } else { Some(index) }
}

fn step_alt(title: &str, index: usize) -> String {
    format!("{title} - Passo {}", index + 1)
}

#[component]
pub fn Solutions() -> impl IntoView {
    let carousel = use_carousel(SOLUTIONS.len(), AUTOPLAY_PERIOD);
    let word = use_cycle(BENEFIT_WORDS.len(), BENEFIT_PERIOD);
    let expanded = RwSignal::new(None::<usize>);

    let toggle = move |index: usize| {
        // reading the details counts as interacting with the carousel
        carousel.stop();
        expanded.update(|e| *e = toggle_expansion(*e, index));
    };

    view! {
        <section id="solucoes" class="solutions">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Nossas Soluções"</p>
                    <h2 class="section-title">
                        "Tecnologia que valoriza "
                        <span class="rotating-word">{move || BENEFIT_WORDS[word.get()]}</span>
                    </h2>
                </div>

                <div class="carousel">
                    <button class="carousel-nav prev" aria-label="Anterior" on:click=move |_| carousel.prev()>
                        "‹"
                    </button>
                    <div class="carousel-tabs">
                        {SOLUTIONS
                            .iter()
                            .enumerate()
                            .map(|(i, solution)| {
                                view! {
                                    <button
                                        class=move || if carousel.index() == i { "carousel-tab active" } else { "carousel-tab" }
                                        on:click=move |_| carousel.select(i)
                                    >
                                        {solution.title}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="carousel-nav next" aria-label="Próximo" on:click=move |_| carousel.next()>
                        "›"
                    </button>
                </div>

                {move || {
                    let index = carousel.index();
                    let solution = &SOLUTIONS[index];
                    let is_expanded = Signal::derive(move || expanded.get() == Some(index));
                    view! {
                        <SolutionCard
                            solution=solution
                            expanded=is_expanded
                            on_toggle=Callback::new(move |_| toggle(index))
                        />
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(
    solution: &'static Solution,
    expanded: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <article class="solution-card">
            <div class="solution-cover">
                <img src=solution.cover alt=solution.title />
                <div class="solution-cover-text">
                    <h3 class="solution-title">{solution.title}</h3>
                    <p class="solution-description">{solution.description}</p>
                </div>
            </div>
            <ul class="solution-features">
                {solution.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <button class="btn btn-secondary solution-toggle" on:click=move |_| on_toggle.run(())>
                {move || if expanded.get() { "Ver Menos" } else { "Ver Detalhes" }}
            </button>
            <Show when=move || expanded.get()>
                <SolutionDetails solution=solution />
            </Show>
        </article>
    }
}

#[component]
fn SolutionDetails(solution: &'static Solution) -> impl IntoView {
    let media = match solution.media {
        Media::Video(src) => view! { <SolutionVideo src=src poster=solution.cover title=solution.title /> }.into_any(),
        Media::Steps(images) => view! { <StepImages images=images title=solution.title /> }.into_any(),
    };

    view! {
        <div class="solution-details">
            <p class="solution-impact">
                {solution
                    .impact
                    .iter()
                    .map(|(text, highlight)| {
                        view! { <span class=if *highlight { "impact-highlight" } else { "" }>{*text}</span> }
                    })
                    .collect_view()}
            </p>
            {media}
            <div class="solution-metrics">
                {solution.metrics.iter().map(|m| view! { <MetricCounter metric=m /> }).collect_view()}
            </div>
            <ol class="solution-steps">
                {solution
                    .how_it_works
                    .iter()
                    .map(|(title, description)| {
                        view! {
                            <li class="solution-step">
                                <strong>{*title}</strong>
                                <span>{*description}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <p class="solution-differential">{solution.differential}</p>
            <ul class="solution-results">
                {solution.results.iter().map(|r| view! { <li>"✓ " {*r}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SolutionVideo(src: &'static str, poster: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="solution-media">
            <video src=src poster=poster title=title autoplay=true loop=true muted=true playsinline=true>
                "Seu navegador não suporta a tag de vídeo."
            </video>
        </div>
    }
}

/// Cycles through the processing steps of a solution.
#[component]
fn StepImages(images: &'static [&'static str], title: &'static str) -> impl IntoView {
    let current = use_cycle(images.len(), STEP_IMAGE_PERIOD);
    view! {
        <div class="solution-media">
            {move || {
                let index = current.get();
                images.get(index).map(|src| view! { <img src=*src alt=step_alt(title, index) /> })
            }}
        </div>
    }
}

#[component]
fn MetricCounter(metric: &'static Metric) -> impl IntoView {
    let count = use_counter(metric.value, Duration::from_secs(2));
    view! {
        <div class="metric">
            <span class="metric-value">{move || format!("{}{}", count.get(), metric.suffix)}</span>
            <span class="metric-label">{metric.label}</span>
        </div>
    }
}
