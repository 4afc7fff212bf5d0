use lead_capture::SiteConfig;
use leptos::prelude::*;

const SERVICES: [&str; 5] = [
    "Mapeamento por Drone",
    "Processamento de Imagens",
    "Linhas de Colheita",
    "Falhas de Plantio",
    "Linhas de Paralelismo",
];

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <img src="assets/tp-logo.svg" alt="Terra Precision" class="footer-logo" />
                        <p class="footer-tagline">
                            "Tecnologia em Agricultura de Precisão para o produtor rural."
                        </p>
                    </div>
                    <div class="footer-column">
                        <h4 class="footer-heading">"Serviços"</h4>
                        <ul class="footer-list">
                            {SERVICES
                                .iter()
                                .map(|s| view! { <li><a href="#solucoes" class="footer-link">{*s}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4 class="footer-heading">"Contato"</h4>
                        <ul class="footer-list">
                            <li>
                                <a href=config.mailto() class="footer-link">{config.contact_email.clone()}</a>
                            </li>
                            <li>
                                <a href=config.whatsapp_url.clone() target="_blank" rel="noopener" class="footer-link">
                                    "WhatsApp"
                                </a>
                            </li>
                            <li>"São Paulo, Brasil"</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {year} Terra Precision. Todos os direitos reservados.")}
                    </p>
                    <div class="footer-legal">
                        <a href="#privacidade" class="footer-link">"Política de Privacidade"</a>
                        <a href="#termos" class="footer-link">"Termos de Uso"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
