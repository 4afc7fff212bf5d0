use lead_capture::SiteConfig;
use leptos::prelude::*;

use super::platform::go_to_platform;
use crate::dialog::use_lead_dialog;

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let dialog = use_lead_dialog();
    let platform_url = config.platform_url.clone();

    view! {
        <section id="contato" class="contact">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Contato"</p>
                    <h2 class="section-title">"Pronto para transformar sua lavoura?"</h2>
                    <p class="section-description">
                        "Fale com nossa equipe e descubra a solução ideal para a sua propriedade."
                    </p>
                </div>

                <div class="contact-cards">
                    <a href=config.whatsapp_url.clone() target="_blank" rel="noopener" class="contact-card">
                        <h3 class="contact-card-title">"WhatsApp"</h3>
                        <p class="contact-card-text">"Atendimento rápido pelo celular"</p>
                    </a>
                    <a href=config.mailto() class="contact-card">
                        <h3 class="contact-card-title">"E-mail"</h3>
                        <p class="contact-card-text">{config.contact_email.clone()}</p>
                    </a>
                    <button class="contact-card" on:click=move |_| go_to_platform(&platform_url)>
                        <h3 class="contact-card-title">"Plataforma"</h3>
                        <p class="contact-card-text">"Acompanhe seus serviços online"</p>
                    </button>
                </div>

                <div class="contact-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| dialog.open("Teste Grátis - Contato Section")
                    >
                        "Agendar Demonstração"
                    </button>
                    <a href=config.whatsapp_url.clone() target="_blank" rel="noopener" class="btn btn-secondary">
                        "Falar no WhatsApp"
                    </a>
                </div>
            </div>
        </section>
    }
}
