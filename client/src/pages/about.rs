//! Static mission and values page.

use leptos::prelude::*;

const VALUES: [(&str, &str); 4] = [
    (
        "Empoderamiento Comunitario",
        "Fortalecemos capacidades locales para que las comunidades sean protagonistas del turismo.",
    ),
    ("Sostenibilidad", "Promovemos prácticas responsables con el entorno y la cultura local."),
    (
        "Intercambio Cultural",
        "Fomentamos encuentros respetuosos y enriquecedores entre visitantes y anfitriones.",
    ),
    ("Transparencia", "Mantenemos relaciones claras, justas y éticas con nuestras comunidades aliadas."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-hero">
                <h1>"Sobre Nosotros"</h1>
                <p>
                    "Impulsamos el turismo comunitario sostenible para conectar culturas, proteger "
                    "territorios y transformar vidas."
                </p>
            </section>
            <section class="about-story">
                <h2>"Nuestra Historia"</h2>
                <p>
                    "Raíces Vivas nace del deseo de crear un puente entre viajeros responsables y "
                    "comunidades guardianas del patrimonio cultural y natural de Colombia."
                </p>
                <p>
                    "Desde nuestras primeras alianzas en zonas rurales del sur del país, hemos trabajado "
                    "mano a mano con líderes locales para diseñar experiencias que empoderen, inspiren y "
                    "transformen."
                </p>
            </section>
            <section class="about-values">
                <h2>"Nuestros Valores"</h2>
                <p>"Todo lo que hacemos está guiado por el respeto, la sostenibilidad y el trabajo colectivo."</p>
                <div class="about-values__grid">
                    {VALUES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="value-card">
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="about-cta">
                <h2>"¿Quieres ser parte de este movimiento?"</h2>
                <p>"Únete a Raíces Vivas como proveedor local o apóyanos compartiendo nuestro mensaje."</p>
                <a href="/register?type=provider" class="btn btn--primary">"Registrarse como Proveedor"</a>
            </section>
        </div>
    }
}
