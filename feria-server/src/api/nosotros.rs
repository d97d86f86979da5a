//! Organisation page ("Sobre ABA Animal")
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/nosotros | GET | Mission and contact channels |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

const LEMA: &str = "Bienestar animal en la provincia de Cartago";

const MISION: [&str; 2] = [
    "Somos una organización sin fines de lucro dedicada a mejorar la calidad de vida de los \
     animales en Cartago. A través de campañas de castración, vacunación y educación, buscamos \
     controlar la sobrepoblación y fomentar la tenencia responsable.",
    "No contamos con un albergue físico, por lo que dependemos de nuestra red de hogares \
     temporales y del apoyo incondicional de nuestros voluntarios.",
];

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/nosotros", get(nosotros))
}

#[derive(Debug, Serialize)]
pub struct Contacto {
    pub telefono: String,
    pub whatsapp: String,
    pub email: String,
    pub sitio_web: &'static str,
    pub facebook: &'static str,
    pub ubicacion: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Nosotros {
    pub titulo: String,
    pub lema: &'static str,
    pub mision: Vec<&'static str>,
    pub contacto: Contacto,
}

pub async fn nosotros(State(state): State<ServerState>) -> Json<Nosotros> {
    let config = &state.config;
    let digits: String = config
        .org_phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    Json(Nosotros {
        titulo: format!("Sobre {}", config.org_name),
        lema: LEMA,
        mision: MISION.to_vec(),
        contacto: Contacto {
            telefono: config.org_phone.clone(),
            whatsapp: format!("https://wa.me/{digits}"),
            email: config.org_email.clone(),
            sitio_web: "https://www.abaanimal.org/",
            facebook: "https://www.facebook.com/AsociacionABAA/",
            ubicacion: "Cartago, Costa Rica",
        },
    })
}
