//! Showcase testimonials shown before any visitor has written one.

use chrono::{DateTime, Utc};

use crate::features::testimonials::models::Testimonial;

/// Prefix of showcase ids; records carrying it are never deletable
pub const SEED_ID_PREFIX: &str = "seed-";

// 2025-08-01T00:00:00Z
const SEED_PUBLISHED_AT_SECS: i64 = 1_754_006_400;

const SEED: [(&str, &str, &str, &str, &str); 5] = [
    (
        "maria-silva",
        "Maria Silva",
        "Executiva",
        "Day Spa Completo",
        "Uma experiência transformadora! O atendimento é impecável e os tratamentos são de altíssima qualidade. Saí renovada e com uma sensação de bem-estar indescritível.",
    ),
    (
        "ana-costa",
        "Ana Costa",
        "Empresária",
        "Massagem com Pedras Quentes",
        "O La Vie Esbella é meu refúgio pessoal. Cada visita é uma jornada de relaxamento profundo. A equipe é extremamente profissional e o ambiente é simplesmente perfeito.",
    ),
    (
        "carla-mendes",
        "Carla Mendes",
        "Médica",
        "Tratamento Facial Premium",
        "Recomendo de olhos fechados! Os tratamentos faciais são excepcionais e os resultados são visíveis desde a primeira sessão. Um verdadeiro oásis de tranquilidade.",
    ),
    (
        "juliana-santos",
        "Juliana Santos",
        "Advogada",
        "Aromaterapia",
        "Depois de um dia estressante, não há nada melhor que uma sessão no La Vie Esbella. O ambiente é acolhedor e os profissionais são verdadeiros especialistas em bem-estar.",
    ),
    (
        "patricia-lima",
        "Patricia Lima",
        "Arquiteta",
        "Reflexologia",
        "Cada detalhe é pensado para proporcionar a melhor experiência. Desde a recepção até o final do tratamento, tudo é perfeito. Já me tornei cliente fiel!",
    ),
];

pub fn featured_testimonials() -> Vec<Testimonial> {
    let published_at = DateTime::<Utc>::from_timestamp(SEED_PUBLISHED_AT_SECS, 0).unwrap_or_default();

    SEED.iter()
        .map(|(slug, name, role, treatment, message)| Testimonial {
            id: format!("{}{}", SEED_ID_PREFIX, slug),
            name: name.to_string(),
            message: message.to_string(),
            rating: 5,
            treatment: treatment.to_string(),
            role: role.to_string(),
            submitted_at: published_at,
            approved: true,
            deletable: false,
        })
        .collect()
}

pub fn is_seed_id(id: &str) -> bool {
    id.starts_with(SEED_ID_PREFIX)
}
