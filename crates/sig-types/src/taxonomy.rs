//! Canonical value sets for the categorical record fields.
//!
//! These are fixed enumerations, not server-sourced. The área and
//! secretaria lists are the unified ones accepted by the creation form;
//! freguesia stays a free string in the data model, with fixed sub-lists
//! offered only for the concelhos that have them.

/// The 11 concelhos of the região autónoma.
pub const CONCELHOS: [&str; 11] = [
    "Funchal",
    "Câmara de Lobos",
    "Ribeira Brava",
    "Ponta do Sol",
    "Calheta",
    "Porto Moniz",
    "São Vicente",
    "Santana",
    "Machico",
    "Santa Cruz",
    "Porto Santo",
];

pub const AREAS: [&str; 8] = [
    "Agricultura e Pescas",
    "Infraestruturas",
    "Saúde e Proteção Civil",
    "Economia",
    "Finanças",
    "Turismo",
    "Cultura",
    "Ambiente",
];

pub const SECRETARIAS: [&str; 8] = [
    "Secretaria Regional da Agricultura e Pescas",
    "Secretaria Regional das Infraestruturas",
    "Secretaria Regional da Saúde e Proteção Civil",
    "Secretaria Regional da Economia",
    "Secretaria Regional das Finanças",
    "Secretaria Regional do Turismo",
    "Secretaria Regional da Cultura",
    "Secretaria Regional do Ambiente",
];

/// Fixed freguesia sub-list offered by the cascading dropdown for a given
/// concelho. Concelhos without a curated sub-list return an empty slice;
/// entry remains free text either way.
pub fn freguesias_for(concelho: &str) -> &'static [&'static str] {
    match concelho {
        "Machico" => &["Machico", "Porto da Cruz", "Caniçal", "Santo António da Serra"],
        "Santana" => &["Santana", "Faial", "São Jorge", "Arco de São Jorge", "Ilha"],
        "Funchal" => &[
            "São Pedro",
            "Santa Maria Maior",
            "São Martinho",
            "Santo António",
            "São Gonçalo",
            "Imaculado Coração de Maria",
            "Monte",
            "São Roque",
        ],
        "Santa Cruz" => &["Santa Cruz", "Gaula", "Camacha", "Caniço"],
        "Câmara de Lobos" => &[
            "Câmara de Lobos",
            "Estreito de Câmara de Lobos",
            "Quinta Grande",
            "Curral das Freiras",
        ],
        _ => &[],
    }
}
