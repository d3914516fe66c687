//! Built-in Machico demo records.
//!
//! Single consolidated fixture shared by the listing, the detail view and
//! the report path. Ids are fixed; everything else follows the published
//! public-works data for the concelho.

use sig_types::{Record, Status};

fn record(
    id: &str,
    title: &str,
    description: &str,
    area: &str,
    freguesia: &str,
    assessor: &str,
    secretaria: &str,
    created_at: &str,
    updated_at: &str,
    value: &str,
    conclusion_date: &str,
) -> Record {
    Record {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        area: area.into(),
        concelho: "Machico".into(),
        freguesia: freguesia.into(),
        assessor: assessor.into(),
        secretaria: secretaria.into(),
        created_at: created_at.into(),
        updated_at: updated_at.into(),
        status: Status::Ativo,
        value: Some(value.into()),
        conclusion_date: Some(conclusion_date.into()),
        attachments: vec![],
        news: vec![],
    }
}

/// The eight built-in Machico records.
pub fn machico_records() -> Vec<Record> {
    vec![
        record(
            "machico-1",
            "Requalificação da rede viária regional - zona leste – PAMUS",
            "Projeto de requalificação da rede viária na zona leste da região, \
             melhorando a conectividade e segurança rodoviária.",
            "Infraestruturas",
            "Machico",
            "Eng. Carlos Silva",
            "Secretaria Regional das Infraestruturas",
            "2022-01-15",
            "2022-09-20",
            "1.836.017,04 euros",
            "2022-09-01",
        ),
        record(
            "machico-2",
            "Estabilização da ER102 – Massapez",
            "Obras de estabilização e segurança da Estrada Regional 102 na zona do \
             Massapez, garantindo a segurança dos utentes.",
            "Infraestruturas",
            "Machico",
            "Eng. Maria Santos",
            "Secretaria Regional das Infraestruturas",
            "2017-03-10",
            "2017-12-30",
            "505.080 euros",
            "2017-12-01",
        ),
        record(
            "machico-3",
            "Reabilitação integral do Complexo Habitacional da Bemposta",
            "Recuperação completa de edifícios e espaços exteriores do complexo \
             habitacional, melhorando as condições de vida dos residentes.",
            "Infraestruturas",
            "Machico",
            "Arq. João Pereira",
            "Secretaria Regional das Infraestruturas",
            "2016-08-20",
            "2017-06-15",
            "222.367,02 euros",
            "2017-01-01",
        ),
        record(
            "machico-4",
            "Reabilitação do Cais de Machico",
            "Modernização e reabilitação das infraestruturas portuárias do cais de \
             Machico, melhorando as condições para atividades marítimas.",
            "Infraestruturas",
            "Machico",
            "Eng. Ana Costa",
            "Secretaria Regional das Infraestruturas",
            "2018-05-12",
            "2019-10-25",
            "1.928.307 euros",
            "2019-10-01",
        ),
        record(
            "machico-5",
            "Beneficiação escola Básica e secundária de Machico",
            "Obras de beneficiação e modernização da Escola Básica e Secundária de \
             Machico, melhorando as condições de ensino.",
            "Economia",
            "Machico",
            "Prof. Clara Mendes",
            "Secretaria Regional da Economia",
            "2006-09-15",
            "2007-04-09",
            "223.172,12 euros",
            "2007-04-09",
        ),
        record(
            "machico-6",
            "Reparação de danos no Centro de Saúde de Machico",
            "Reparação e manutenção das instalações do Centro de Saúde de Machico \
             para garantir o funcionamento adequado dos serviços de saúde.",
            "Saúde e Proteção Civil",
            "Machico",
            "Dr. Pedro Santos",
            "Secretaria Regional da Saúde e Proteção Civil",
            "2017-07-10",
            "2017-10-11",
            "50.000 euros",
            "2017-10-11",
        ),
        record(
            "machico-7",
            "Remodelação da lota do Caniçal – Fase 1 – Unidade de gelo",
            "Primeira fase da remodelação da lota do Caniçal com foco na unidade de \
             gelo, modernizando as instalações de apoio à pesca.",
            "Agricultura e Pescas",
            "Caniçal",
            "Eng. Rui Fernandes",
            "Secretaria Regional da Agricultura e Pescas",
            "2019-03-18",
            "2020-08-20",
            "1.300.000 euros",
            "2020-01-01",
        ),
        record(
            "machico-8",
            "Solar de São Cristóvão",
            "Recuperação e valorização do Solar de São Cristóvão, património \
             histórico importante da região de Machico.",
            "Cultura",
            "Machico",
            "Dr. Luís Almeida",
            "Secretaria Regional da Cultura",
            "2018-04-25",
            "2019-07-15",
            "100.000 euros",
            "2019-01-01",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_eight_records_with_unique_ids() {
        let records = machico_records();
        assert_eq!(records.len(), 8);
        let mut ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_seed_records_are_all_machico() {
        assert!(machico_records().iter().all(|r| r.concelho == "Machico"));
    }
}
