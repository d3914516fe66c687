//! Application state and the operations the commands run against it.

use anyhow::Context;
use chrono::Utc;
use filter_engine::{QueryEngine, Stats};
use record_store::{NewRecord, RecordStore};
use report_engine::{generate_report, ReportMode};
use sig_types::{format_pt_date, FilterCriteria, Record};
use std::path::Path;

use crate::table;

/// Top-level application state: the record list and the active filter
/// criteria, owned here and passed into the engines explicitly.
pub struct AppState {
    pub store: RecordStore,
    pub criteria: FilterCriteria,
    engine: QueryEngine,
}

impl AppState {
    pub fn new(store: RecordStore, criteria: FilterCriteria) -> Self {
        Self {
            store,
            criteria,
            engine: QueryEngine::new(),
        }
    }

    pub fn filtered(&self) -> Vec<&Record> {
        self.engine.apply(self.store.all(), &self.criteria)
    }

    /// The filtered listing, as shown on screen.
    pub fn list(&self) {
        let records = self.filtered();
        table::print_listing(&records);
        println!("\n{} registos encontrados", records.len());
    }

    /// The detail view for one record.
    pub fn show(&self, id: &str) -> anyhow::Result<()> {
        let record = self
            .store
            .get(id)
            .with_context(|| format!("Registo não encontrado: {id}"))?;

        println!("{}\n", record.title);
        println!(
            "{} | {} | {} | {}\n",
            record.area, record.concelho, record.freguesia, record.secretaria
        );
        println!("Descrição\n{}\n", record.description);

        println!("Informações do Projeto");
        println!("  Assessor: {}", record.assessor);
        println!("  Estado: {}", record.status.label());
        if let Some(value) = &record.value {
            println!("  Valor: {value}");
        }
        if let Some(date) = &record.conclusion_date {
            println!("  Data de Conclusão: {}", format_pt_date(date));
        }
        println!("  Criado em: {}", format_pt_date(&record.created_at));
        println!("  Atualizado em: {}", format_pt_date(&record.updated_at));

        if !record.attachments.is_empty() {
            println!("\nAnexos");
            for attachment in &record.attachments {
                println!("  {} ({})", attachment.name, attachment.url);
            }
        }

        println!("\nO que se disse");
        if record.news.is_empty() {
            println!("  Ainda não foram adicionadas notícias para este registo.");
        }
        for news in &record.news {
            println!("  {} ({})", news.title, format_pt_date(&news.date));
            println!("    {}", news.content);
            if let Some(link) = &news.link {
                println!("    {link}");
            }
        }
        Ok(())
    }

    /// Validate a creation-form draft and print the stored record. State is
    /// transient, so the JSON output is what the session keeps.
    pub fn add(&mut self, draft_path: &Path) -> anyhow::Result<()> {
        let json = std::fs::read_to_string(draft_path)
            .with_context(|| format!("não foi possível ler {}", draft_path.display()))?;
        let draft: NewRecord =
            serde_json::from_str(&json).context("o rascunho não é um registo válido")?;

        let record = self.store.add(draft, Utc::now())?;
        println!("{}", serde_json::to_string_pretty(record)?);
        Ok(())
    }

    pub fn stats(&self) {
        let stats = Stats::compute(self.store.all());
        println!("Total de Registos: {}", stats.total_records);
        println!("Assessores Ativos: {}", stats.assessors);
        println!("Concelhos Cobertos: {}/11", stats.concelhos_covered);
    }

    /// Render the currently filtered set and write the artifact.
    pub fn export(&self, mode: ReportMode, out_dir: &Path) -> anyhow::Result<()> {
        let records = self.filtered();
        let report = generate_report(&records, &self.criteria, mode, Utc::now().date_naive())?;

        let path = out_dir.join(&report.filename);
        std::fs::write(&path, &report.bytes)
            .with_context(|| format!("não foi possível gravar {}", path.display()))?;

        println!(
            "O relatório foi gerado com {} registos: {}",
            records.len(),
            path.display()
        );
        Ok(())
    }
}
