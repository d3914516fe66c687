//! SIG command-line front-end
//!
//! Browses the regional public-works records: filtered listing, detail
//! view, record creation (validation only — state is transient), dashboard
//! figures and PDF export of the currently filtered set.

mod app;
mod table;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use record_store::RecordStore;
use report_engine::ReportMode;
use sig_types::{criteria, FilterCriteria, Record};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::AppState;

#[derive(Parser, Debug)]
#[command(name = "sig-cli")]
#[command(
    version,
    about = "Sistema de Informação Governamental — registos de obras públicas regionais"
)]
struct Cli {
    /// Registos criados pelo utilizador (JSON), carregados após os dados de
    /// exemplo
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lista os registos que passam os filtros ativos
    List(FilterArgs),
    /// Mostra o detalhe de um registo
    Show { id: String },
    /// Valida um rascunho de registo e imprime o registo criado
    Add {
        /// Ficheiro JSON com o rascunho (título, descrição, área, concelho,
        /// freguesia, secretaria, assessor)
        draft: PathBuf,
    },
    /// Números agregados sobre o conjunto de registos
    Stats,
    /// Gera o relatório PDF do conjunto filtrado
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long, value_enum, default_value_t = Mode::Summary)]
        mode: Mode,

        /// Diretório de destino do artefacto
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Ano de conclusão (ou de criação, na sua ausência)
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    concelho: Option<String>,
    #[arg(long)]
    freguesia: Option<String>,
    #[arg(long)]
    area: Option<String>,
    /// Corresponde por substring do nome da secretaria
    #[arg(long)]
    secretaria: Option<String>,
    /// Pesquisa em título e descrição
    #[arg(long)]
    search: Option<String>,
}

impl FilterArgs {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            year: self.year.unwrap_or_else(|| criteria::ALL_YEARS.to_string()),
            concelho: self
                .concelho
                .unwrap_or_else(|| criteria::ALL_CONCELHOS.to_string()),
            freguesia: self
                .freguesia
                .unwrap_or_else(|| criteria::ALL_FREGUESIAS.to_string()),
            area: self.area.unwrap_or_else(|| criteria::ALL_AREAS.to_string()),
            secretaria: self
                .secretaria
                .unwrap_or_else(|| criteria::ALL_SECRETARIAS.to_string()),
            search: self.search.unwrap_or_default(),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Mode {
    Summary,
    Detailed,
}

impl From<Mode> for ReportMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Summary => ReportMode::Summary,
            Mode::Detailed => ReportMode::Detailed,
        }
    }
}

fn load_store(records: Option<&PathBuf>) -> anyhow::Result<RecordStore> {
    match records {
        None => Ok(RecordStore::new()),
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("não foi possível ler {}", path.display()))?;
            let user: Vec<Record> =
                serde_json::from_str(&json).context("ficheiro de registos inválido")?;
            tracing::info!(registos = user.len(), "registos do utilizador carregados");
            Ok(RecordStore::with_user_records(user))
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let store = load_store(cli.records.as_ref())?;

    match cli.command {
        Command::List(filters) => {
            let state = AppState::new(store, filters.into_criteria());
            state.list();
        }
        Command::Show { id } => {
            let state = AppState::new(store, FilterCriteria::default());
            state.show(&id)?;
        }
        Command::Add { draft } => {
            let mut state = AppState::new(store, FilterCriteria::default());
            state.add(&draft)?;
        }
        Command::Stats => {
            let state = AppState::new(store, FilterCriteria::default());
            state.stats();
        }
        Command::Export { filters, mode, out } => {
            let state = AppState::new(store, filters.into_criteria());
            state.export(mode.into(), &out)?;
        }
    }

    Ok(())
}
