//! Shared types for the SIG (Sistema de Informação Governamental) workspace
//!
//! This crate holds the record data model, the filter criteria consumed by
//! the filter engine and the report renderer, the canonical taxonomy of
//! concelhos, áreas and secretarias, and the pt-PT date helpers used across
//! the workspace.

pub mod criteria;
pub mod dates;
pub mod taxonomy;
pub mod types;

pub use criteria::FilterCriteria;
pub use dates::{format_pt_date, record_year};
pub use types::{Attachment, AttachmentKind, News, Record, Status};
