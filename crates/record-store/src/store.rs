use chrono::{DateTime, Utc};
use sig_types::{News, Record, Status};
use validator::Validate;

use crate::error::StoreError;
use crate::seed;
use crate::validate::NewRecord;

/// The combined record set: built-in demo records plus the records created
/// during the session, demo records first.
#[derive(Debug)]
pub struct RecordStore {
    seed: Vec<Record>,
    user: Vec<Record>,
}

impl RecordStore {
    /// A store holding only the built-in Machico demo set.
    pub fn new() -> Self {
        Self {
            seed: seed::machico_records(),
            user: Vec::new(),
        }
    }

    /// Preload user-created records (e.g. from a session export). They keep
    /// their ids and sort after the demo set, in the given order.
    pub fn with_user_records(records: Vec<Record>) -> Self {
        let mut store = Self::new();
        store.user = records;
        store
    }

    /// All records in query order: demo set first, then user records in
    /// creation order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.seed.iter().chain(self.user.iter())
    }

    pub fn len(&self) -> usize {
        self.seed.len() + self.user.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seed.is_empty() && self.user.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.all().find(|r| r.id == id)
    }

    /// Validate a creation-form draft and append it to the store.
    ///
    /// The store assigns the id (millisecond timestamp of the creation
    /// instant), the creation/update dates and the default `ativo` status.
    /// On validation failure nothing is stored.
    pub fn add(&mut self, draft: NewRecord, now: DateTime<Utc>) -> Result<&Record, StoreError> {
        let draft = draft.normalized();
        draft.validate()?;

        let today = now.format("%Y-%m-%d").to_string();
        let record = Record {
            id: now.timestamp_millis().to_string(),
            title: draft.title,
            description: draft.description,
            area: draft.area,
            concelho: draft.concelho,
            freguesia: draft.freguesia,
            assessor: draft.assessor,
            secretaria: draft.secretaria,
            created_at: today.clone(),
            updated_at: today,
            status: Status::Ativo,
            value: None,
            conclusion_date: None,
            attachments: vec![],
            news: vec![],
        };

        tracing::info!(id = %record.id, title = %record.title, "registo criado");
        self.user.push(record);
        Ok(self.user.last().unwrap())
    }

    /// The edit flow: replace a record's news list wholesale and bump its
    /// update date. News is the only field the edit form round-trips.
    pub fn set_news(
        &mut self,
        id: &str,
        news: Vec<News>,
        now: DateTime<Utc>,
    ) -> Result<&Record, StoreError> {
        let record = self
            .seed
            .iter_mut()
            .chain(self.user.iter_mut())
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::UnknownRecord(id.to_string()))?;

        tracing::debug!(id = %record.id, entries = news.len(), "notícias atualizadas");
        record.news = news;
        record.updated_at = now.format("%Y-%m-%d").to_string();
        Ok(record)
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
