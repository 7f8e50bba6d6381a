//! Record store contract and in-memory implementation.

use crate::model::record::{Record, RecordId, RecordValidationError};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(RecordValidationError),
    DuplicateId(RecordId),
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<RecordValidationError> for StoreError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered record collection used by the board service.
pub trait RecordStore {
    /// Appends a record; fails on duplicate id or invalid record.
    fn insert(&mut self, record: Record) -> StoreResult<RecordId>;
    /// Replaces the record with the same id in place.
    fn update(&mut self, record: Record) -> StoreResult<()>;
    fn get(&self, id: &str) -> Option<&Record>;
    /// All records in insertion order.
    fn list(&self) -> &[Record];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<Record>,
    positions: HashMap<RecordId, usize>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an ordered source, stopping at the first bad record.
    pub fn from_records<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&mut self, record: Record) -> StoreResult<RecordId> {
        record.validate()?;
        if self.positions.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }

        let id = record.id.clone();
        self.positions.insert(id.clone(), self.records.len());
        self.records.push(record);
        Ok(id)
    }

    fn update(&mut self, record: Record) -> StoreResult<()> {
        record.validate()?;
        let Some(&position) = self.positions.get(&record.id) else {
            return Err(StoreError::NotFound(record.id));
        };
        self.records[position] = record;
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&Record> {
        self.positions
            .get(id)
            .and_then(|&position| self.records.get(position))
    }

    fn list(&self) -> &[Record] {
        &self.records
    }
}
