use tracing::{debug, info};

use crate::constants::AFFIRMATIVE_ANSWER;
use crate::error::{StoreError, StoreResult};
use crate::ordering::{binary_search, merge_sort};
use crate::record::StudentRecord;
use crate::schema::FieldName;
use crate::storage::CsvStorage;

/// The caller's answer to a destructive confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// Maps a raw prompt answer. Only an affirmative "y" (any case)
    /// confirms; everything else declines.
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case(AFFIRMATIVE_ANSWER) {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// Snapshot handed back by [`RecordStore::request_delete`] so the caller can
/// show who is about to be removed before committing.
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub record: StudentRecord,
}

/// One load-mutate-rewrite transaction. Opening a session reads the whole
/// collection; `commit` rewrites it; dropping without commit is a no-op.
/// Sessions never outlive a single store operation.
struct Session<'a> {
    storage: &'a CsvStorage,
    records: Vec<StudentRecord>,
}

impl<'a> Session<'a> {
    fn open(storage: &'a CsvStorage) -> StoreResult<Self> {
        let records = storage.load()?;
        Ok(Self { storage, records })
    }

    fn commit(self) -> StoreResult<()> {
        self.storage.save(&self.records)?;
        Ok(())
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}

/// The record store. Owns no in-memory state between operations: every call
/// opens a fresh [`Session`] against the roster file and either commits a
/// full rewrite or leaves the file untouched.
pub struct RecordStore {
    storage: CsvStorage,
}

impl RecordStore {
    pub fn new(storage: CsvStorage) -> Self {
        Self { storage }
    }

    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Self {
        Self::new(CsvStorage::new(path))
    }

    /// Appends a new record. Only the ID is validated (must be unique);
    /// every other field is stored as given.
    pub fn create(&self, record: StudentRecord) -> StoreResult<()> {
        let mut session = Session::open(&self.storage)?;

        if session.position_of(&record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }

        info!("creating student {}", record.id);
        session.records.push(record);
        session.commit()
    }

    /// Returns the full record for `id`.
    pub fn read(&self, id: &str) -> StoreResult<StudentRecord> {
        let session = Session::open(&self.storage)?;

        session
            .position_of(id)
            .map(|i| session.records[i].clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Overwrites one field of one record. The field name is checked against
    /// the schema: unknown names and "ID" (immutable once created) are both
    /// rejected with [`StoreError::InvalidField`].
    pub fn update(&self, id: &str, field: &str, value: String) -> StoreResult<()> {
        let field = FieldName::parse(field)
            .filter(FieldName::is_mutable)
            .ok_or_else(|| StoreError::InvalidField(field.trim().to_string()))?;

        let mut session = Session::open(&self.storage)?;
        let index = session
            .position_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        info!("updating {field} of student {id}");
        session.records[index].set_field(field, value);
        session.commit()
    }

    /// First half of the delete gate: verifies the record exists and returns
    /// a snapshot for the confirmation prompt. Nothing is removed yet.
    pub fn request_delete(&self, id: &str) -> StoreResult<DeleteRequest> {
        let record = self.read(id)?;
        Ok(DeleteRequest { record })
    }

    /// Second half of the delete gate. A declined confirmation returns
    /// [`StoreError::Cancelled`] and leaves storage byte-for-byte unchanged;
    /// a confirmed one removes the record and persists.
    pub fn commit_delete(&self, id: &str, confirmation: Confirmation) -> StoreResult<()> {
        if confirmation == Confirmation::Declined {
            debug!("deletion of student {id} declined");
            return Err(StoreError::Cancelled);
        }

        let mut session = Session::open(&self.storage)?;
        let index = session
            .position_of(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        info!("deleting student {id}");
        session.records.remove(index);
        session.commit()
    }

    /// Durably reorders the collection by `key`, which must be one of
    /// ID, Last Name, or Class. The merge-sorted order becomes the at-rest
    /// row order, not a view.
    pub fn sort_and_persist(&self, key: &str) -> StoreResult<()> {
        let key = FieldName::parse(key)
            .filter(FieldName::is_sort_key)
            .ok_or_else(|| StoreError::InvalidAttribute(key.trim().to_string()))?;

        let mut session = Session::open(&self.storage)?;

        info!("sorting {} students by {key}", session.records.len());
        session.records = merge_sort(&session.records, key);
        session.commit()
    }

    /// Binary-searches for an exact match on `key`. The collection is first
    /// ordered with plain string comparison, the ordering the search probes
    /// with, so the search is self-consistent regardless of any order
    /// persisted by [`Self::sort_and_persist`]. The temporary order is not
    /// persisted.
    pub fn search(&self, key: FieldName, target: &str) -> StoreResult<StudentRecord> {
        let session = Session::open(&self.storage)?;

        let mut records = session.records;
        records.sort_by(|a, b| a.field(key).cmp(b.field(key)));

        binary_search(&records, target, key)
            .map(|i| records[i].clone())
            .ok_or_else(|| StoreError::NotFound(target.to_string()))
    }

    /// Current contents of the roster, in at-rest order.
    pub fn snapshot(&self) -> StoreResult<Vec<StudentRecord>> {
        Ok(Session::open(&self.storage)?.records)
    }
}
