use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::record::StudentRecord;
use crate::schema::header_line;

/// Persistence adapter for the roster file: the whole collection is read on
/// `load` and rewritten on `save`, always under the fixed six-column header.
/// The file is the source of truth; nothing is cached between calls.
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record. A missing file is created with the header and
    /// yields an empty collection. Blank lines are skipped. Records come
    /// back ordered by ID (plain string order) as a load-time convenience;
    /// later mutations do not maintain any order.
    pub fn load(&self) -> io::Result<Vec<StudentRecord>> {
        if !self.path.exists() {
            debug!("roster file {} missing, creating it", self.path.display());
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Ok(Vec::new()),
        };
        if header.trim() != header_line() {
            warn!(
                "unexpected header in {}: {:?}",
                self.path.display(),
                header
            );
        }

        let mut records = Vec::new();
        for line in lines {
            let line = line?;
            if let Some(record) = StudentRecord::from_csv_line(&line) {
                records.push(record);
            }
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));

        debug!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Overwrites the file with exactly these records, header first. The
    /// on-disk row order is whatever order the slice carries.
    pub fn save(&self, records: &[StudentRecord]) -> io::Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", header_line())?;
        for record in records {
            writeln!(writer, "{}", record.to_csv_line())?;
        }
        writer.flush()?;

        debug!("saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
