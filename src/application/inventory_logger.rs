use crate::domain::inventory::{Describe, InventoryItem};
use crate::domain::ports::{Entity, RecordCodec};
use crate::error::{Result, StoreError};
use crate::infrastructure::in_memory::EntityRepository;
use crate::interfaces::json::codec::JsonLineCodec;
use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// What a reload does with a line the codec cannot decode.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum DecodePolicy {
    /// Log the line and keep loading.
    #[default]
    Skip,
    /// Stop and report the first malformed line.
    Abort,
}

/// An entity repository that can be saved to and reloaded from a file,
/// one encoded entity per line.
pub struct InventoryLogger<T, C = JsonLineCodec> {
    repository: EntityRepository<T>,
    path: PathBuf,
    codec: C,
}

impl<T: Entity + Clone> InventoryLogger<T, JsonLineCodec>
where
    JsonLineCodec: RecordCodec<T>,
{
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_codec(path, JsonLineCodec)
    }
}

impl<T, C> InventoryLogger<T, C>
where
    T: Entity + Clone,
    C: RecordCodec<T>,
{
    pub fn with_codec<P: Into<PathBuf>>(path: P, codec: C) -> Self {
        Self {
            repository: EntityRepository::new(),
            path: path.into(),
            codec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add(&mut self, item: T) -> Result<()> {
        self.repository.add(item)
    }

    pub fn get_all(&self) -> Vec<T> {
        self.repository.get_all()
    }

    pub fn repository(&self) -> &EntityRepository<T> {
        &self.repository
    }

    /// Writes every entity to the log file in insertion order, replacing any
    /// previous contents.
    pub fn save_to_file(&self) -> Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for item in self.repository.iter() {
            writeln!(writer, "{}", self.codec.encode(item)?)?;
        }
        writer.flush()?;
        tracing::debug!(
            path = %self.path.display(),
            count = self.repository.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Replaces the in-memory entities with the contents of the log file and
    /// returns how many malformed lines were skipped.
    ///
    /// The file is loaded into a fresh repository first; if loading fails the
    /// current contents are kept. A missing file loads as empty.
    pub fn load_from_file(&mut self, policy: DecodePolicy) -> Result<usize> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut loaded = EntityRepository::new();
        let mut skipped = 0;
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match self.codec.decode(line) {
                Ok(item) => loaded.add(item)?,
                Err(source) => {
                    let err = StoreError::Decode {
                        line: idx + 1,
                        source,
                    };
                    if policy == DecodePolicy::Abort {
                        return Err(err);
                    }
                    tracing::warn!(path = %self.path.display(), "{}", err);
                    skipped += 1;
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            count = loaded.len(),
            skipped,
            "inventory loaded"
        );
        self.repository = loaded;
        Ok(skipped)
    }
}

/// Seeds an inventory log, persists it, and reads it back into a new logger.
pub struct InventoryApp {
    logger: InventoryLogger<InventoryItem>,
}

impl InventoryApp {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            logger: InventoryLogger::new(path),
        }
    }

    pub fn seed_sample_data(&mut self, date_added: NaiveDate) -> Result<()> {
        let items = [
            (1, "Office Chair", 12),
            (2, "Standing Desk", 5),
            (3, "Monitor", 20),
            (4, "Keyboard", 35),
            (5, "Printer Paper", 100),
        ];
        for (id, name, quantity) in items {
            self.logger
                .add(InventoryItem::new(id, name, quantity, date_added))?;
        }
        Ok(())
    }

    pub fn save_data(&self) -> Result<()> {
        self.logger.save_to_file()
    }

    /// Reloads from disk into a brand-new logger, discarding in-memory state.
    pub fn load_data(&mut self, policy: DecodePolicy) -> Result<usize> {
        self.logger = InventoryLogger::new(self.logger.path().to_path_buf());
        self.logger.load_from_file(policy)
    }

    pub fn item_lines(&self) -> Vec<String> {
        self.logger
            .repository()
            .iter()
            .map(Describe::describe)
            .collect()
    }

    pub fn run(&mut self, date_added: NaiveDate, policy: DecodePolicy) -> Result<Vec<String>> {
        self.seed_sample_data(date_added)?;
        self.save_data()?;
        let skipped = self.load_data(policy)?;

        let mut lines = vec![format!(
            "Loaded {} item(s) from {}",
            self.logger.repository().len(),
            self.logger.path().display()
        )];
        if skipped > 0 {
            lines.push(format!("Skipped {skipped} malformed line(s)"));
        }
        lines.extend(self.item_lines());
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.jsonl");

        let mut logger = InventoryLogger::new(&path);
        logger.add(InventoryItem::new(1, "Chair", 4, day())).unwrap();
        logger.add(InventoryItem::new(2, "Desk", 2, day())).unwrap();
        logger.save_to_file().unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert_eq!(saved.lines().count(), 2);

        let mut reloaded: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        assert_eq!(reloaded.load_from_file(DecodePolicy::Abort).unwrap(), 0);
        assert_eq!(reloaded.get_all(), logger.get_all());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let mut logger: InventoryLogger<InventoryItem> =
            InventoryLogger::new(dir.path().join("absent.jsonl"));
        assert_eq!(logger.load_from_file(DecodePolicy::Abort).unwrap(), 0);
        assert!(logger.get_all().is_empty());
    }

    fn write_mixed(path: &Path) {
        let codec = JsonLineCodec;
        let good = codec.encode(&InventoryItem::new(1, "Chair", 4, day())).unwrap();
        let other = codec.encode(&InventoryItem::new(3, "Lamp", 7, day())).unwrap();
        fs::write(path, format!("{good}\n\n{{not json}}\n{other}\n")).unwrap();
    }

    #[test]
    fn test_skip_policy_drops_malformed_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.jsonl");
        write_mixed(&path);

        let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        assert_eq!(logger.load_from_file(DecodePolicy::Skip).unwrap(), 1);

        let ids: Vec<u32> = logger.get_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_abort_policy_keeps_previous_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.jsonl");
        write_mixed(&path);

        let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        logger.add(InventoryItem::new(9, "Existing", 1, day())).unwrap();

        let result = logger.load_from_file(DecodePolicy::Abort);
        assert!(matches!(result, Err(StoreError::Decode { line: 3, .. })));

        let ids: Vec<u32> = logger.get_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9]);
    }

    #[test]
    fn test_duplicate_ids_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dupes.jsonl");
        let line = JsonLineCodec
            .encode(&InventoryItem::new(1, "Chair", 4, day()))
            .unwrap();
        fs::write(&path, format!("{line}\n{line}\n")).unwrap();

        let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        assert!(matches!(
            logger.load_from_file(DecodePolicy::Skip),
            Err(StoreError::DuplicateKey(1))
        ));
        assert!(logger.get_all().is_empty());
    }

    #[test]
    fn test_inventory_app_run() {
        let dir = tempdir().unwrap();
        let mut app = InventoryApp::new(dir.path().join("inventory.jsonl"));
        let lines = app.run(day(), DecodePolicy::Abort).unwrap();

        assert!(lines[0].starts_with("Loaded 5 item(s)"));
        assert_eq!(lines[1], "[1] Office Chair - Qty: 12, Added: 2025-02-03");
        assert_eq!(lines.len(), 6);
    }
}
