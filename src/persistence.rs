// File: src/persistence.rs
use crate::core::lexicon::{DatasetEntry, Lexicon};
use crate::error::LexiconError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Writes the compiled lexicon to `path` atomically: the snapshot goes to a
/// temp file in the same directory, which is then renamed over the target.
pub fn save_snapshot(lexicon: &Lexicon, path: &Path) -> Result<(), LexiconError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, lexicon)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), "lexicon snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Lexicon, LexiconError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

/// Reads a JSON array of `{ "word", "sign", "category" }` rows.
pub fn read_dataset(path: &Path) -> Result<Vec<DatasetEntry>, LexiconError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Adds every dataset row from `path` to the lexicon. Rows naming a gesture
/// outside the vocabulary are skipped; returns how many rows were added.
pub fn import_dataset(lexicon: &mut Lexicon, path: &Path) -> Result<usize, LexiconError> {
    let mut added = 0;
    for entry in read_dataset(path)? {
        match lexicon.add_entry(entry) {
            Ok(()) => added += 1,
            Err(e) => warn!(error = %e, "skipping dataset row"),
        }
    }
    info!(path = %path.display(), added, "dataset imported");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn snapshot_survives_a_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lexicon.bin");

        let mut lexicon = Lexicon::builtin();
        lexicon.add_synonym("stroll", "walk");
        save_snapshot(&lexicon, &path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), bincode::serialized_size(&lexicon).unwrap());

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.vocabulary_len(), lexicon.vocabulary_len());
        assert_eq!(loaded.synonym("stroll").unwrap().as_str(), "walk");
        assert!(loaded.phrase("how are you").is_some());
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("absent.bin")).unwrap_err();
        assert!(matches!(err, LexiconError::Io(_)));
    }

    #[test]
    fn import_skips_rows_with_unknown_signs() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"word": "sprinting", "sign": "run", "category": "action"}},
                {{"word": "flying", "sign": "levitate"}},
                {{"word": "Notebook", "sign": "book"}}
            ]"#
        )
        .unwrap();

        let mut lexicon = Lexicon::builtin();
        let added = import_dataset(&mut lexicon, file.path()).unwrap();
        assert_eq!(added, 2);
        assert_eq!(lexicon.lookup_word("sprinting").unwrap().as_str(), "run");
        assert_eq!(lexicon.lookup_word("notebook").unwrap().as_str(), "book");
        assert!(lexicon.lookup_word("flying").is_none());
    }

    #[test]
    fn malformed_dataset_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = read_dataset(file.path()).unwrap_err();
        assert!(matches!(err, LexiconError::Json(_)));
    }
}
