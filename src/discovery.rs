use std::fs;
use std::path::Path;

use crate::model::error::SalesError;
use crate::model::record::RecordFile;

/// Lists the regular files in `dir` named `NNNNNNNN.rcd`, sorted by their
/// numeric id. Record files are not opened here.
pub fn discover_record_files(dir: &Path) -> Result<Vec<RecordFile>, SalesError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if let Some(file) = RecordFile::from_name(&name, entry.path()) {
            files.push(file);
        }
    }

    files.sort_by_key(|f| f.id);
    Ok(files)
}

/// Every id must be exactly one more than the one before it.
pub fn check_sequence(files: &[RecordFile]) -> Result<(), SalesError> {
    for pair in files.windows(2) {
        let former = pair[0].id;
        let latter = pair[1].id;
        if latter.checked_sub(former) != Some(1) {
            return Err(SalesError::SequenceError);
        }
    }
    Ok(())
}
