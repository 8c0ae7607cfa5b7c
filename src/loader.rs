use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::model::error::SalesError;
use crate::model::master::{MasterKind, MasterList};

/// Reads `<dir>/<kind>.lst` into a [`MasterList`] with every total at zero.
///
/// Each line is split on `,` with no quoting, so it must hold exactly
/// `code,name` with a code that satisfies the kind's code rule. A blank
/// line is one field and fails. Loading stops at the first bad line.
pub fn load_master_list(dir: &Path, kind: MasterKind) -> Result<MasterList, SalesError> {
    let path = dir.join(kind.definition_file());
    if !path.exists() {
        return Err(SalesError::FileNotExist(kind));
    }

    let reader = BufReader::new(File::open(&path)?);

    let mut list = MasterList::new(kind);
    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line.split(',').collect();
        let [code, name] = fields.as_slice() else {
            return Err(SalesError::FileInvalidFormat(kind));
        };
        if !kind.is_valid_code(code) {
            return Err(SalesError::FileInvalidFormat(kind));
        }
        list.insert(code, name);
    }

    Ok(list)
}
