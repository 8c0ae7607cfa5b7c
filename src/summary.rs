use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::model::error::SalesError;
use crate::model::master::MasterList;

#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    code: &'a str,
    name: &'a str,
    total: u64,
}

/// Writes `<dir>/<kind>.out` as `code,name,total` lines in code order,
/// replacing any previous summary.
pub fn write_summary(dir: &Path, list: &MasterList) -> Result<(), SalesError> {
    let mut file = File::create(dir.join(list.kind.summary_file()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(&mut file);

    for (code, name, total) in list.entries() {
        writer.serialize(SummaryRow { code, name, total })?;
    }

    writer.flush()?;
    drop(writer);
    file.sync_all()?;
    Ok(())
}
