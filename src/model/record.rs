use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

static RECORD_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{8})\.rcd$").expect("record file pattern"));

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,10}$").expect("amount pattern"));

/// A daily sales file, `NNNNNNNN.rcd`, identified by its numeric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFile {
    pub id: u32,
    pub name: String,
    pub path: PathBuf,
}

impl RecordFile {
    /// Returns `None` unless `name` is eight digits followed by `.rcd`.
    pub fn from_name(name: &str, path: PathBuf) -> Option<Self> {
        let captures = RECORD_FILE_NAME.captures(name)?;
        let id = captures.get(1)?.as_str().parse::<u32>().ok()?;
        Some(RecordFile {
            id,
            name: name.to_string(),
            path,
        })
    }
}

/// The three lines of a record file, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRecord {
    pub branch_code: String,
    pub commodity_code: String,
    pub amount: String,
}

impl SalesRecord {
    pub fn from_lines(mut lines: Vec<String>) -> Option<Self> {
        if lines.len() != 3 {
            return None;
        }
        let amount = lines.pop()?;
        let commodity_code = lines.pop()?;
        let branch_code = lines.pop()?;
        Some(SalesRecord {
            branch_code,
            commodity_code,
            amount,
        })
    }

    /// One to ten ASCII digits, no sign or decimal point.
    pub fn parse_amount(&self) -> Option<u64> {
        if !AMOUNT.is_match(&self.amount) {
            return None;
        }
        self.amount.parse::<u64>().ok()
    }
}
