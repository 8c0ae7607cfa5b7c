use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Totals must stay strictly below this value (ten decimal digits).
pub const AMOUNT_LIMIT: u64 = 10_000_000_000;

static BRANCH_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}$").expect("branch code pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterKind {
    Branch,
    Commodity,
}

impl MasterKind {
    pub fn definition_file(self) -> &'static str {
        match self {
            MasterKind::Branch => "branch.lst",
            MasterKind::Commodity => "commodity.lst",
        }
    }

    pub fn summary_file(self) -> &'static str {
        match self {
            MasterKind::Branch => "branch.out",
            MasterKind::Commodity => "commodity.out",
        }
    }

    /// Branch codes are three ASCII digits. Commodity codes are eight
    /// characters holding at least one digit, one lowercase and one
    /// uppercase ASCII letter.
    pub fn is_valid_code(self, code: &str) -> bool {
        match self {
            MasterKind::Branch => BRANCH_CODE.is_match(code),
            MasterKind::Commodity => {
                code.chars().count() == 8
                    && code.chars().any(|c| c.is_ascii_digit())
                    && code.chars().any(|c| c.is_ascii_lowercase())
                    && code.chars().any(|c| c.is_ascii_uppercase())
            }
        }
    }
}

impl fmt::Display for MasterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MasterKind::Branch => write!(f, "Branch"),
            MasterKind::Commodity => write!(f, "Commodity"),
        }
    }
}

/// A loaded definition file: display names plus the running sales total
/// for every code. Both maps always share the same key set.
#[derive(Debug, Clone)]
pub struct MasterList {
    pub kind: MasterKind,
    names: BTreeMap<String, String>,
    sales: BTreeMap<String, u64>,
}

impl MasterList {
    pub fn new(kind: MasterKind) -> Self {
        MasterList {
            kind,
            names: BTreeMap::new(),
            sales: BTreeMap::new(),
        }
    }

    /// Registers a code with a zero total. A repeated code replaces the
    /// earlier name and resets its total.
    pub fn insert(&mut self, code: &str, name: &str) {
        self.names.insert(code.to_string(), name.to_string());
        self.sales.insert(code.to_string(), 0);
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    #[cfg(test)]
    pub fn total(&self, code: &str) -> Option<u64> {
        self.sales.get(code).copied()
    }

    /// Adds `amount` to a known code and returns the new total, or `None`
    /// if the code was never loaded.
    pub fn add_sale(&mut self, code: &str, amount: u64) -> Option<u64> {
        let total = self.sales.get_mut(code)?;
        *total = total.saturating_add(amount);
        Some(*total)
    }

    /// Iterates `(code, name, total)` in ascending code order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, u64)> + '_ {
        self.sales.iter().map(move |(code, &total)| {
            let name = self.name(code).unwrap_or_default();
            (code.as_str(), name, total)
        })
    }
}
