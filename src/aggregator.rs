use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::model::error::SalesError;
use crate::model::master::{MasterList, AMOUNT_LIMIT};
use crate::model::record::{RecordFile, SalesRecord};

/// Applies every record file, in order, to the branch and commodity totals.
///
/// Stops at the first bad file. Totals are left as they were at that point;
/// the caller is expected to drop them.
pub fn apply_records(
    files: &[RecordFile],
    branches: &mut MasterList,
    commodities: &mut MasterList,
) -> Result<(), SalesError> {
    for file in files {
        apply_record_file(file, branches, commodities)?;
    }
    Ok(())
}

fn read_lines(file: &RecordFile) -> Result<Vec<String>, SalesError> {
    let reader = BufReader::new(File::open(&file.path)?);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

fn apply_record_file(
    file: &RecordFile,
    branches: &mut MasterList,
    commodities: &mut MasterList,
) -> Result<(), SalesError> {
    let record = SalesRecord::from_lines(read_lines(file)?)
        .ok_or_else(|| SalesError::RecordFormatError(file.name.clone()))?;

    if !branches.contains(&record.branch_code) {
        return Err(SalesError::InvalidBranchCode(file.name.clone()));
    }
    if !commodities.contains(&record.commodity_code) {
        return Err(SalesError::InvalidCommodityCode(file.name.clone()));
    }

    let amount = record.parse_amount().ok_or(SalesError::UnknownError)?;

    let branch_total = branches
        .add_sale(&record.branch_code, amount)
        .ok_or_else(|| SalesError::InvalidBranchCode(file.name.clone()))?;
    let commodity_total = commodities
        .add_sale(&record.commodity_code, amount)
        .ok_or_else(|| SalesError::InvalidCommodityCode(file.name.clone()))?;

    if branch_total >= AMOUNT_LIMIT || commodity_total >= AMOUNT_LIMIT {
        return Err(SalesError::AmountOverflow);
    }

    Ok(())
}
