use std::fmt;

use crate::model::master::MasterKind;

const UNKNOWN_ERROR: &str = "An unexpected error has occurred";
const SALE_FILE_NOT_SEQUENCE_NUMBER: &str = "Sales file names are not sequential";
const SALE_AMOUNT_OVER_TEN_DIGITS: &str = "Total amount exceeded 10 digits";

#[derive(Debug)]
pub enum SalesError {
    UnknownError,
    IoError(std::io::Error),
    CsvError(csv::Error),
    FileNotExist(MasterKind),
    FileInvalidFormat(MasterKind),
    SequenceError,
    RecordFormatError(String),
    InvalidBranchCode(String),
    InvalidCommodityCode(String),
    AmountOverflow,
}

/// Fieldless view of [`SalesError`], so callers can match on the failure
/// category without caring about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownError,
    FileNotExist,
    FileInvalidFormat,
    SequenceError,
    RecordFormatError,
    InvalidBranchCode,
    InvalidCommodityCode,
    AmountOverflow,
}

impl SalesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SalesError::UnknownError | SalesError::IoError(_) | SalesError::CsvError(_) => {
                ErrorKind::UnknownError
            }
            SalesError::FileNotExist(_) => ErrorKind::FileNotExist,
            SalesError::FileInvalidFormat(_) => ErrorKind::FileInvalidFormat,
            SalesError::SequenceError => ErrorKind::SequenceError,
            SalesError::RecordFormatError(_) => ErrorKind::RecordFormatError,
            SalesError::InvalidBranchCode(_) => ErrorKind::InvalidBranchCode,
            SalesError::InvalidCommodityCode(_) => ErrorKind::InvalidCommodityCode,
            SalesError::AmountOverflow => ErrorKind::AmountOverflow,
        }
    }

    /// The underlying cause, for the run log. The user-facing message hides it.
    pub fn detail(&self) -> Option<String> {
        match self {
            SalesError::IoError(err) => Some(format!("I/O error: {}", err)),
            SalesError::CsvError(err) => Some(format!("CSV error: {}", err)),
            _ => None,
        }
    }
}

impl fmt::Display for SalesError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SalesError::UnknownError | SalesError::IoError(_) | SalesError::CsvError(_) => {
                write!(f, "{}", UNKNOWN_ERROR)
            }
            SalesError::FileNotExist(kind) => write!(f, "{} definition file does not exist", kind),
            SalesError::FileInvalidFormat(kind) => {
                write!(f, "{} definition file has an invalid format", kind)
            }
            SalesError::SequenceError => write!(f, "{}", SALE_FILE_NOT_SEQUENCE_NUMBER),
            SalesError::RecordFormatError(file) => write!(f, "{} has an invalid format", file),
            SalesError::InvalidBranchCode(file) => write!(f, "{} has an invalid branch code", file),
            SalesError::InvalidCommodityCode(file) => {
                write!(f, "{} has an invalid commodity code", file)
            }
            SalesError::AmountOverflow => write!(f, "{}", SALE_AMOUNT_OVER_TEN_DIGITS),
        }
    }
}

impl std::error::Error for SalesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SalesError::IoError(err) => Some(err),
            SalesError::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SalesError {
    fn from(err: std::io::Error) -> Self {
        SalesError::IoError(err)
    }
}

impl From<csv::Error> for SalesError {
    fn from(err: csv::Error) -> Self {
        SalesError::CsvError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_failures_read_as_unknown_error() {
        let err = SalesError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));

        assert_eq!(err.kind(), ErrorKind::UnknownError);
        assert_eq!(err.to_string(), "An unexpected error has occurred");
        assert!(err.detail().unwrap().contains("disk gone"));
    }

    #[test]
    fn test_messages_name_the_offending_file() {
        let err = SalesError::InvalidBranchCode("00000002.rcd".to_string());
        assert_eq!(err.to_string(), "00000002.rcd has an invalid branch code");

        let err = SalesError::RecordFormatError("00000007.rcd".to_string());
        assert_eq!(err.to_string(), "00000007.rcd has an invalid format");
    }

    #[test]
    fn test_master_messages_name_the_list() {
        assert_eq!(
            SalesError::FileNotExist(MasterKind::Commodity).to_string(),
            "Commodity definition file does not exist"
        );
        assert_eq!(
            SalesError::FileInvalidFormat(MasterKind::Branch).to_string(),
            "Branch definition file has an invalid format"
        );
    }
}
