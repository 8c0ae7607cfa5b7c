use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::aggregator::apply_records;
use crate::discovery::{check_sequence, discover_record_files};
use crate::loader::load_master_list;
use crate::logger::RunLog;
use crate::model::error::SalesError;
use crate::model::master::{MasterKind, MasterList};
use crate::summary::write_summary;

/// One batch run over a sales directory.
///
/// Stages run strictly in order: both master lists on `load`, record
/// discovery and aggregation on `process`, both summaries on
/// `write_summaries`. Any error ends the run.
pub struct SalesProcessor {
    directory: PathBuf,
    branches: MasterList,
    commodities: MasterList,
    logger: Option<Arc<RunLog>>,
}

impl SalesProcessor {
    #[cfg(test)]
    pub fn load(directory: &Path) -> Result<Self, SalesError> {
        Self::load_with_logger(directory, None)
    }

    pub fn load_with_logger(
        directory: &Path,
        logger: Option<Arc<RunLog>>,
    ) -> Result<Self, SalesError> {
        let mut processor = SalesProcessor {
            directory: directory.to_path_buf(),
            branches: MasterList::new(MasterKind::Branch),
            commodities: MasterList::new(MasterKind::Commodity),
            logger,
        };

        processor.branches = processor.load_master(MasterKind::Branch)?;
        processor.commodities = processor.load_master(MasterKind::Commodity)?;
        Ok(processor)
    }

    fn load_master(&self, kind: MasterKind) -> Result<MasterList, SalesError> {
        let list = load_master_list(&self.directory, kind)?;
        self.log(&format!(
            "Loaded {} codes from {}",
            list.len(),
            kind.definition_file()
        ));
        Ok(list)
    }

    /// Discovers the record files, checks their numbering and applies them.
    pub fn process(&mut self) -> Result<(), SalesError> {
        let files = discover_record_files(&self.directory)?;
        self.log(&format!("Found {} record files", files.len()));

        check_sequence(&files)?;
        apply_records(&files, &mut self.branches, &mut self.commodities)?;
        self.log(&format!("Applied {} record files", files.len()));
        Ok(())
    }

    pub fn write_summaries(&self) -> Result<(), SalesError> {
        for list in [&self.branches, &self.commodities] {
            write_summary(&self.directory, list)?;
            self.log(&format!(
                "Wrote {} rows to {}",
                list.len(),
                list.kind.summary_file()
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn branches(&self) -> &MasterList {
        &self.branches
    }

    #[cfg(test)]
    pub fn commodities(&self) -> &MasterList {
        &self.commodities
    }

    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            logger.record(message);
        }
    }
}

/// Runs the whole pipeline over `directory`. Nothing is written unless
/// every record file was applied.
pub fn run_batch(directory: &Path, logger: Option<Arc<RunLog>>) -> Result<(), SalesError> {
    if let Some(logger) = &logger {
        logger.batch_started(directory);
    }

    let result = SalesProcessor::load_with_logger(directory, logger.clone()).and_then(|mut p| {
        p.process()?;
        p.write_summaries()
    });

    if let Some(logger) = &logger {
        logger.batch_finished(&result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::ErrorKind;
    use std::fs;

    fn seed_masters(dir: &Path) {
        fs::write(dir.join("branch.lst"), "001,Tokyo\n002,Osaka\n").unwrap();
        fs::write(dir.join("commodity.lst"), "AB12cd34,Widget\nzz99YY00,Gadget\n").unwrap();
    }

    #[test]
    fn test_full_batch() {
        let dir = tempfile::tempdir().unwrap();
        seed_masters(dir.path());
        fs::write(dir.path().join("00000001.rcd"), "001\nAB12cd34\n500\n").unwrap();
        fs::write(dir.path().join("00000002.rcd"), "002\nzz99YY00\n300\n").unwrap();
        fs::write(dir.path().join("00000003.rcd"), "001\nzz99YY00\n200\n").unwrap();

        let mut processor = SalesProcessor::load(dir.path()).unwrap();
        processor.process().unwrap();

        assert_eq!(processor.branches().total("001"), Some(700));
        assert_eq!(processor.branches().total("002"), Some(300));
        assert_eq!(processor.commodities().total("AB12cd34"), Some(500));
        assert_eq!(processor.commodities().total("zz99YY00"), Some(500));

        processor.write_summaries().unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("branch.out")).unwrap(),
            "001,Tokyo,700\n002,Osaka,300\n"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("commodity.out")).unwrap(),
            "AB12cd34,Widget,500\nzz99YY00,Gadget,500\n"
        );
    }

    #[test]
    fn test_commodity_master_not_loaded_after_branch_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("branch.lst"), "1,Tokyo\n").unwrap();

        let err = SalesProcessor::load(dir.path()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::FileInvalidFormat);
        assert_eq!(err.to_string(), "Branch definition file has an invalid format");
    }

    #[test]
    fn test_no_summaries_after_failed_batch() {
        let dir = tempfile::tempdir().unwrap();
        seed_masters(dir.path());
        fs::write(dir.path().join("00000001.rcd"), "001\nAB12cd34\n500\n").unwrap();
        fs::write(dir.path().join("00000003.rcd"), "001\nAB12cd34\n500\n").unwrap();

        let err = run_batch(dir.path(), None).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::SequenceError);
        assert!(!dir.path().join("branch.out").exists());
        assert!(!dir.path().join("commodity.out").exists());
    }

    #[test]
    fn test_batch_without_record_files() {
        let dir = tempfile::tempdir().unwrap();
        seed_masters(dir.path());

        run_batch(dir.path(), None).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("branch.out")).unwrap(),
            "001,Tokyo,0\n002,Osaka,0\n"
        );
    }

    #[test]
    fn test_logs_abort_cause() {
        let dir = tempfile::tempdir().unwrap();
        seed_masters(dir.path());
        fs::write(dir.path().join("00000001.rcd"), "001\nAB12cd34\n12a3\n").unwrap();
        let log_path = dir.path().join("run.log");
        let logger = Arc::new(RunLog::open(&log_path).unwrap());

        let err = run_batch(dir.path(), Some(logger)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownError);

        let log = fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Loaded 2 codes from branch.lst"));
        assert!(log.contains("Found 1 record files"));
        assert!(log.contains("Batch aborted: An unexpected error has occurred"));
    }
}
