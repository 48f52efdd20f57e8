use crate::error::Result;
use crate::triage::CorpusTriage;
use crate::types::{ParamRecord, CORPUS_BUCKETS, PARAMS_HEADER};
use std::fmt;
use std::path::Path;

/// Writes the parameter table: the fixed header, then one row per record
pub fn write_params_csv(records: &[ParamRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(PARAMS_HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}

/// Text report formatter for a triaged corpus
pub struct CorpusReport<'a> {
    triage: &'a CorpusTriage,
}

impl<'a> CorpusReport<'a> {
    /// Creates a new text report
    pub fn new(triage: &'a CorpusTriage) -> Self {
        Self { triage }
    }
}

impl<'a> fmt::Display for CorpusReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data Corpus")?;
        writeln!(f, "===========")?;
        writeln!(f)?;

        for bucket in &CORPUS_BUCKETS {
            let paths = self.triage.corpus.bucket(*bucket);
            writeln!(f, "{} ({}):", bucket, paths.len())?;
            for path in paths {
                writeln!(f, "  {}", path.display())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "SBRef present:  {}", self.triage.sbref_present)?;
        if !self.triage.failures.is_empty() {
            writeln!(f, "Skipped:        {}", self.triage.failures.len())?;
            for failure in &self.triage.failures {
                writeln!(f, "  {}: {}", failure.path.display(), failure.reason)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::ProbeFailure;
    use crate::types::CorpusBucket;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_write_params_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Params.csv");
        let record = ParamRecord::from_reply("T1w,0.8,0.8,0.8,2.22,2400,1,msec");

        write_params_csv(&[record], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "Modality,x,y,z,TE,TR,frames,TI");
        assert_eq!(lines[1], "T1w,0.80,0.80,0.80,2.22,2400.00,1.00,Not found");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_corpus_report_format() {
        let mut triage = CorpusTriage::default();
        triage
            .corpus
            .push(CorpusBucket::T1, PathBuf::from("/d/HCP01_T1w_MPR1.nii.gz"));
        triage.failures.push(ProbeFailure {
            path: PathBuf::from("/d/HCP01_Scout.nii.gz"),
            reason: "no series".to_string(),
        });

        let output = format!("{}", CorpusReport::new(&triage));

        assert!(output.contains("Data Corpus"));
        assert!(output.contains("t1-data (1):\n  /d/HCP01_T1w_MPR1.nii.gz"));
        assert!(output.contains("t2-data (0):"));
        assert!(output.contains("epi-data (0):"));
        assert!(output.contains("SBRef present:  false"));
        assert!(output.contains("Skipped:        1"));
    }
}
