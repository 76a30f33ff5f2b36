use crate::Money;
use serde::de::DeserializeOwned;
use std::{
    fmt,
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub const RESULTS_FILE_NAME: &str = "SalesResults.txt";

/// Reads a whole JSON array of records from `path`.
pub fn load_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let records: Vec<T> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
            path: path.to_owned(),
            source,
        })?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("error loading {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error loading {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub total: Money,
    pub execution_time: Duration,
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Sales Cost: {}", self.total)?;
        writeln!(
            f,
            "Execution Time: {} seconds",
            self.execution_time.as_secs_f64()
        )
    }
}

pub fn output_report(output_file: &mut impl Write, report: &SalesReport) -> io::Result<()> {
    write!(output_file, "{}", report)?;
    output_file.flush()
}
