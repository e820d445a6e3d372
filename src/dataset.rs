use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::ParseFloatError,
    ops::Deref,
    path::Path,
};

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("Failed to open the throughput file")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {token:?} is not a number")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: expected {expected} columns, found {found}")]
    Shape {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("the throughput file is empty")]
    Empty,
}
type Result<T> = std::result::Result<T, DatasetError>;

/// Throughput sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// wavelength [nm]
    pub wavelength: f64,
    /// fractional transmission
    pub throughput: f64,
}

/// Throughput curve in file order
#[derive(Debug, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
    n_columns: usize,
}
impl Deref for Dataset {
    type Target = [Sample];

    fn deref(&self) -> &Self::Target {
        &self.samples
    }
}
impl Dataset {
    /// Load the throughput curve from a whitespace separated text file
    ///
    /// The first column is the wavelength and the second column the throughput,
    /// any other column is parsed but not kept.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
    /// Load the throughput curve from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut this = Self::default();
        for (k, line) in reader.lines().enumerate() {
            let line = line?;
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|source| DatasetError::Parse {
                        line: k + 1,
                        token: token.to_owned(),
                        source,
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            if row.is_empty() {
                continue;
            }
            if this.n_columns == 0 {
                if row.len() < 2 {
                    return Err(DatasetError::Shape {
                        line: k + 1,
                        expected: 2,
                        found: row.len(),
                    });
                }
                this.n_columns = row.len();
            } else if row.len() != this.n_columns {
                return Err(DatasetError::Shape {
                    line: k + 1,
                    expected: this.n_columns,
                    found: row.len(),
                });
            }
            this.samples.push(Sample {
                wavelength: row[0],
                throughput: row[1],
            });
        }
        if this.samples.is_empty() {
            return Err(DatasetError::Empty);
        }
        log::debug!(
            "throughput table: {} rows x {} columns",
            this.len(),
            this.n_columns
        );
        Ok(this)
    }
    /// Returns the number of columns of the source table
    pub fn n_columns(&self) -> usize {
        self.n_columns
    }
    /// Iterator over the wavelengths
    pub fn wavelength_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.wavelength)
    }
    /// Iterator over the throughputs
    pub fn throughput_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.throughput)
    }
    /// Iterator over the (wavelength,throughput) pairs
    pub fn xy_iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelength_iter().zip(self.throughput_iter())
    }
    /// Returns the maximum throughput, NaN if any throughput is NaN
    pub fn max_throughput(&self) -> f64 {
        self.throughput_iter().fold(f64::NEG_INFINITY, |max, t| {
            if max.is_nan() || t.is_nan() {
                f64::NAN
            } else {
                max.max(t)
            }
        })
    }
    /// Returns the range of the wavelengths
    pub fn wavelength_range(&self) -> (f64, f64) {
        (
            self.wavelength_iter().fold(f64::INFINITY, f64::min),
            self.wavelength_iter().fold(f64::NEG_INFINITY, f64::max),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_two_columns() {
        let data = "500 0.1\n550 0.4\n600 0.2\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.n_columns(), 2);
        assert_eq!(
            dataset[1],
            Sample {
                wavelength: 550.,
                throughput: 0.4
            }
        );
        assert_eq!(dataset.max_throughput(), 0.4);
        assert_eq!(dataset.wavelength_range(), (500., 600.));
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = "500\t0.1 9 9\n  510 0.3 8 8  \n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.n_columns(), 4);
        let xy: Vec<_> = dataset.xy_iter().collect();
        assert_eq!(xy, vec![(500., 0.1), (510., 0.3)]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let data = "500 0.1\n\n   \n510 0.3\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn non_numeric_token() {
        let data = "500 0.1\n510 abc\n";
        match Dataset::from_reader(data.as_bytes()) {
            Err(DatasetError::Parse { line, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn ragged_rows() {
        let data = "500 0.1\n510 0.2 3\n";
        match Dataset::from_reader(data.as_bytes()) {
            Err(DatasetError::Shape {
                line,
                expected,
                found,
            }) => assert_eq!((line, expected, found), (2, 2, 3)),
            other => panic!("expected a shape error, got {:?}", other),
        }
    }

    #[test]
    fn single_column() {
        let data = "500\n510\n";
        assert!(matches!(
            Dataset::from_reader(data.as_bytes()),
            Err(DatasetError::Shape { found: 1, .. })
        ));
    }

    #[test]
    fn nan_throughput_propagates() {
        let data = "500 0.1\n510 nan\n520 0.3\n";
        let dataset = Dataset::from_reader(data.as_bytes()).unwrap();
        assert!(dataset.max_throughput().is_nan());
    }

    #[test]
    fn empty_file() {
        assert!(matches!(
            Dataset::from_reader("\n".as_bytes()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "300 0").unwrap();
        writeln!(file, "300.1 0.25").unwrap();
        let dataset = Dataset::from_path(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.max_throughput(), 0.25);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Dataset::from_path(dir.path().join("missing.dat")),
            Err(DatasetError::Io(_))
        ));
    }
}
