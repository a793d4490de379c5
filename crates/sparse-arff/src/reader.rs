//! Header Scan and Row Streaming

use crate::error::ArffError;
use crate::header::{ArffOptions, Header};
use crate::row::{parse_row, SparseRow};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Reader positioned just after the `@data` marker of a dataset
pub struct ArffReader<R> {
    lines: Lines<R>,
    header: Header,
    line_no: usize,
    source: PathBuf,
}

impl ArffReader<BufReader<File>> {
    /// Open a dataset file and read its header
    pub fn open(path: impl AsRef<Path>, options: &ArffOptions) -> Result<Self, ArffError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ArffError::io(path, e))?;
        Self::with_source(BufReader::new(file), path, options)
    }
}

impl<R: BufRead> ArffReader<R> {
    /// Read the header from an in-memory or already opened source
    pub fn from_reader(reader: R, options: &ArffOptions) -> Result<Self, ArffError> {
        Self::with_source(reader, "<input>", options)
    }

    fn with_source(
        reader: R,
        source: impl Into<PathBuf>,
        options: &ArffOptions,
    ) -> Result<Self, ArffError> {
        let source = source.into();
        let mut lines = reader.lines();
        let mut line_no = 0;
        let mut names = Vec::new();

        for line in lines.by_ref() {
            line_no += 1;
            let line = line.map_err(|e| ArffError::io(&source, e))?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('%') {
                continue;
            }
            if line.eq_ignore_ascii_case("@data") {
                break;
            }

            let mut tokens = line.split_whitespace();
            let is_attribute = tokens
                .next()
                .is_some_and(|t| t.eq_ignore_ascii_case("@attribute"));
            if !is_attribute {
                continue;
            }

            match tokens.next() {
                Some(name) => names.push(name.to_string()),
                None => warn!("Skipping @attribute without a name at line {}", line_no),
            }
        }

        let header = Header::new(names, options);
        debug!(
            "Read header from {}: {} attributes, label index {:?}",
            source.display(),
            header.len(),
            header.label_index()
        );

        Ok(Self {
            lines,
            header,
            line_no,
            source,
        })
    }

    /// Declared attributes
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Stream the data rows, consuming the reader
    pub fn rows(self) -> Rows<R> {
        Rows {
            label_index: self.header.label_index(),
            lines: self.lines,
            line_no: self.line_no,
            source: self.source,
        }
    }
}

/// Lazy stream of data rows; the underlying handle closes when dropped
pub struct Rows<R> {
    lines: Lines<R>,
    line_no: usize,
    label_index: Option<usize>,
    source: PathBuf,
}

impl<R: BufRead> Iterator for Rows<R> {
    type Item = Result<SparseRow, ArffError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(ArffError::io(&self.source, e))),
            };
            self.line_no += 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with('%') {
                continue;
            }

            return Some(parse_row(line, self.line_no, self.label_index));
        }
    }
}
