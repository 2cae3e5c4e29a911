use crate::error::{AggregationError, Result};
use crate::models::Record;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;
use tracing::debug;

pub struct RecordReader {
    use_mmap: bool,
}

impl RecordReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Open `path` and stream its records up to the first blank line
    pub fn stream_records(&self, path: &Path) -> Result<RecordIterator<Box<dyn BufRead>>> {
        let file = File::open(path)?;
        let reader: Box<dyn BufRead> = if self.use_mmap {
            debug!(path = %path.display(), "memory-mapping input");
            Self::map_file(&file)?
        } else {
            debug!(path = %path.display(), "opening buffered input");
            Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file))
        };
        Ok(RecordIterator::new(reader))
    }

    /// Read every record of `path` into memory
    pub fn read_records(&self, path: &Path) -> Result<Vec<Record>> {
        self.stream_records(path)?.collect()
    }

    /// Stream records from an already opened source
    pub fn from_reader<R: BufRead>(reader: R) -> RecordIterator<R> {
        RecordIterator::new(reader)
    }

    fn map_file(file: &File) -> Result<Box<dyn BufRead>> {
        // Zero-length mappings are rejected on some platforms
        if file.metadata()?.len() == 0 {
            return Ok(Box::new(io::empty()));
        }
        let mmap = unsafe { Mmap::map(file)? };
        std::str::from_utf8(&mmap).map_err(|e| AggregationError::InvalidUtf8(e.to_string()))?;
        Ok(Box::new(Cursor::new(mmap)))
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the records of one input, stopping at the sentinel line
pub struct RecordIterator<R> {
    reader: R,
    buffer: String,
    line_number: usize,
    finished: bool,
    reached_sentinel: bool,
}

impl<R: BufRead> RecordIterator<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
            finished: false,
            reached_sentinel: false,
        }
    }

    /// Lines consumed so far, including the sentinel
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// True once a blank line ended the stream before end of file
    pub fn reached_sentinel(&self) -> bool {
        self.reached_sentinel
    }
}

impl<R: BufRead> Iterator for RecordIterator<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;

                if self.buffer.trim().is_empty() {
                    debug!(line = self.line_number, "blank line, ending input");
                    self.finished = true;
                    self.reached_sentinel = true;
                    return None;
                }

                let record = Record::parse(&self.buffer, self.line_number);
                if record.is_err() {
                    self.finished = true;
                }
                Some(record)
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                self.finished = true;
                Some(Err(AggregationError::InvalidUtf8(format!(
                    "line {}: {}",
                    self.line_number + 1,
                    e
                ))))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e.into()))
            }
        }
    }
}
