use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, Malformation, Result};
use crate::record::{FastaRecord, FastqRecord, SeqRecord};
use crate::FileType;

/// Pulls one record at a time out of a buffered text stream.
///
/// The reader is an [`Iterator`] over `Result<SeqRecord>`. It never holds
/// more than the record being assembled (plus, for FASTA, the header line of
/// the next record). After the first error it yields `None` forever.
pub struct FastXReader<R: BufRead>{
    filetype: FileType,
    input: R,
    line_buf: String,
    line_number: u64,
    pending_header: Option<String>, // FASTA header read while finishing the previous record
    records_read: u64,
    failed: bool,
}

impl<R: BufRead> FastXReader<R>{
    pub fn new(input: R, filetype: FileType) -> Self{
        FastXReader{
            filetype,
            input,
            line_buf: String::new(),
            line_number: 0,
            pending_header: None,
            records_read: 0,
            failed: false,
        }
    }

    pub fn filetype(&self) -> FileType{
        self.filetype
    }

    pub fn records_read(&self) -> u64{
        self.records_read
    }

    pub fn read_next(&mut self) -> Result<Option<SeqRecord>>{
        if self.failed{
            return Ok(None);
        }
        let res = match self.filetype{
            FileType::FASTA => self.next_fasta(),
            FileType::FASTQ => self.next_fastq(),
        };
        match res{
            Ok(Some(rec)) => {
                self.records_read += 1;
                Ok(Some(rec))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                self.failed = true;
                Err(e)
            }
        }
    }

    // Reads the next line into line_buf without its terminator. Returns false at end of stream.
    fn read_line(&mut self) -> Result<bool>{
        self.line_buf.clear();
        if self.input.read_line(&mut self.line_buf)? == 0{
            return Ok(false);
        }
        self.line_number += 1;
        if self.line_buf.ends_with('\n'){
            self.line_buf.pop();
            if self.line_buf.ends_with('\r'){
                self.line_buf.pop();
            }
        }
        Ok(true)
    }

    fn next_fasta(&mut self) -> Result<Option<SeqRecord>>{
        let (start, name) = match self.pending_header.take(){
            Some(header) => (self.line_number, header),
            None => loop{
                if !self.read_line()?{
                    return Ok(None);
                }
                if let Some(header) = self.line_buf.strip_prefix('>'){
                    break (self.line_number, header.to_owned());
                }
                if !self.line_buf.trim().is_empty(){
                    return Err(Error::MalformedRecord{
                        line: self.line_number,
                        reason: Malformation::MissingHeaderMarker('>'),
                    });
                }
            },
        };

        let mut seq = String::new();
        while self.read_line()?{
            if let Some(header) = self.line_buf.strip_prefix('>'){
                // Header of the next record. Keep it for the next call.
                self.pending_header = Some(header.to_owned());
                break;
            }
            seq.push_str(&self.line_buf);
        }

        trace!("FASTA record '{}' from line {}, {} bases", name, start, seq.len());
        Ok(Some(FastaRecord::new(name, seq).into()))
    }

    fn next_fastq(&mut self) -> Result<Option<SeqRecord>>{
        // Header line. Blank lines are fine at the very start and at the very end.
        let mut blank_run = false;
        loop{
            if !self.read_line()?{
                return Ok(None);
            }
            if !self.line_buf.trim().is_empty(){
                break;
            }
            blank_run = true;
        }
        let start = self.line_number;
        let name = match self.line_buf.strip_prefix('@'){
            Some(name) if !blank_run || self.records_read == 0 => name.to_owned(),
            _ => {
                return Err(Error::MalformedRecord{
                    line: start,
                    reason: Malformation::MissingHeaderMarker('@'),
                })
            }
        };

        let seq = self.expect_line(start, "sequence")?;

        self.expect_line(start, "separator")?;
        if !self.line_buf.starts_with('+'){
            return Err(Error::MalformedRecord{line: start, reason: Malformation::MissingSeparator});
        }

        let qual = self.expect_line(start, "quality")?;

        FastqRecord::new(name, seq, qual)
            .map(SeqRecord::from)
            .map(Some)
            .map_err(|reason| Error::MalformedRecord{line: start, reason})
    }

    // Reads a line that has to exist because the current FASTQ record is not complete yet.
    fn expect_line(&mut self, start: u64, what: &'static str) -> Result<String>{
        if !self.read_line()?{
            return Err(Error::MalformedRecord{line: start, reason: Malformation::Truncated(what)});
        }
        Ok(self.line_buf.clone())
    }
}

impl<R: BufRead> Iterator for FastXReader<R>{
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item>{
        self.read_next().transpose()
    }
}

// A reader that takes no generics, for when the source is only known at runtime.
pub type DynamicFastXReader = FastXReader<Box<dyn BufRead>>;

impl DynamicFastXReader{
    pub fn from_path<P: AsRef<Path>>(path: P, filetype: FileType) -> Result<Self>{
        let file = File::open(path.as_ref())?;
        debug!("Reading {} from {}", filetype, path.as_ref().display());
        let input: Box<dyn BufRead> = Box::new(BufReader::new(file));
        Ok(FastXReader::new(input, filetype))
    }

    pub fn from_stdin(filetype: FileType) -> Self{
        debug!("Reading {} from stdin", filetype);
        let input: Box<dyn BufRead> = Box::new(BufReader::new(io::stdin()));
        FastXReader::new(input, filetype)
    }
}
