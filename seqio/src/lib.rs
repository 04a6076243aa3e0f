use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub mod error;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::{Error, Malformation, Result};
pub use reader::FastXReader;
pub use record::{FastaRecord, FastqRecord, Record, SeqRecord};
pub use writer::FastXWriter;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileType{
    FASTA,
    FASTQ,
}

impl FromStr for FileType{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self>{
        if s.eq_ignore_ascii_case("fasta"){
            Ok(FileType::FASTA)
        } else if s.eq_ignore_ascii_case("fastq"){
            Ok(FileType::FASTQ)
        } else {
            Err(Error::UnsupportedFormat(s.to_owned()))
        }
    }
}

impl fmt::Display for FileType{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self{
            FileType::FASTA => write!(f, "fasta"),
            FileType::FASTQ => write!(f, "fastq"),
        }
    }
}

const FASTA_EXTENSIONS: [&str; 6] = [".fasta", ".fna", ".ffn", ".faa", ".frn", ".fa"];
const FASTQ_EXTENSIONS: [&str; 2] = [".fastq", ".fq"];

// Guesses the format from the file name. None if the extension is not known.
pub fn figure_out_file_format<P: AsRef<Path>>(path: P) -> Option<FileType>{
    let filename = path.as_ref().file_name()?.to_str()?;
    if FASTA_EXTENSIONS.iter().any(|suffix| filename.ends_with(suffix)){
        Some(FileType::FASTA)
    } else if FASTQ_EXTENSIONS.iter().any(|suffix| filename.ends_with(suffix)){
        Some(FileType::FASTQ)
    } else {
        None
    }
}
