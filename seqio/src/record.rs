use std::fmt;

use crate::error::Malformation;
use crate::FileType;

pub trait Record{
    fn name(&self) -> &str;
    fn seq(&self) -> &str;
    fn qual(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord{
    name: String,
    seq: String,
}

/// A FASTQ record. The quality string always has the same length as the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord{
    name: String,
    seq: String,
    qual: String,
}

/// One record of either grammar, tagged with the grammar it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeqRecord{
    Fasta(FastaRecord),
    Fastq(FastqRecord),
}

impl FastaRecord{
    pub fn new(name: impl Into<String>, seq: impl Into<String>) -> Self{
        FastaRecord{name: name.into(), seq: seq.into()}
    }
}

impl FastqRecord{
    pub fn new(name: impl Into<String>, seq: impl Into<String>, qual: impl Into<String>) -> Result<Self, Malformation>{
        let (seq, qual) = (seq.into(), qual.into());
        // Lengths are in characters, not UTF-8 bytes
        let (seq_len, qual_len) = (seq.chars().count(), qual.chars().count());
        if seq_len != qual_len{
            return Err(Malformation::QualityLengthMismatch{seq: seq_len, qual: qual_len});
        }
        Ok(FastqRecord{name: name.into(), seq, qual})
    }
}

impl SeqRecord{
    pub fn file_type(&self) -> FileType{
        match self{
            SeqRecord::Fasta(_) => FileType::FASTA,
            SeqRecord::Fastq(_) => FileType::FASTQ,
        }
    }
}

impl Record for FastaRecord{
    fn name(&self) -> &str{&self.name}
    fn seq(&self) -> &str{&self.seq}
    fn qual(&self) -> Option<&str>{None}
}

impl Record for FastqRecord{
    fn name(&self) -> &str{&self.name}
    fn seq(&self) -> &str{&self.seq}
    fn qual(&self) -> Option<&str>{Some(&self.qual)}
}

impl Record for SeqRecord{
    fn name(&self) -> &str{
        match self{
            SeqRecord::Fasta(r) => r.name(),
            SeqRecord::Fastq(r) => r.name(),
        }
    }

    fn seq(&self) -> &str{
        match self{
            SeqRecord::Fasta(r) => r.seq(),
            SeqRecord::Fastq(r) => r.seq(),
        }
    }

    fn qual(&self) -> Option<&str>{
        match self{
            SeqRecord::Fasta(r) => r.qual(),
            SeqRecord::Fastq(r) => r.qual(),
        }
    }
}

impl From<FastaRecord> for SeqRecord{
    fn from(rec: FastaRecord) -> Self{
        SeqRecord::Fasta(rec)
    }
}

impl From<FastqRecord> for SeqRecord{
    fn from(rec: FastqRecord) -> Self{
        SeqRecord::Fastq(rec)
    }
}

// Renders the record in the grammar it was read from, without the final newline.
impl fmt::Display for SeqRecord{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self{
            SeqRecord::Fasta(r) => write!(f, ">{}\n{}", r.name, r.seq),
            SeqRecord::Fastq(r) => write!(f, "@{}\n{}\n+\n{}", r.name, r.seq, r.qual),
        }
    }
}
