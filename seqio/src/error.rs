/// What exactly was wrong with a record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("expected a header line starting with '{0}'")]
    MissingHeaderMarker(char),

    #[error("expected a separator line starting with '+'")]
    MissingSeparator,

    #[error("stream ended before the {0} line")]
    Truncated(&'static str),

    #[error("quality line has different length than sequence line ({qual} vs {seq})")]
    QualityLengthMismatch { seq: usize, qual: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("unsupported file format '{0}', expected fasta or fastq")]
    UnsupportedFormat(String),

    #[error("malformed record starting at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: Malformation },

    #[error("record '{0}' has no quality values and can't be written as fastq")]
    MissingQuality(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
