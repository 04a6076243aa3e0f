use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::record::Record;
use crate::FileType;

// Writes records in one grammar. Sequences and qualities always go on a single line.
pub struct FastXWriter<W: Write>{
    filetype: FileType,
    output: BufWriter<W>,
}

impl<W: Write> FastXWriter<W>{
    // No need to give a buffered writer. Buffering is handled internally.
    pub fn new(output: W, filetype: FileType) -> Self{
        FastXWriter{filetype, output: BufWriter::new(output)}
    }

    pub fn filetype(&self) -> FileType{
        self.filetype
    }

    pub fn write<Rec: Record>(&mut self, rec: &Rec) -> Result<()>{
        match self.filetype{
            FileType::FASTA => {
                // Quality values of a FASTQ record are dropped here
                write!(self.output, ">{}\n{}\n", rec.name(), rec.seq())?;
            }
            FileType::FASTQ => {
                let qual = rec.qual().ok_or_else(|| Error::MissingQuality(rec.name().to_owned()))?;
                write!(self.output, "@{}\n{}\n+\n{}\n", rec.name(), rec.seq(), qual)?;
            }
        }
        Ok(())
    }

    pub fn write_all<'a, Rec, I>(&mut self, records: I) -> Result<u64>
    where
        Rec: Record + 'a,
        I: IntoIterator<Item = &'a Rec>,
    {
        let mut count = 0u64;
        for rec in records{
            self.write(rec)?;
            count += 1;
        }
        Ok(count)
    }

    pub fn flush(&mut self) -> Result<()>{
        self.output.flush()?;
        Ok(())
    }

    // Flushes and gives back the underlying stream.
    pub fn into_inner(self) -> Result<W>{
        self.output.into_inner().map_err(|e| Error::Io(e.into_error()))
    }
}

// A writer that takes no generics, for when the sink is only known at runtime.
pub type DynamicFastXWriter = FastXWriter<Box<dyn Write>>;

impl DynamicFastXWriter{
    pub fn to_path<P: AsRef<Path>>(path: P, filetype: FileType) -> Result<Self>{
        let file = File::create(path.as_ref())?;
        debug!("Writing {} to {}", filetype, path.as_ref().display());
        let output: Box<dyn Write> = Box::new(file);
        Ok(FastXWriter::new(output, filetype))
    }

    pub fn to_stdout(filetype: FileType) -> Self{
        debug!("Writing {} to stdout", filetype);
        let output: Box<dyn Write> = Box::new(io::stdout());
        FastXWriter::new(output, filetype)
    }
}
