use std::io::{BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use seqio::reader::{DynamicFastXReader, FastXReader};
use seqio::writer::{DynamicFastXWriter, FastXWriter};
use seqio::SeqRecord;

pub mod cli;
pub mod config;
pub mod error;
pub mod randomizer;
pub mod sampler;

use crate::config::{Config, SamplingParams};
use crate::error::Result;

/// Reader → sampler → writer over already opened streams. Returns the number of records written.
///
/// Nothing is written until the whole input has been read, so a malformed
/// record anywhere in the input means no output at all.
pub fn subsample<R: BufRead, W: Write>(
    reader: FastXReader<R>,
    writer: &mut FastXWriter<W>,
    params: &SamplingParams,
) -> Result<u64>{
    let sampled = sample_records(reader, params, &ProgressBar::hidden())?;
    write_records(writer, &sampled)
}

// One pass over the input. The progress bar counts records as they are read.
pub fn sample_records<R: BufRead>(
    reader: FastXReader<R>,
    params: &SamplingParams,
    progress: &ProgressBar,
) -> Result<Vec<SeqRecord>>{
    let records = progress.wrap_iter(reader);
    let sampled = sampler::sample(records, params.sample_size, params.seed);
    progress.finish_and_clear();
    Ok(sampled?)
}

pub fn write_records<W: Write>(writer: &mut FastXWriter<W>, records: &[SeqRecord]) -> Result<u64>{
    let written = writer.write_all(records)?;
    writer.flush()?;
    Ok(written)
}

pub fn get_reader(config: &Config) -> Result<DynamicFastXReader>{
    match &config.input{
        Some(path) => Ok(DynamicFastXReader::from_path(path, config.file_format)?),
        None => Ok(DynamicFastXReader::from_stdin(config.file_format)),
    }
}

pub fn get_writer(config: &Config) -> Result<DynamicFastXWriter>{
    match &config.output{
        Some(path) => Ok(DynamicFastXWriter::to_path(path, config.file_format)?),
        None => Ok(DynamicFastXWriter::to_stdout(config.file_format)),
    }
}

fn progress_bar(enabled: bool) -> ProgressBar{
    if !enabled{
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {human_pos} records read [{elapsed}, {per_sec}]"){
        bar.set_style(style);
    }
    bar
}

/// Runs one subsampling invocation as configured on the command line.
pub fn run(config: &Config) -> Result<()>{
    let reader = get_reader(config)?;
    debug!(
        "Sampling {} {} records, seed {:?}",
        config.params.sample_size, config.file_format, config.params.seed
    );
    let sampled = sample_records(reader, &config.params, &progress_bar(config.progress))?;

    // The output is only created once the whole input parsed, so a failed run leaves it untouched
    let mut writer = get_writer(config)?;
    let written = write_records(&mut writer, &sampled)?;
    info!("Wrote {} records", written);
    Ok(())
}
