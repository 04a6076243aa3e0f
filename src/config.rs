use std::path::PathBuf;

use clap::ArgMatches;
use log::debug;
use seqio::FileType;

use crate::error::{Error, Result};

/// Parameters of one sampling run, already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams{
    pub sample_size: usize,
    pub seed: Option<f64>,
}

impl SamplingParams{
    pub fn new(sample_size: i64, seed: Option<f64>) -> Result<Self>{
        if sample_size < 1{
            return Err(Error::InvalidConfiguration(format!(
                "sample size must be at least 1, got {}",
                sample_size
            )));
        }
        let sample_size = usize::try_from(sample_size).map_err(|_| {
            Error::InvalidConfiguration(format!("sample size {} is too large", sample_size))
        })?;
        if let Some(seed) = seed{
            if !seed.is_finite(){
                return Err(Error::InvalidConfiguration(format!("seed must be a finite number, got {}", seed)));
            }
        }
        Ok(SamplingParams{sample_size, seed})
    }
}

/// Everything the command line decides. `None` paths mean stdin/stdout.
#[derive(Debug, Clone)]
pub struct Config{
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub file_format: FileType,
    pub params: SamplingParams,
    pub progress: bool,
}

fn path_or_std(arg: Option<&String>) -> Option<PathBuf>{
    match arg{
        None => None,
        Some(s) if s == "-" => None,
        Some(s) => Some(PathBuf::from(s)),
    }
}

impl Config{
    /// Validates the parsed arguments. Nothing is opened or read here.
    pub fn from_matches(args: &ArgMatches) -> Result<Self>{
        let input = path_or_std(args.get_one::<String>("input"));
        let output = path_or_std(args.get_one::<String>("output"));

        let file_format = match args.get_one::<String>("file-format"){
            Some(name) => name.parse::<FileType>()?,
            None => match &input{
                Some(path) => seqio::figure_out_file_format(path).ok_or_else(|| {
                    Error::InvalidConfiguration(format!(
                        "can't infer the format of {}, give --file-format",
                        path.display()
                    ))
                })?,
                None => {
                    return Err(Error::InvalidConfiguration(
                        "--file-format is required when reading from stdin".to_owned(),
                    ))
                }
            },
        };

        let sample_size = args.get_one::<i64>("sample-size").copied().unwrap_or(100);
        let seed = args.get_one::<f64>("seed").copied();
        let params = SamplingParams::new(sample_size, seed)?;

        let config = Config{
            input,
            output,
            file_format,
            params,
            progress: args.get_flag("progress"),
        };
        debug!("{:?}", config);
        Ok(config)
    }
}
