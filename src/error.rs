#[derive(thiserror::Error, Debug)]
pub enum Error{
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Seqio(#[from] seqio::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error{
    /// Process exit code: 2 for bad options, 1 for everything that goes wrong while running.
    pub fn exit_code(&self) -> u8{
        match self{
            Error::InvalidConfiguration(_) | Error::Seqio(seqio::Error::UnsupportedFormat(_)) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
