use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no walk length given")]
    MissingInput,
    #[error("invalid walk length {token:?}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
