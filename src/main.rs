use std::io::{BufReader, BufWriter, Read, Write};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn stdin() -> std::io::Result<Vec<u8>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut input_buf: Vec<u8> = vec![];
    reader.read_to_end(&mut input_buf)?;
    Ok(input_buf)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input_buf = stdin().context("failed to read stdin")?;

    let mut output = BufWriter::new(std::io::stdout().lock());
    tetra_walks::run(&input_buf[..], &mut output)?;
    output.flush().context("failed to write answer")?;
    Ok(())
}
