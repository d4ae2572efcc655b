use atml::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Paths to the roster file and the script file, in that order
pub struct InputPaths {
    pub roster: PathBuf,
    pub script: PathBuf,
}

/// Parses the input arguments, requiring exactly two valid filepaths: the roster, then the script
pub fn parse_input_args() -> Result<InputPaths> {
    let mut args = env::args().skip(1);

    let roster = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("First argument must be the roster file.".to_string()))?;

    let script = args
        .next()
        .ok_or_else(|| InputArgsError::Parse("Second argument must be the script file.".to_string()))?;

    return Ok(InputPaths {
        roster: canonicalize(roster)?,
        script: canonicalize(script)?,
    });
}

fn canonicalize(filename: String) -> Result<PathBuf> {
    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    return Ok(path);
}
