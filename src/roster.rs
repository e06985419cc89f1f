//! Flat-file plumbing for name lists and the drawn-history export.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::draw::DrawError;

/// Reads every line of `path`. Either the whole file is returned or an
/// error; a partially read file is never handed back.
pub fn read_lines(path: &Path) -> Result<Vec<String>, DrawError> {
    let file = File::open(path).map_err(|source| DrawError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| DrawError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// `1,first\n2,second\n...`, nothing at all for an empty history.
pub fn write_history_csv<S: AsRef<str>>(
    mut writer: impl Write,
    history: &[S],
) -> std::io::Result<()> {
    for (i, name) in history.iter().enumerate() {
        writeln!(writer, "{},{}", i + 1, name.as_ref())?;
    }
    writer.flush()
}

/// Overwrites `path` with the CSV form of `history`.
pub fn export_history<S: AsRef<str>>(path: &Path, history: &[S]) -> Result<(), DrawError> {
    let file = File::create(path).map_err(|source| DrawError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    write_history_csv(BufWriter::new(file), history).map_err(|source| DrawError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
