use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Append `data` to `path`, creating the file if needed.
    ///
    /// The buffer is flushed and synced before returning so that a runner
    /// reading the file after the step exits sees complete records.
    pub fn append<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path.as_ref())?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        w.get_ref().sync_all()?;
        Ok(())
    }
}
