use super::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

pub fn open_sequence_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Reads the whole sequence file as text. Bytes that are not valid UTF-8 are
/// replaced rather than rejected; the validator drops them afterwards.
pub fn read_sequence_text(path: &Path) -> Result<String> {
    let mut reader = open_sequence_reader(path)?;
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let text = String::from_utf8_lossy(&buffer).into_owned();
    if text.trim().is_empty() {
        return Err(format!("The file is empty: {}", path.display()));
    }
    Ok(text)
}
