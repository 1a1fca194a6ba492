use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;

pub fn looks_like_gzip<R: Read + Seek>(mut r: R) -> io::Result<bool> {
    let mut magic = [0u8; 2];
    let pos = r.stream_position()?;
    let n = r.read(&mut magic)?;
    r.seek(SeekFrom::Start(pos))?;
    Ok(n >= 2 && magic == [0x1F, 0x8B])
}

/// Read a whole report, decompressing `.gz` by extension or magic bytes.
/// Returns `None` when the file exceeds `limit` bytes.
pub fn read_report(path: &Path, limit: u64) -> io::Result<Option<Vec<u8>>> {
    let mut f = File::open(path)?;
    if f.metadata()?.len() > limit {
        return Ok(None);
    }

    let is_gz = path.extension().and_then(|s| s.to_str()) == Some("gz")
        || looks_like_gzip(&mut f).unwrap_or(false);

    let rdr: Box<dyn Read> = if is_gz {
        #[cfg(feature = "gzip")]
        {
            Box::new(MultiGzDecoder::new(BufReader::new(f)))
        }
        #[cfg(not(feature = "gzip"))]
        {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "gzip support not enabled",
            ));
        }
    } else {
        Box::new(BufReader::new(f))
    };

    // Decompressed size is capped too.
    let mut buf = Vec::new();
    rdr.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Ok(None);
    }
    Ok(Some(buf))
}
