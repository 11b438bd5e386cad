use std::io::{ErrorKind, Read};
use std::path::Path;
use sha1::{Digest, Sha1};
use tokio::io::AsyncReadExt;
use crate::content::structs::content_id::ContentId;

/// Default read window for hashing, in bytes.
pub const DEFAULT_HASH_WINDOW: usize = 8192;

pub const MAGNET_PREFIX: &str = "magnet:?xt=urn:btih:";

/// Hashes everything `reader` yields, `window` bytes at a time.
pub fn hash_reader<R: Read>(mut reader: R, window: usize) -> std::io::Result<ContentId>
{
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; window.max(1)];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => hasher.update(&buffer[..read]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(finish(hasher))
}

#[tracing::instrument(level = "debug")]
pub async fn hash_file(path: &Path, window: usize) -> std::io::Result<ContentId>
{
    let mut file = tokio::fs::File::open(path).await?;
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; window.max(1)];
    loop {
        let read = file.read(&mut buffer).await?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(finish(hasher))
}

pub fn hash_bytes(data: &[u8]) -> ContentId
{
    let mut hasher = Sha1::new();
    hasher.update(data);
    finish(hasher)
}

/// Informational descriptor for out-of-band sharing. Never parsed by the tracker.
pub fn magnet_link(content_id: &ContentId) -> String
{
    format!("{MAGNET_PREFIX}{content_id}")
}

fn finish(hasher: Sha1) -> ContentId
{
    let digest = hasher.finalize();
    let mut result = ContentId([0u8; 20]);
    result.0.copy_from_slice(&digest);
    result
}
