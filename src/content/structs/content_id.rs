//! Content identifier.

/// A 20-byte SHA-1 digest of a complete file.
///
/// Identical bytes always produce the same identifier regardless of the file
/// name. Once computed it is never mutated; it keys every swarm and piece
/// operation.
///
/// # Example
///
/// ```rust
/// use swarm_tracker::content::structs::content_id::ContentId;
///
/// let content_id: ContentId = "a9993e364706816aba3e25717850c26c9cd0d89d".parse().unwrap();
/// assert_eq!(content_id.0[0], 0xa9);
/// ```
///
/// # Serialization
///
/// On the wire and on disk the identifier is a 40-character lowercase
/// hexadecimal string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ContentId(pub [u8; 20]);
