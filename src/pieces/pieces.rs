use crate::pieces::errors::AssemblyError;
use crate::pieces::structs::piece::Piece;

/// Default piece length, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Number of pieces a stream of `len` bytes splits into.
pub fn piece_count(len: u64, chunk_size: u64) -> u64
{
    if chunk_size == 0 {
        return 0;
    }
    len.div_ceil(chunk_size)
}

pub fn split(data: &[u8], chunk_size: usize) -> Result<Vec<Piece>, AssemblyError>
{
    if chunk_size == 0 {
        return Err(AssemblyError::InvalidChunkSize);
    }
    Ok(data.chunks(chunk_size)
        .enumerate()
        .map(|(ordinal, chunk)| Piece::new(ordinal as u64, chunk.to_vec()))
        .collect())
}

/// Concatenates pieces by ascending ordinal. Input order does not matter,
/// but the ordinals must cover `0..=max` exactly once.
pub fn reassemble(mut pieces: Vec<Piece>) -> Result<Vec<u8>, AssemblyError>
{
    pieces.sort_by_key(|piece| piece.ordinal);

    let mut expected = 0u64;
    for piece in &pieces {
        if piece.ordinal < expected {
            return Err(AssemblyError::DuplicatePiece(piece.ordinal));
        }
        if piece.ordinal > expected {
            return Err(AssemblyError::MissingPiece(expected));
        }
        expected += 1;
    }

    let size = pieces.iter().map(|piece| piece.data.len()).sum();
    let mut output = Vec::with_capacity(size);
    for piece in pieces {
        output.extend_from_slice(&piece.data);
    }
    Ok(output)
}

/// Like [`reassemble`], but every ordinal in `0..total` must be present, so a
/// missing tail is reported instead of producing a truncated file.
pub fn reassemble_expected(pieces: Vec<Piece>, total: u64) -> Result<Vec<u8>, AssemblyError>
{
    if let Some(piece) = pieces.iter().find(|piece| piece.ordinal >= total) {
        return Err(AssemblyError::UnexpectedPiece { ordinal: piece.ordinal, total });
    }
    let present = pieces.len() as u64;
    let output = reassemble(pieces)?;
    if present < total {
        return Err(AssemblyError::MissingPiece(present));
    }
    Ok(output)
}
