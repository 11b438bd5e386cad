#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub ordinal: u64,
    pub data: Vec<u8>,
}

impl Piece {
    pub fn new(ordinal: u64, data: Vec<u8>) -> Piece {
        Piece { ordinal, data }
    }
}
