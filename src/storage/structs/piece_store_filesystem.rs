use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PieceStoreFilesystem {
    pub(crate) root: PathBuf,
}
