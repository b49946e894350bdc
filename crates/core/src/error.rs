/// Errors returned by [`GameState`](crate::GameState) faller operations.
///
/// All of these are expected signals for the driver's control flow. A failed
/// operation never leaves the board or the faller partially updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("shift is blocked or out of bounds")]
    InvalidMove,

    #[error("faller has already landed; freeze it instead")]
    AlreadyLanded,

    #[error("faller has not landed yet")]
    NotLanded,

    #[error("faller is frozen")]
    Frozen,

    #[error("no active faller")]
    NoFaller,
}
