#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaybeError {
    #[error("expected Just, found Nothing")]
    Nothing,
}
