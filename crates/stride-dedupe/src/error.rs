use thiserror::Error;

use stride_core::store::StoreError;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("group has fewer than two member identities")]
    GroupTooSmall,

    #[error("chosen primary identity is not a member of the group")]
    PrimaryNotInGroup,

    #[error(transparent)]
    Store(#[from] StoreError),
}
