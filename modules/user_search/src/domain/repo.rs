use crate::contract::model::UserRecord;

/// Port for the domain layer: the read-only record set a search runs over.
/// Implementations must hand out the same records for the life of the value.
pub trait UserRecords: Send + Sync {
    fn records(&self) -> &[UserRecord];
}
