use super::AggregateId;

/// An entity that carries its own identifier.
///
/// Resource stores use this to find the entry an update or delete refers to.
pub trait Entity {
    type Id: AggregateId;

    fn entity_id(&self) -> Self::Id;
}
