//! Entity traits: identity plus the key used by side tables.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + Into<u32>;

    /// Name under which side tables (localized properties, ACL records, store
    /// mappings, URL records) reference this entity type.
    const ENTITY_NAME: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Raw identifier as stored in side tables.
    fn raw_id(&self) -> u32 {
        self.id().into()
    }
}
