//! The generic [`Table`] contract implemented by table repositories.
//!
//! A repository maps one entity type to one relational table. The trait names
//! the entity, the primary-key type, and the error type as associated types,
//! which keeps this crate free of any particular database driver.
//!
//! Every operation is a single independent request/response against the
//! repository's connection — there is no session or transaction state held
//! across calls.

/// CRUD contract for a repository mapping one entity type to one table.
pub trait Table {
    /// The entity type stored in the table.
    type Entity;
    /// The primary-key type identifying a row.
    type Key;
    /// The error type operations fail with.
    type Error;

    /// Name of the underlying table.
    fn table_name(&self) -> &str;

    /// Create the table with its fixed schema.
    ///
    /// Fails if the table already exists; the existing table is left
    /// untouched in that case.
    fn create_table(&self) -> Result<(), Self::Error>;

    /// Drop the table. Fails if the table does not exist.
    fn drop_table(&self) -> Result<(), Self::Error>;

    /// Look up a single entity by primary key. `Ok(None)` when no row matches.
    fn find_by_primary_key(&self, key: Self::Key) -> Result<Option<Self::Entity>, Self::Error>;

    /// Return every row in the table, in store order.
    fn find_all(&self) -> Result<Vec<Self::Entity>, Self::Error>;

    /// Insert a new entity. Fails on a duplicate primary key, leaving the
    /// original row unmodified.
    fn save(&self, entity: &Self::Entity) -> Result<(), Self::Error>;

    /// Replace the stored row keyed by the entity's primary key.
    ///
    /// Returns `Ok(true)` iff exactly one row was affected — i.e. the key
    /// existed. `Ok(false)` inserts nothing.
    fn update(&self, entity: &Self::Entity) -> Result<bool, Self::Error>;

    /// Delete the row keyed by `key`. Returns `Ok(true)` iff a row was deleted.
    fn delete(&self, key: Self::Key) -> Result<bool, Self::Error>;
}
