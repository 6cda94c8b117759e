//! Schema migrations for the essay store.
//!
//! Every migration creates its objects with `IF NOT EXISTS`, so running the
//! full [`Migrator`] on each startup is idempotent.

pub mod migrations;
mod migrator;

pub use migrator::Migrator;
pub use sea_orm_migration::MigratorTrait;
