pub mod essay;

pub use essay::Entity as Essay;
