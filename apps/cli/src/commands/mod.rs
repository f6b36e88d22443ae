pub mod facts;
pub mod schema;
pub mod select;
pub mod validate;

pub use facts::FactsCommand;
pub use schema::SchemaCommand;
pub use select::SelectCommand;
pub use validate::ValidateCommand;
