//! Terminal predicates over image plane metadata, and the registry an
//! expression compiler uses to look them up by symbol.

pub mod color;
pub mod monochrome;
pub mod registry;
pub mod stack;
pub mod traits;

pub use color::IsColorPredicate;
pub use monochrome::IsMonochromePredicate;
pub use registry::{PredicateRegistry, RegistryError};
pub use stack::IsStackPredicate;
pub use traits::FilterPredicate;
