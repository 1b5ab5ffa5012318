//! The hypermedia resource graph: links, affordances and the models that carry them.
//!
//! Nothing in here knows about Siren; the [`siren`](crate::siren) module translates these
//! types to and from the wire format.

pub mod affordance;
pub mod link;
pub mod representation;
pub mod template;

pub use affordance::*;
pub use link::*;
pub use representation::*;
pub use template::*;
