//! # HATEOAS Siren
//!
//! > **A bidirectional codec between hypermedia resource models and Siren JSON.**
//!
//! Application code describes a resource as a model with links, and links carry affordances
//! (the state transitions a client may perform). This crate turns such models into
//! [Siren](https://github.com/kevinswiber/siren) documents (`application/vnd.siren+json`) and
//! reads Siren documents back into models.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Links for navigation, actions for transitions
//!
//! Siren separates *where you can go* from *what you can do*:
//! - Every link becomes a Siren link.
//! - Every non-GET affordance becomes a Siren action with typed input fields.
//! - GET affordances stay implicit in their link.
//! - Templated links are either published as actions with one field per variable, or kept as
//!   plain links. [`SirenConfiguration`](siren::SirenConfiguration) picks which.
//!
//! ### Policy is injected
//!
//! Titles come from a [`MessageResolver`](siren::MessageResolver), entity classes from an
//! [`EntityClassProvider`](siren::EntityClassProvider). Nothing human-readable is hardcoded.
//!
//! ### Shapes are checked
//!
//! Collection members must be entity models. The [`Embeddable`](siren::Embeddable) trait
//! dispatches on the element type and rejects anything else with
//! [`SirenError::InvalidElementShape`](siren::SirenError::InvalidElementShape).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Resource Graph ([`model`])
//! - **Role**: Links, URI templates, affordances and the four model shapes.
//! - **Key items**: [`Link`](model::Link), [`EntityModel`](model::EntityModel),
//!   [`CollectionModel`](model::CollectionModel), [`PagedModel`](model::PagedModel).
//!
//! ### 2. The Codec ([`siren`])
//! - **Role**: Siren wire types, the converters and the mapper that ties them together.
//! - **Key items**: [`SirenMapper`](siren::SirenMapper),
//!   [`SirenLinkDiscoverer`](siren::SirenLinkDiscoverer).
//!
//! ### 3. The Store ([`store`])
//! - **Role**: A generic in-memory resource store running as an actor.
//! - **Key items**: [`ResourceStore`](store::ResourceStore), [`StoreClient`](store::StoreClient).
//!
//! ### 4. The Sample ([`person`], [`lifecycle`])
//! - **Role**: A person resource assembled into models and served as Siren.
//! - **Key items**: [`PersonModelAssembler`](person::PersonModelAssembler),
//!   [`PersonSystem`](lifecycle::PersonSystem).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod lifecycle;
pub mod model;
pub mod person;
pub mod siren;
pub mod store;
