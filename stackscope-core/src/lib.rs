//! Stackscope Core - Catalog and Error Types
//!
//! The fixed content catalog (architecture layers, resource groups, default
//! value cards) and the shared error taxonomy. All other crates depend on
//! this. This crate contains only data - no I/O, no rendering.

mod error;
mod layer;
mod resource;
mod value;

pub use error::{GenError, NavError, ParseStage, TransientError};
pub use layer::{layers, Layer, LayerId};
pub use resource::{resource_groups, ResourceGroup, ResourceId, ResourceLink};
pub use value::ValueCard;
