//! # instmeta kernel
//!
//! Expands a table of physical spaces into the lists of class descriptors a
//! statically compiled library must explicitly instantiate.
//!
//! ## Architecture
//!
//! ```text
//! SpaceRow              ← (dim_ref, range_ref, rank_ref, dim_phys, trans_type)
//!     │
//! SpaceTable            ← user rows + face rows (dim_ref - 1)
//!     │
//! derive::*             ← pure derivers, each deduplicated by `unique`
//!     │                    tensor shapes bound through `Template`
//! InstantiationInfo     ← immutable result, rendered by `descriptor_lists`
//! ```
//!
//! Descriptors keep their integer fields until the end; text only appears
//! when a list is rendered.

pub mod derive;
pub mod descriptor;
pub mod error;
pub mod info;
pub mod row;
pub mod settings;
pub mod table;
pub mod template;
pub mod unique;

pub use derive::derive_all;
pub use descriptor::{DimTriple, MappingDims, TensorShape};
pub use error::SettingsError;
pub use info::{DescriptorList, InstantiationInfo, Manifest};
pub use row::{MAX_ROW_VALUE, SpaceRow, Transformation};
pub use settings::{GeneratorSettings, MAX_DER_ORDER, ShapeTemplates};
pub use table::SpaceTable;
pub use template::{Placeholder, ShapeBindings, Template};
pub use unique::unique;
