//! The assembled result of one generation pass.

use crate::descriptor::{
    ArrayDescriptor, ClassDescriptor, DimDescriptor, DimTriple, GridForwardIterator, GridWrapper,
    MappingDescriptor, MappingDims, PhysSpace, PushForward, RefSpace, TensorShape, ValueContainer,
};
use crate::row::SpaceRow;
use crate::table::SpaceTable;
use crate::unique::unique;
use serde::Serialize;
use std::fmt::Display;

/// Everything derived from one table. Built once by
/// [`derive_all`](crate::derive::derive_all) and read by emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantiationInfo {
    pub tables: SpaceTable,
    pub max_der_order: u32,

    pub ref_dims: Vec<DimTriple>,
    pub user_ref_dims: Vec<DimTriple>,
    pub ref_spaces: Vec<RefSpace>,
    pub user_ref_spaces: Vec<RefSpace>,
    pub user_filtered_ref_spaces: Vec<RefSpace>,
    pub push_forwards: Vec<PushForward>,
    pub phys_spaces: Vec<PhysSpace>,
    pub user_phys_spaces: Vec<PhysSpace>,
    pub ref_dom_dims: Vec<i64>,
    pub user_ref_dom_dims: Vec<i64>,
    pub face_ref_dom_dims: Vec<i64>,

    pub mapping_dims: Vec<MappingDims>,
    pub user_mapping_dims: Vec<MappingDims>,

    pub derivatives: Vec<TensorShape>,
    pub values: Vec<TensorShape>,

    pub tensor_sizes: Vec<DimDescriptor>,
    pub tensor_indices: Vec<DimDescriptor>,
    pub tensor_sized_containers: Vec<DimDescriptor>,
    pub dynamic_multi_arrays: Vec<ArrayDescriptor>,
    pub cartesian_product_arrays: Vec<ArrayDescriptor>,
    pub tensor_product_arrays: Vec<DimDescriptor>,
    pub value_vectors: Vec<ValueContainer>,
    pub value_tables: Vec<ValueContainer>,
    pub cartesian_product_indexers: Vec<DimDescriptor>,

    pub unit_elements: Vec<DimDescriptor>,
    pub multiplicities: Vec<DimDescriptor>,
    pub quadratures: Vec<DimDescriptor>,
    pub cartesian_grids: Vec<DimDescriptor>,
    pub cartesian_grid_elements: Vec<DimDescriptor>,
    pub cartesian_grid_element_accessors: Vec<DimDescriptor>,
    pub grid_wrappers: Vec<GridWrapper>,

    pub mappings: Vec<MappingDescriptor>,
    pub mappings_lib: Vec<ClassDescriptor>,
    pub mapping_element_accessors: Vec<MappingDescriptor>,

    pub grid_forward_iterators: Vec<GridForwardIterator>,
}

/// One named, rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorList {
    pub name: &'static str,
    pub entries: Vec<String>,
}

impl DescriptorList {
    /// Render `items` and dedup the text.
    fn render<T: Display>(name: &'static str, items: &[T]) -> Self {
        Self {
            name,
            entries: unique(items.iter().map(ToString::to_string)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl InstantiationInfo {
    /// Every list, rendered, in derivation order.
    pub fn descriptor_lists(&self) -> Vec<DescriptorList> {
        vec![
            DescriptorList::render("ref_dims", &self.ref_dims),
            DescriptorList::render("user_ref_dims", &self.user_ref_dims),
            DescriptorList::render("ref_spaces", &self.ref_spaces),
            DescriptorList::render("user_ref_spaces", &self.user_ref_spaces),
            DescriptorList::render("user_filtered_ref_spaces", &self.user_filtered_ref_spaces),
            DescriptorList::render("push_forwards", &self.push_forwards),
            DescriptorList::render("phys_spaces", &self.phys_spaces),
            DescriptorList::render("user_phys_spaces", &self.user_phys_spaces),
            DescriptorList::render("ref_dom_dims", &self.ref_dom_dims),
            DescriptorList::render("user_ref_dom_dims", &self.user_ref_dom_dims),
            DescriptorList::render("face_ref_dom_dims", &self.face_ref_dom_dims),
            DescriptorList::render("mapping_dims", &self.mapping_dims),
            DescriptorList::render("user_mapping_dims", &self.user_mapping_dims),
            DescriptorList::render("derivatives", &self.derivatives),
            DescriptorList::render("values", &self.values),
            DescriptorList::render("tensor_sizes", &self.tensor_sizes),
            DescriptorList::render("tensor_indices", &self.tensor_indices),
            DescriptorList::render("tensor_sized_containers", &self.tensor_sized_containers),
            DescriptorList::render("dynamic_multi_arrays", &self.dynamic_multi_arrays),
            DescriptorList::render("cartesian_product_arrays", &self.cartesian_product_arrays),
            DescriptorList::render("tensor_product_arrays", &self.tensor_product_arrays),
            DescriptorList::render("value_vectors", &self.value_vectors),
            DescriptorList::render("value_tables", &self.value_tables),
            DescriptorList::render(
                "cartesian_product_indexers",
                &self.cartesian_product_indexers,
            ),
            DescriptorList::render("unit_elements", &self.unit_elements),
            DescriptorList::render("multiplicities", &self.multiplicities),
            DescriptorList::render("quadratures", &self.quadratures),
            DescriptorList::render("cartesian_grids", &self.cartesian_grids),
            DescriptorList::render("cartesian_grid_elements", &self.cartesian_grid_elements),
            DescriptorList::render(
                "cartesian_grid_element_accessors",
                &self.cartesian_grid_element_accessors,
            ),
            DescriptorList::render("grid_wrappers", &self.grid_wrappers),
            DescriptorList::render("mappings", &self.mappings),
            DescriptorList::render("mappings_lib", &self.mappings_lib),
            DescriptorList::render("mapping_element_accessors", &self.mapping_element_accessors),
            DescriptorList::render("grid_forward_iterators", &self.grid_forward_iterators),
        ]
    }

    /// Rendered list by name.
    pub fn list(&self, name: &str) -> Option<DescriptorList> {
        self.descriptor_lists().into_iter().find(|l| l.name == name)
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            max_der_order: self.max_der_order,
            user_table: self.tables.user_table().to_vec(),
            face_table: self.tables.face_table().to_vec(),
            table: self.tables.table().to_vec(),
            lists: self.descriptor_lists(),
        }
    }
}

/// Serializable snapshot of a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub max_der_order: u32,
    pub user_table: Vec<SpaceRow>,
    pub face_table: Vec<SpaceRow>,
    pub table: Vec<SpaceRow>,
    pub lists: Vec<DescriptorList>,
}
