//! The derivation pipeline.
//!
//! Each deriver is a pure function of the row tables and earlier outputs.
//! [`derive_all`] runs them in dependency order:
//!
//! ```text
//! SpaceTable
//!     │
//! ref dims / ref spaces / push-forwards / phys spaces
//!     │
//! mapping dims
//!     │
//! tensor shapes          ← template substitution
//!     │
//! containers on shapes
//!     │
//! grid, element and accessor classes
//!     │
//! forward iterators      ← grid + mapping accessors
//! ```

pub mod containers;
pub mod grid;
pub mod mapping;
pub mod shapes;
pub mod spaces;

use crate::descriptor::{DimClass, DimDescriptor};
use crate::info::InstantiationInfo;
use crate::row::SpaceRow;
use crate::settings::GeneratorSettings;
use crate::table::SpaceTable;
use crate::unique::unique;

/// Whether a `Class<d+1>` entry accompanies each `Class<d>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Companion {
    None,
    NextDim,
}

pub(crate) fn per_dimension(
    class: DimClass,
    rows: &[SpaceRow],
    companion: Companion,
) -> Vec<DimDescriptor> {
    unique(rows.iter().flat_map(|row| {
        let next = (companion == Companion::NextDim).then_some(row.dim_ref.saturating_add(1));
        std::iter::once(row.dim_ref)
            .chain(next)
            .map(move |dim| DimDescriptor::new(class, dim))
    }))
}

/// Run every deriver over `tables`.
pub fn derive_all(
    tables: SpaceTable,
    max_der_order: u32,
    settings: &GeneratorSettings,
) -> InstantiationInfo {
    let table = tables.table();
    let user = tables.user_table();
    let families = &settings.space_families;

    tracing::debug!(
        user_rows = user.len(),
        face_rows = tables.face_table().len(),
        max_der_order,
        "deriving instantiation lists"
    );

    let ref_dims = spaces::ref_dims(table);
    let user_ref_dims = spaces::ref_dims(user);
    let ref_spaces = spaces::ref_spaces(families, &ref_dims);
    let user_ref_spaces = spaces::ref_spaces(families, &user_ref_dims);
    let user_filtered_ref_spaces = spaces::ref_spaces(families, &spaces::filtered_ref_dims(user));
    let push_forwards = spaces::push_forwards(table);
    let phys_spaces = spaces::phys_spaces(families, table);
    let user_phys_spaces = spaces::phys_spaces(families, user);
    let ref_dom_dims = spaces::ref_dom_dims(table);
    let user_ref_dom_dims = spaces::ref_dom_dims(user);
    let face_ref_dom_dims = spaces::ref_dom_dims(tables.face_table());
    tracing::debug!(
        ref_dims = ref_dims.len(),
        phys_spaces = phys_spaces.len(),
        "derived reference spaces"
    );

    let mapping_dims = mapping::mapping_dims(table);
    let user_mapping_dims = mapping::embedding_dims(user);
    tracing::debug!(mapping_dims = mapping_dims.len(), "derived mapping dims");

    let triples = shapes::shape_triples(table);
    let shapes::TensorShapes {
        derivatives,
        values,
    } = shapes::tensor_shapes(&triples, max_der_order, &settings.templates);
    tracing::debug!(
        triples = triples.len(),
        derivatives = derivatives.len(),
        values = values.len(),
        "derived tensor shapes"
    );

    let tensor_sizes = containers::tensor_sizes(table);
    let tensor_indices = containers::tensor_indices(table);
    let tensor_sized_containers = containers::tensor_sized_containers(table);
    let dynamic_multi_arrays = containers::dynamic_multi_arrays(table, &derivatives);
    let cartesian_product_arrays = containers::cartesian_product_arrays(table);
    let tensor_product_arrays = containers::tensor_product_arrays(table);
    let value_vectors = containers::value_vectors(&derivatives, &values);
    let value_tables = containers::value_tables(&derivatives, &values);
    let cartesian_product_indexers = containers::cartesian_product_indexers(table);

    let unit_elements = grid::unit_elements(table);
    let multiplicities = grid::multiplicities(table);
    let quadratures = grid::quadratures(table);
    let cartesian_grids = grid::cartesian_grids(table);
    let cartesian_grid_elements = grid::cartesian_grid_elements(table);
    let cartesian_grid_element_accessors = grid::cartesian_grid_element_accessors(table);
    let grid_wrappers = grid::grid_wrappers(&cartesian_grids);

    let mappings = mapping::mappings(&mapping_dims);
    let mappings_lib = mapping::mappings_lib(&user_mapping_dims, &user_ref_dom_dims);
    let mapping_element_accessors = mapping::mapping_element_accessors(&mapping_dims);

    let grid_forward_iterators =
        grid::grid_forward_iterators(&cartesian_grid_element_accessors, &mapping_element_accessors);

    InstantiationInfo {
        tables,
        max_der_order,
        ref_dims,
        user_ref_dims,
        ref_spaces,
        user_ref_spaces,
        user_filtered_ref_spaces,
        push_forwards,
        phys_spaces,
        user_phys_spaces,
        ref_dom_dims,
        user_ref_dom_dims,
        face_ref_dom_dims,
        mapping_dims,
        user_mapping_dims,
        derivatives,
        values,
        tensor_sizes,
        tensor_indices,
        tensor_sized_containers,
        dynamic_multi_arrays,
        cartesian_product_arrays,
        tensor_product_arrays,
        value_vectors,
        value_tables,
        cartesian_product_indexers,
        unit_elements,
        multiplicities,
        quadratures,
        cartesian_grids,
        cartesian_grid_elements,
        cartesian_grid_element_accessors,
        grid_wrappers,
        mappings,
        mappings_lib,
        mapping_element_accessors,
        grid_forward_iterators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Transformation::HGrad;

    #[test]
    fn companion_adds_next_dimension() {
        let rows = [SpaceRow::new(2, 1, 1, 2, HGrad), SpaceRow::new(3, 1, 1, 3, HGrad)];
        let plain = per_dimension(DimClass::UnitElement, &rows, Companion::None);
        let with_next = per_dimension(DimClass::TensorSize, &rows, Companion::NextDim);
        assert_eq!(plain.iter().map(|d| d.dim).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(with_next.iter().map(|d| d.dim).collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
