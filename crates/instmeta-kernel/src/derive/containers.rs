//! Tensor bookkeeping and container classes.
//!
//! Most of these are one `Class<d>` per row reference dimension, some with
//! a `Class<d+1>` companion for structures living one dimension higher.

use super::{Companion, per_dimension};
use crate::descriptor::{
    ArrayClass, ArrayDescriptor, DimClass, DimDescriptor, Element, TensorShape, ValueClass,
    ValueContainer,
};
use crate::row::SpaceRow;
use crate::unique::unique;

pub fn tensor_sizes(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::TensorSize, rows, Companion::NextDim)
}

pub fn tensor_indices(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::TensorIndex, rows, Companion::NextDim)
}

pub fn tensor_sized_containers(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::TensorSizedContainer, rows, Companion::NextDim)
}

pub fn tensor_product_arrays(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::TensorProductArray, rows, Companion::None)
}

pub fn cartesian_product_indexers(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::CartesianProductIndexer, rows, Companion::None)
}

/// Index, real, and tensor-index arrays per row, then a rank-2 array of
/// every derivative shape.
pub fn dynamic_multi_arrays(rows: &[SpaceRow], derivatives: &[TensorShape]) -> Vec<ArrayDescriptor> {
    let array = |element, rank| ArrayDescriptor::new(ArrayClass::DynamicMultiArray, element, rank);
    let per_row = rows.iter().flat_map(|row| {
        let dim = row.dim_ref;
        [
            array(Element::TensorIndex(dim), dim),
            array(Element::Real, dim),
            array(Element::Index, dim),
        ]
    });
    let per_shape = derivatives
        .iter()
        .map(|shape| array(Element::Shape(shape.clone()), 2));
    unique(per_row.chain(per_shape))
}

/// Real arrays at `d` and `d+1` per row, then `Real*` arrays for every
/// row, then `Index` arrays for every row.
pub fn cartesian_product_arrays(rows: &[SpaceRow]) -> Vec<ArrayDescriptor> {
    let array =
        |element, dim| ArrayDescriptor::new(ArrayClass::CartesianProductArray, element, dim);
    let real = rows.iter().flat_map(|row| {
        [
            array(Element::Real, row.dim_ref),
            array(Element::Real, row.dim_ref.saturating_add(1)),
        ]
    });
    let pointers = rows.iter().map(|row| array(Element::RealPtr, row.dim_ref));
    let indices = rows.iter().map(|row| array(Element::Index, row.dim_ref));
    unique(real.chain(pointers).chain(indices))
}

/// `ValueVector<Real>`, then one per derivative shape and per value shape.
pub fn value_vectors(derivatives: &[TensorShape], values: &[TensorShape]) -> Vec<ValueContainer> {
    let real = ValueContainer::new(ValueClass::ValueVector, Element::Real);
    unique(std::iter::once(real).chain(over_shapes(ValueClass::ValueVector, derivatives, values)))
}

pub fn value_tables(derivatives: &[TensorShape], values: &[TensorShape]) -> Vec<ValueContainer> {
    unique(over_shapes(ValueClass::ValueTable, derivatives, values))
}

fn over_shapes<'a>(
    class: ValueClass,
    derivatives: &'a [TensorShape],
    values: &'a [TensorShape],
) -> impl Iterator<Item = ValueContainer> + 'a {
    derivatives
        .iter()
        .chain(values)
        .map(move |shape| ValueContainer::new(class, Element::Shape(shape.clone())))
}
