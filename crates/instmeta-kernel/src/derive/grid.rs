//! Grid, element, and iterator classes.

use super::{Companion, per_dimension};
use crate::descriptor::{
    ClassDescriptor, DimClass, DimDescriptor, GridForwardIterator, GridWrapper, MappingDescriptor,
};
use crate::row::SpaceRow;
use crate::unique::unique;

pub fn unit_elements(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::UnitElement, rows, Companion::None)
}

pub fn multiplicities(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::Multiplicity, rows, Companion::None)
}

pub fn quadratures(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::Quadrature, rows, Companion::None)
}

pub fn cartesian_grids(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::CartesianGrid, rows, Companion::None)
}

pub fn cartesian_grid_elements(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::CartesianGridElement, rows, Companion::None)
}

pub fn cartesian_grid_element_accessors(rows: &[SpaceRow]) -> Vec<DimDescriptor> {
    per_dimension(DimClass::CartesianGridElementAccessor, rows, Companion::None)
}

pub fn grid_wrappers(grids: &[DimDescriptor]) -> Vec<GridWrapper> {
    unique(grids.iter().copied().map(GridWrapper))
}

/// One iterator per grid-element accessor, then per mapping-element
/// accessor.
pub fn grid_forward_iterators(
    grid_accessors: &[DimDescriptor],
    mapping_accessors: &[MappingDescriptor],
) -> Vec<GridForwardIterator> {
    let grid = grid_accessors.iter().copied().map(ClassDescriptor::from);
    let mapping = mapping_accessors.iter().copied().map(ClassDescriptor::from);
    unique(grid.chain(mapping).map(GridForwardIterator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{MappingClass, MappingDims};
    use crate::row::Transformation::HGrad;

    fn rendered<T: ToString>(items: &[T]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn one_grid_per_reference_dimension() {
        let rows = [
            SpaceRow::new(2, 1, 1, 2, HGrad),
            SpaceRow::new(2, 2, 1, 2, HGrad),
            SpaceRow::new(1, 1, 1, 2, HGrad),
        ];
        let grids = cartesian_grids(&rows);
        assert_eq!(rendered(&grids), vec!["CartesianGrid<2>", "CartesianGrid<1>"]);
        assert_eq!(
            rendered(&grid_wrappers(&grids)),
            vec!["GridWrapper<CartesianGrid<2>>", "GridWrapper<CartesianGrid<1>>"]
        );
        assert_eq!(rendered(&quadratures(&rows)), vec!["Quadrature<2>", "Quadrature<1>"]);
    }

    #[test]
    fn iterators_cover_both_accessor_kinds() {
        let rows = [SpaceRow::new(2, 1, 1, 2, HGrad)];
        let grid_accessors = cartesian_grid_element_accessors(&rows);
        let mapping_accessors = [MappingDescriptor::new(
            MappingClass::MappingElementAccessor,
            MappingDims::new(2, 0),
        )];
        assert_eq!(
            rendered(&grid_forward_iterators(&grid_accessors, &mapping_accessors)),
            vec![
                "GridForwardIterator<CartesianGridElementAccessor<2>>",
                "GridForwardIterator<MappingElementAccessor<2,0>>",
            ]
        );
    }
}
