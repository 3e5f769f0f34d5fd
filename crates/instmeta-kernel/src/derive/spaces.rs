//! Reference spaces, push-forwards, and physical spaces.

use crate::descriptor::{DimTriple, MappingDims, PhysSpace, PushForward, RefSpace};
use crate::row::{SpaceRow, Transformation};
use crate::unique::unique;

/// Push-forwards are instantiated for this transformation only.
pub const PUSH_FORWARD_TRANSFORMATION: Transformation = Transformation::HGrad;

/// `<dim_ref,range_ref,rank_ref>` of every row.
pub fn ref_dims(rows: &[SpaceRow]) -> Vec<DimTriple> {
    unique(rows.iter().map(ref_triple))
}

/// Reference dims of rows that can serve as a mapping geometry
/// (`dim_ref >= range_ref`).
pub fn filtered_ref_dims(rows: &[SpaceRow]) -> Vec<DimTriple> {
    unique(
        rows.iter()
            .filter(|row| row.dim_ref >= row.range_ref)
            .map(ref_triple),
    )
}

/// Every family crossed with every dims entry, family-major.
pub fn ref_spaces(families: &[String], dims: &[DimTriple]) -> Vec<RefSpace> {
    unique(families.iter().flat_map(|family| {
        dims.iter().map(move |dims| RefSpace {
            family: family.clone(),
            dims: *dims,
        })
    }))
}

/// One push-forward per row codimension, then the zero-codimension one for
/// every reference dimension.
pub fn push_forwards(rows: &[SpaceRow]) -> Vec<PushForward> {
    let embedded = rows.iter().map(|row| MappingDims::new(row.dim_ref, row.codim()));
    let flat = rows.iter().map(|row| MappingDims::new(row.dim_ref, 0));
    unique(embedded.chain(flat).map(push_forward))
}

/// Every family crossed with every row, family-major.
pub fn phys_spaces(families: &[String], rows: &[SpaceRow]) -> Vec<PhysSpace> {
    unique(families.iter().flat_map(|family| {
        rows.iter().map(move |row| PhysSpace {
            space: RefSpace {
                family: family.clone(),
                dims: ref_triple(row),
            },
            push_forward: push_forward(MappingDims::new(row.dim_ref, row.codim())),
        })
    }))
}

/// Distinct reference-domain dimensions.
pub fn ref_dom_dims(rows: &[SpaceRow]) -> Vec<i64> {
    unique(rows.iter().map(|row| row.dim_ref))
}

fn ref_triple(row: &SpaceRow) -> DimTriple {
    DimTriple::new(row.dim_ref, row.range_ref, row.rank_ref)
}

fn push_forward(dims: MappingDims) -> PushForward {
    PushForward {
        transformation: PUSH_FORWARD_TRANSFORMATION,
        dims,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Transformation::{HDiv, HGrad};

    fn families() -> Vec<String> {
        vec!["BSplineSpace".to_string(), "NURBSSpace".to_string()]
    }

    fn rendered<T: ToString>(items: &[T]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn ref_dims_dedup_in_row_order() {
        let rows = [
            SpaceRow::new(2, 1, 1, 2, HGrad),
            SpaceRow::new(2, 1, 1, 3, HGrad),
            SpaceRow::new(1, 1, 1, 2, HGrad),
        ];
        assert_eq!(rendered(&ref_dims(&rows)), vec!["<2,1,1>", "<1,1,1>"]);
    }

    #[test]
    fn filtered_dims_skip_wide_ranges() {
        let rows = [
            SpaceRow::new(2, 3, 1, 3, HDiv),
            SpaceRow::new(2, 2, 1, 2, HGrad),
        ];
        assert_eq!(rendered(&filtered_ref_dims(&rows)), vec!["<2,2,1>"]);
    }

    #[test]
    fn ref_spaces_are_family_major() {
        let dims = [DimTriple::new(2, 1, 1), DimTriple::new(1, 1, 1)];
        assert_eq!(
            rendered(&ref_spaces(&families(), &dims)),
            vec![
                "BSplineSpace<2,1,1>",
                "BSplineSpace<1,1,1>",
                "NURBSSpace<2,1,1>",
                "NURBSSpace<1,1,1>",
            ]
        );
    }

    #[test]
    fn push_forwards_always_include_flat_mapping() {
        let rows = [SpaceRow::new(2, 1, 1, 3, HGrad)];
        assert_eq!(
            rendered(&push_forwards(&rows)),
            vec![
                "PushForward<Transformation::h_grad, 2,1>",
                "PushForward<Transformation::h_grad, 2,0>",
            ]
        );
    }

    #[test]
    fn phys_spaces_cross_families_and_rows() {
        let rows = [SpaceRow::new(1, 1, 1, 2, HGrad)];
        assert_eq!(
            rendered(&phys_spaces(&families(), &rows)),
            vec![
                "PhysicalSpace <BSplineSpace<1,1,1>, PushForward<Transformation::h_grad, 1,1> >",
                "PhysicalSpace <NURBSSpace<1,1,1>, PushForward<Transformation::h_grad, 1,1> >",
            ]
        );
    }

    #[test]
    fn ref_dom_dims_are_distinct() {
        let rows = [
            SpaceRow::new(3, 1, 1, 3, HGrad),
            SpaceRow::new(2, 1, 1, 3, HGrad),
            SpaceRow::new(3, 3, 1, 3, HGrad),
        ];
        assert_eq!(ref_dom_dims(&rows), vec![3, 2]);
    }
}
