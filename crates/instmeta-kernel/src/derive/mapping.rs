//! Mapping dimensions and the mapping classes built on them.

use crate::descriptor::{
    ClassDescriptor, DimClass, DimDescriptor, MappingClass, MappingDescriptor, MappingDims,
};
use crate::row::SpaceRow;
use crate::unique::unique;

/// `<dim_ref, codim>` of every row.
pub fn embedding_dims(rows: &[SpaceRow]) -> Vec<MappingDims> {
    unique(rows.iter().map(|row| MappingDims::new(row.dim_ref, row.codim())))
}

/// Embedding dims followed by `<dim_ref, 0>` for every row.
///
/// Every reference dimension gets a zero-codimension mapping whether or not
/// a row asks for one.
pub fn mapping_dims(rows: &[SpaceRow]) -> Vec<MappingDims> {
    let flat = unique(rows.iter().map(|row| MappingDims::new(row.dim_ref, 0)));
    unique(embedding_dims(rows).into_iter().chain(flat))
}

pub fn mappings(dims: &[MappingDims]) -> Vec<MappingDescriptor> {
    with_class(MappingClass::Mapping, dims)
}

pub fn mapping_element_accessors(dims: &[MappingDims]) -> Vec<MappingDescriptor> {
    with_class(MappingClass::MappingElementAccessor, dims)
}

/// Library mapping specializations: a linear mapping per user embedding,
/// then a ball per user reference dimension and a sphere one dimension
/// lower when that is positive.
pub fn mappings_lib(user_dims: &[MappingDims], user_ref_dom_dims: &[i64]) -> Vec<ClassDescriptor> {
    let linear = user_dims.iter().map(|dims| {
        ClassDescriptor::from(MappingDescriptor::new(MappingClass::LinearMapping, *dims))
    });
    let curved = user_ref_dom_dims.iter().flat_map(|&dim| {
        let ball = DimDescriptor::new(DimClass::BallMapping, dim);
        let sphere = (dim > 1).then(|| DimDescriptor::new(DimClass::SphereMapping, dim - 1));
        std::iter::once(ball).chain(sphere).map(ClassDescriptor::from)
    });
    unique(linear.chain(curved))
}

fn with_class(class: MappingClass, dims: &[MappingDims]) -> Vec<MappingDescriptor> {
    unique(dims.iter().map(|dims| MappingDescriptor::new(class, *dims)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Transformation::HGrad;

    fn rendered<T: ToString>(items: &[T]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn flat_row_yields_single_zero_codim_entry() {
        let rows = [SpaceRow::new(2, 2, 1, 2, HGrad)];
        assert_eq!(rendered(&mapping_dims(&rows)), vec!["<2,0>"]);
    }

    #[test]
    fn embedded_row_yields_codim_then_zero() {
        let rows = [SpaceRow::new(2, 2, 1, 3, HGrad)];
        assert_eq!(rendered(&mapping_dims(&rows)), vec!["<2,1>", "<2,0>"]);
    }

    #[test]
    fn all_embeddings_precede_flat_mappings() {
        let rows = [
            SpaceRow::new(2, 1, 1, 3, HGrad),
            SpaceRow::new(1, 1, 1, 3, HGrad),
        ];
        assert_eq!(
            rendered(&mapping_dims(&rows)),
            vec!["<2,1>", "<1,2>", "<2,0>", "<1,0>"]
        );
        assert_eq!(rendered(&embedding_dims(&rows)), vec!["<2,1>", "<1,2>"]);
    }

    #[test]
    fn mapping_lib_balls_and_spheres() {
        let lib = mappings_lib(&[MappingDims::new(2, 1)], &[2, 1]);
        assert_eq!(
            rendered(&lib),
            vec![
                "LinearMapping<2,1>",
                "BallMapping<2>",
                "SphereMapping<1>",
                "BallMapping<1>",
            ]
        );
    }

    #[test]
    fn accessors_follow_mapping_dims() {
        let dims = [MappingDims::new(3, 0), MappingDims::new(2, 1)];
        assert_eq!(rendered(&mappings(&dims)), vec!["Mapping<3,0>", "Mapping<2,1>"]);
        assert_eq!(
            rendered(&mapping_element_accessors(&dims)),
            vec!["MappingElementAccessor<3,0>", "MappingElementAccessor<2,1>"]
        );
    }
}
