//! Derivative and value tensor shapes.
//!
//! For every derivative order `0..=max_der_order` and every distinct
//! `(dim, range, rank)` triple of the table, one derivative shape and one
//! value shape are bound from the templates. Each row contributes two
//! triples: its reference triple and its physical triple.

use crate::descriptor::{DimTriple, TensorShape};
use crate::row::SpaceRow;
use crate::settings::ShapeTemplates;
use crate::template::ShapeBindings;
use crate::unique::unique;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TensorShapes {
    pub derivatives: Vec<TensorShape>,
    pub values: Vec<TensorShape>,
}

/// Reference then physical triple for every row.
pub fn shape_triples(rows: &[SpaceRow]) -> Vec<DimTriple> {
    unique(rows.iter().flat_map(|row| {
        [
            DimTriple::new(row.dim_ref, row.range_ref, row.rank_ref),
            DimTriple::new(row.dim_phys, row.physical_range(), row.rank_ref),
        ]
    }))
}

/// Bindings for one `(order, triple)` pair. The zeroth derivative is a
/// `dim=1, order=1` tensor whatever the triple's dimension.
pub fn bindings_for(order: u32, triple: DimTriple) -> ShapeBindings {
    let (dim, order) = if order == 0 {
        (1, 1)
    } else {
        (triple.dim, i64::from(order))
    };
    ShapeBindings {
        order,
        dim,
        range: triple.range,
        rank: triple.rank,
    }
}

pub fn tensor_shapes(
    triples: &[DimTriple],
    max_der_order: u32,
    templates: &ShapeTemplates,
) -> TensorShapes {
    let derivative = Arc::new(templates.derivative.clone());
    let value = Arc::new(templates.value.clone());

    let bindings = move || {
        (0..=max_der_order)
            .flat_map(move |order| {
                triples.iter().map(move |triple| bindings_for(order, *triple))
            })
    };

    TensorShapes {
        derivatives: unique(bindings().map(|b| TensorShape::bind(&derivative, &b))),
        values: unique(bindings().map(|b| TensorShape::bind(&value, &b))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Transformation::{HDiv, HGrad};
    use crate::settings::MAX_DER_ORDER;

    fn rendered(items: &[TensorShape]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn physical_triple_uses_transformation_range() {
        let rows = [
            SpaceRow::new(2, 1, 1, 3, HGrad),
            SpaceRow::new(2, 2, 1, 3, HDiv),
        ];
        assert_eq!(
            shape_triples(&rows),
            vec![
                DimTriple::new(2, 1, 1),
                DimTriple::new(3, 1, 1),
                DimTriple::new(2, 2, 1),
                DimTriple::new(3, 3, 1),
            ]
        );
    }

    #[test]
    fn zeroth_order_collapses_every_triple() {
        for dim in [1, 2, 3] {
            let bindings = bindings_for(0, DimTriple::new(dim, 2, 1));
            assert_eq!((bindings.dim, bindings.order), (1, 1));
            assert_eq!((bindings.range, bindings.rank), (2, 1));
        }
        let bindings = bindings_for(2, DimTriple::new(3, 2, 1));
        assert_eq!((bindings.dim, bindings.order), (3, 2));
    }

    #[test]
    fn shapes_over_orders_and_triples() {
        let triples = [DimTriple::new(2, 1, 1), DimTriple::new(3, 1, 1)];
        let shapes = tensor_shapes(&triples, 1, &ShapeTemplates::default());
        assert_eq!(
            rendered(&shapes.derivatives),
            vec![
                "Tensor<1, 1, tensor::covariant, Tensor<1, 1, tensor::contravariant, Tdouble>>",
                "Tensor<2, 1, tensor::covariant, Tensor<1, 1, tensor::contravariant, Tdouble>>",
                "Tensor<3, 1, tensor::covariant, Tensor<1, 1, tensor::contravariant, Tdouble>>",
            ]
        );
        assert_eq!(
            rendered(&shapes.values),
            vec!["Tensor<1, 1, tensor::contravariant, Tdouble>"]
        );
    }

    #[test]
    fn shape_count_is_bounded_by_cross_product() {
        let rows = [
            SpaceRow::new(3, 3, 1, 3, HGrad),
            SpaceRow::new(2, 2, 1, 3, HDiv),
            SpaceRow::new(1, 1, 1, 2, HGrad),
        ];
        let triples = shape_triples(&rows);
        for max_der_order in 0..4u32 {
            let shapes = tensor_shapes(&triples, max_der_order, &ShapeTemplates::default());
            let bound = (max_der_order as usize + 1) * triples.len();
            assert!(shapes.derivatives.len() <= bound);
            assert!(shapes.values.len() <= triples.len());
        }
    }

    #[test]
    fn empty_triples_give_no_shapes() {
        let shapes = tensor_shapes(&[], 3, &ShapeTemplates::default());
        assert_eq!(shapes, TensorShapes::default());
    }

    #[test]
    fn value_shapes_do_not_grow_with_order() {
        let triples = [DimTriple::new(2, 1, 1)];
        let shapes = tensor_shapes(&triples, MAX_DER_ORDER, &ShapeTemplates::default());
        assert_eq!(shapes.derivatives.len(), MAX_DER_ORDER as usize + 1);
        assert_eq!(shapes.values.len(), 1);
    }
}
