//! Structured descriptors.
//!
//! Every derived entity carries its integer fields. Text is produced only by
//! `Display`, as the last step before a list leaves the kernel.

use crate::row::Transformation;
use crate::template::{Placeholder, ShapeBindings, Template};
use std::fmt;
use std::sync::Arc;

/// `(dim, range, rank)`, rendered `<d,r,k>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimTriple {
    pub dim: i64,
    pub range: i64,
    pub rank: i64,
}

impl DimTriple {
    pub fn new(dim: i64, range: i64, rank: i64) -> Self {
        Self { dim, range, rank }
    }
}

impl fmt::Display for DimTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{},{}>", self.dim, self.range, self.rank)
    }
}

/// `(dim, codim)` of a mapping, rendered `<d,c>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingDims {
    pub dim: i64,
    pub codim: i64,
}

impl MappingDims {
    pub fn new(dim: i64, codim: i64) -> Self {
        Self { dim, codim }
    }
}

impl fmt::Display for MappingDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{}>", self.dim, self.codim)
    }
}

/// A reference space of one family, e.g. `BSplineSpace<2,2,1>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefSpace {
    pub family: String,
    pub dims: DimTriple,
}

impl fmt::Display for RefSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.dims)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PushForward {
    pub transformation: Transformation,
    pub dims: MappingDims,
}

impl fmt::Display for PushForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PushForward<Transformation::{}, {},{}>",
            self.transformation, self.dims.dim, self.dims.codim
        )
    }
}

/// A reference space composed with a push-forward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysSpace {
    pub space: RefSpace,
    pub push_forward: PushForward,
}

impl fmt::Display for PhysSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhysicalSpace <{}, {} >", self.space, self.push_forward)
    }
}

/// A template bound to concrete values.
///
/// Identity is the template plus the values of the placeholders it actually
/// contains: two shapes that differ only in a placeholder the template never
/// mentions are the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TensorShape {
    template: Arc<Template>,
    values: Vec<(Placeholder, i64)>,
}

impl TensorShape {
    pub fn bind(template: &Arc<Template>, bindings: &ShapeBindings) -> Self {
        let values = template
            .placeholders()
            .into_iter()
            .map(|p| (p, bindings.get(p)))
            .collect();
        Self {
            template: Arc::clone(template),
            values,
        }
    }

    /// Bound value of `placeholder`, if the template uses it.
    pub fn value(&self, placeholder: Placeholder) -> Option<i64> {
        self.values
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map(|(_, v)| *v)
    }
}

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template.render(|p| self.value(p)))
    }
}

/// Classes parameterized by a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimClass {
    TensorSize,
    TensorIndex,
    TensorSizedContainer,
    TensorProductArray,
    CartesianProductIndexer,
    UnitElement,
    Multiplicity,
    Quadrature,
    CartesianGrid,
    CartesianGridElement,
    CartesianGridElementAccessor,
    BallMapping,
    SphereMapping,
}

impl DimClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::TensorSize => "TensorSize",
            Self::TensorIndex => "TensorIndex",
            Self::TensorSizedContainer => "TensorSizedContainer",
            Self::TensorProductArray => "TensorProductArray",
            Self::CartesianProductIndexer => "CartesianProductIndexer",
            Self::UnitElement => "UnitElement",
            Self::Multiplicity => "Multiplicity",
            Self::Quadrature => "Quadrature",
            Self::CartesianGrid => "CartesianGrid",
            Self::CartesianGridElement => "CartesianGridElement",
            Self::CartesianGridElementAccessor => "CartesianGridElementAccessor",
            Self::BallMapping => "BallMapping",
            Self::SphereMapping => "SphereMapping",
        }
    }
}

/// `Class<d>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimDescriptor {
    pub class: DimClass,
    pub dim: i64,
}

impl DimDescriptor {
    pub fn new(class: DimClass, dim: i64) -> Self {
        Self { class, dim }
    }
}

impl fmt::Display for DimDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.class.name(), self.dim)
    }
}

/// Classes parameterized by mapping dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingClass {
    Mapping,
    LinearMapping,
    MappingElementAccessor,
}

impl MappingClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::Mapping => "Mapping",
            Self::LinearMapping => "LinearMapping",
            Self::MappingElementAccessor => "MappingElementAccessor",
        }
    }
}

/// `Class<d,c>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingDescriptor {
    pub class: MappingClass,
    pub dims: MappingDims,
}

impl MappingDescriptor {
    pub fn new(class: MappingClass, dims: MappingDims) -> Self {
        Self { class, dims }
    }
}

impl fmt::Display for MappingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.class.name(), self.dims)
    }
}

/// Element type stored in a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Real,
    RealPtr,
    Index,
    TensorIndex(i64),
    Shape(TensorShape),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => f.write_str("Real"),
            Self::RealPtr => f.write_str("Real*"),
            Self::Index => f.write_str("Index"),
            Self::TensorIndex(dim) => write!(f, "TensorIndex<{dim}>"),
            Self::Shape(shape) => write!(f, "{shape}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayClass {
    DynamicMultiArray,
    CartesianProductArray,
}

/// `Class<element,rank>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayDescriptor {
    pub class: ArrayClass,
    pub element: Element,
    pub rank: i64,
}

impl ArrayDescriptor {
    pub fn new(class: ArrayClass, element: Element, rank: i64) -> Self {
        Self {
            class,
            element,
            rank,
        }
    }
}

impl fmt::Display for ArrayDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.class {
            ArrayClass::DynamicMultiArray => "DynamicMultiArray",
            ArrayClass::CartesianProductArray => "CartesianProductArray",
        };
        write!(f, "{name}<{},{}>", self.element, self.rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    ValueVector,
    ValueTable,
}

/// `Class<element>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueContainer {
    pub class: ValueClass,
    pub element: Element,
}

impl ValueContainer {
    pub fn new(class: ValueClass, element: Element) -> Self {
        Self { class, element }
    }
}

impl fmt::Display for ValueContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.class {
            ValueClass::ValueVector => "ValueVector",
            ValueClass::ValueTable => "ValueTable",
        };
        write!(f, "{name}<{}>", self.element)
    }
}

/// Either kind of class descriptor, for lists that mix them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassDescriptor {
    Dim(DimDescriptor),
    Mapping(MappingDescriptor),
}

impl From<DimDescriptor> for ClassDescriptor {
    fn from(d: DimDescriptor) -> Self {
        Self::Dim(d)
    }
}

impl From<MappingDescriptor> for ClassDescriptor {
    fn from(d: MappingDescriptor) -> Self {
        Self::Mapping(d)
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dim(d) => write!(f, "{d}"),
            Self::Mapping(d) => write!(f, "{d}"),
        }
    }
}

/// `GridWrapper<CartesianGrid<d>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridWrapper(pub DimDescriptor);

impl fmt::Display for GridWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridWrapper<{}>", self.0)
    }
}

/// `GridForwardIterator<accessor>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridForwardIterator(pub ClassDescriptor);

impl fmt::Display for GridForwardIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridForwardIterator<{}>", self.0)
    }
}
