//! Rows of the physical-space table.
//!
//! A row describes one physical space the library is instantiated for:
//!
//! ```text
//! dim_ref range_ref rank_ref dim_phys trans_type
//! ```
//!
//! The reference space lives on a `dim_ref`-dimensional parametric domain
//! and takes values in tensors of `range_ref` components and rank
//! `rank_ref`. It is pushed forward into `dim_phys`-dimensional physical
//! space with the given transformation.

use serde::{Deserialize, Serialize};

/// How values are carried from the reference domain to the physical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    /// Gradient preserving. Physical range equals the reference range.
    HGrad,

    /// Divergence preserving (Piola). Physical range equals `dim_phys`.
    HDiv,
}

impl Transformation {
    /// Numeric code used in table files.
    pub fn code(self) -> i64 {
        match self {
            Self::HGrad => 0,
            Self::HDiv => 1,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::HGrad),
            1 => Some(Self::HDiv),
            _ => None,
        }
    }

    /// Range of the pushed-forward space.
    pub fn physical_range(self, range_ref: i64, dim_phys: i64) -> i64 {
        match self {
            Self::HGrad => range_ref,
            Self::HDiv => dim_phys,
        }
    }
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HGrad => write!(f, "h_grad"),
            Self::HDiv => write!(f, "h_div"),
        }
    }
}

impl std::str::FromStr for Transformation {
    type Err = String;

    /// Accepts either the numeric code or the symbolic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown transformation code: {s}"));
        }
        match s {
            "h_grad" => Ok(Self::HGrad),
            "h_div" => Ok(Self::HDiv),
            _ => Err(format!("unknown transformation: {s}")),
        }
    }
}

/// Largest value a table field may hold. Rows are tensor dimensions,
/// ranges and ranks, so anything beyond this is a typo.
pub const MAX_ROW_VALUE: i64 = 255;

/// One physical space of the table. Equal iff all five fields are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRow {
    pub dim_ref: i64,
    pub range_ref: i64,
    pub rank_ref: i64,
    pub dim_phys: i64,
    pub trans_type: Transformation,
}

impl SpaceRow {
    pub fn new(
        dim_ref: i64,
        range_ref: i64,
        rank_ref: i64,
        dim_phys: i64,
        trans_type: Transformation,
    ) -> Self {
        Self {
            dim_ref,
            range_ref,
            rank_ref,
            dim_phys,
            trans_type,
        }
    }

    /// Every integer field must lie in `0..=MAX_ROW_VALUE`.
    pub fn check_bounds(&self) -> Result<(), String> {
        for (name, value) in [
            ("dim_ref", self.dim_ref),
            ("range_ref", self.range_ref),
            ("rank_ref", self.rank_ref),
            ("dim_phys", self.dim_phys),
        ] {
            if !(0..=MAX_ROW_VALUE).contains(&value) {
                return Err(format!("{name} {value} is outside 0..={MAX_ROW_VALUE}"));
            }
        }
        Ok(())
    }

    /// The boundary space: same row one reference dimension lower.
    pub fn face(&self) -> Self {
        Self {
            dim_ref: self.dim_ref.saturating_sub(1),
            ..*self
        }
    }

    /// Embedding codimension `dim_phys - dim_ref`.
    pub fn codim(&self) -> i64 {
        self.dim_phys.saturating_sub(self.dim_ref)
    }

    pub fn physical_range(&self) -> i64 {
        self.trans_type.physical_range(self.range_ref, self.dim_phys)
    }
}

impl std::fmt::Display for SpaceRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{},{},{},{})",
            self.dim_ref, self.range_ref, self.rank_ref, self.dim_phys, self.trans_type
        )
    }
}
