//! N-dimensional vectors.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};
use planum_scalar::{Decimal, NEAR_ZERO};

use crate::error::GeomError;

/// Unit for angle computations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    /// Radians, in [0, π].
    Radians,
    /// Degrees, in [0, 180].
    Degrees,
}

/// An N-dimensional vector over high-precision decimals.
///
/// The dimension is fixed at construction (N ≥ 1) and every binary
/// operation requires operands of equal dimension. Operations return new
/// vectors; the only in-place access is per-coordinate indexing, which
/// cannot change the dimension.
#[derive(Clone, PartialEq, Eq)]
pub struct Vector {
    coords: Vec<Decimal>,
}

impl Vector {
    /// Creates a vector from a coordinate list.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::EmptyVector`] if `coords` is empty.
    pub fn new(coords: Vec<Decimal>) -> Result<Self, GeomError> {
        if coords.is_empty() {
            return Err(GeomError::EmptyVector);
        }
        Ok(Self { coords })
    }

    /// Creates a vector from f64 coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::EmptyVector`] if `coords` is empty.
    pub fn from_f64s(coords: &[f64]) -> Result<Self, GeomError> {
        Self::new(coords.iter().map(|&c| Decimal::from_f64(c)).collect())
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::EmptyVector`] if `dimension` is zero.
    pub fn zeros(dimension: usize) -> Result<Self, GeomError> {
        Self::new(vec![Decimal::zero(); dimension])
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Returns the coordinates as a slice.
    #[must_use]
    pub fn coords(&self) -> &[Decimal] {
        &self.coords
    }

    fn ensure_same_dim(&self, other: &Self) -> Result<(), GeomError> {
        if self.dim() == other.dim() {
            Ok(())
        } else {
            Err(GeomError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            })
        }
    }

    /// Returns the element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn plus(&self, other: &Self) -> Result<Self, GeomError> {
        self.ensure_same_dim(other)?;
        Ok(Self {
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        })
    }

    /// Returns the element-wise difference.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn minus(&self, other: &Self) -> Result<Self, GeomError> {
        self.ensure_same_dim(other)?;
        Ok(Self {
            coords: self
                .coords
                .iter()
                .zip(other.coords.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        })
    }

    /// Returns the vector scaled by `scalar`.
    #[must_use]
    pub fn times_scalar(&self, scalar: &Decimal) -> Self {
        Self {
            coords: self
                .coords
                .iter()
                .map(|c| c.clone() * scalar.clone())
                .collect(),
        }
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn magnitude(&self) -> Decimal {
        self.coords
            .iter()
            .fold(Decimal::zero(), |acc, c| acc + c.clone() * c.clone())
            .sqrt()
    }

    /// Returns the unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::ZeroVector`] if the magnitude is near zero.
    pub fn normalized(&self) -> Result<Self, GeomError> {
        let magnitude = self.magnitude();
        if magnitude.is_near_zero() {
            return Err(GeomError::ZeroVector);
        }
        Ok(self.times_scalar(&magnitude.recip()))
    }

    /// Returns the dot product.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn dot_product(&self, other: &Self) -> Result<Decimal, GeomError> {
        self.ensure_same_dim(other)?;
        Ok(self
            .coords
            .iter()
            .zip(other.coords.iter())
            .fold(Decimal::zero(), |acc, (a, b)| {
                acc + a.clone() * b.clone()
            }))
    }

    /// Returns the angle to `other` in the requested unit.
    ///
    /// The cosine is clamped to [-1, 1] before `acos` so decimal rounding
    /// noise cannot leave the function's domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::ZeroVector`] if either operand is the zero
    /// vector, and [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn angle(&self, other: &Self, unit: AngleUnit) -> Result<Decimal, GeomError> {
        let cos = self
            .normalized()?
            .dot_product(&other.normalized()?)?
            .to_f64()
            .clamp(-1.0, 1.0);
        let radians = cos.acos();
        Ok(match unit {
            AngleUnit::Radians => Decimal::from_f64(radians),
            AngleUnit::Degrees => Decimal::from_f64(radians * 180.0 / std::f64::consts::PI),
        })
    }

    /// Returns true if the magnitude is below the shared near-zero
    /// tolerance.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(NEAR_ZERO)
    }

    /// Returns true if the magnitude is below `tolerance`.
    #[must_use]
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude().is_near_zero_within(tolerance)
    }

    /// Returns true if the vectors are parallel.
    ///
    /// The zero vector is parallel to everything; hyperplane equality
    /// depends on this convention. Otherwise the angle must be within
    /// tolerance of 0 or π.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, GeomError> {
        self.ensure_same_dim(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let radians = self.angle(other, AngleUnit::Radians)?.to_f64();
        Ok(radians.abs() < NEAR_ZERO || (radians - std::f64::consts::PI).abs() < NEAR_ZERO)
    }

    /// Returns true if the dot product is within the shared tolerance of
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool, GeomError> {
        self.is_orthogonal_within(other, NEAR_ZERO)
    }

    /// Returns true if the dot product is within `tolerance` of zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn is_orthogonal_within(&self, other: &Self, tolerance: f64) -> Result<bool, GeomError> {
        Ok(self.dot_product(other)?.is_near_zero_within(tolerance))
    }

    /// Returns the projection of `self` onto `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::NoUniqueParallelComponent`] if `basis` is the
    /// zero vector, and [`GeomError::DimensionMismatch`] on unequal
    /// dimensions.
    pub fn component_projected_to(&self, basis: &Self) -> Result<Self, GeomError> {
        let unit = basis.normalized().map_err(|e| match e {
            GeomError::ZeroVector => GeomError::NoUniqueParallelComponent,
            other => other,
        })?;
        let along = unit.dot_product(self)?;
        Ok(unit.times_scalar(&along))
    }

    /// Returns the component of `self` orthogonal to `basis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::NoUniqueOrthogonalComponent`] if `basis` is
    /// the zero vector, and [`GeomError::DimensionMismatch`] on unequal
    /// dimensions.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self, GeomError> {
        let parallel = self.component_projected_to(basis).map_err(|e| match e {
            GeomError::NoUniqueParallelComponent => GeomError::NoUniqueOrthogonalComponent,
            other => other,
        })?;
        self.minus(&parallel)
    }

    /// Returns the cross product `self × other`.
    ///
    /// 2D operands are implicitly embedded in 3D by padding a zero
    /// coordinate; the result follows the right-hand rule.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::CrossProductDimension`] unless both operands
    /// are 2D or both are 3D.
    pub fn cross_product(&self, other: &Self) -> Result<Self, GeomError> {
        self.ensure_same_dim(other)?;
        let (v, w) = match self.dim() {
            2 => (self.embedded_in_3d(), other.embedded_in_3d()),
            3 => (self.clone(), other.clone()),
            dim => return Err(GeomError::CrossProductDimension { dim }),
        };
        let (x1, y1, z1) = (&v.coords[0], &v.coords[1], &v.coords[2]);
        let (x2, y2, z2) = (&w.coords[0], &w.coords[1], &w.coords[2]);
        Self::new(vec![
            y1.clone() * z2.clone() - y2.clone() * z1.clone(),
            -(x1.clone() * z2.clone() - x2.clone() * z1.clone()),
            x1.clone() * y2.clone() - x2.clone() * y1.clone(),
        ])
    }

    fn embedded_in_3d(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.push(Decimal::zero());
        Self { coords }
    }

    /// Returns the area of the parallelogram spanned by `self` and
    /// `other`.
    ///
    /// # Errors
    ///
    /// Propagates the error conditions of [`Vector::cross_product`].
    pub fn area_of_parallelogram(&self, other: &Self) -> Result<Decimal, GeomError> {
        Ok(self.cross_product(other)?.magnitude())
    }

    /// Returns the area of the triangle spanned by `self` and `other`.
    ///
    /// # Errors
    ///
    /// Propagates the error conditions of [`Vector::cross_product`].
    pub fn area_of_triangle(&self, other: &Self) -> Result<Decimal, GeomError> {
        Ok(self.area_of_parallelogram(other)? / (Decimal::one() + Decimal::one()))
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coords[index]
    }
}

impl fmt::Display for Vector {
    /// Coordinates rounded to 4 decimal places, list-style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", (c.to_f64() * 1e4).round() / 1e4)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({self})")
    }
}
