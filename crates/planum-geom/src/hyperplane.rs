//! Hyperplanes in standard form `Σ aᵢxᵢ = k`.

use std::fmt;

use num_traits::Zero;
use planum_scalar::Decimal;

use crate::error::GeomError;
use crate::vector::Vector;

/// An N-dimensional hyperplane given by a normal vector and a constant
/// term.
///
/// The basepoint (one concrete point on the hyperplane) is derived at
/// construction and cached; a hyperplane is never mutated after it is
/// built. Row operations in the solver replace whole hyperplanes rather
/// than editing their fields.
#[derive(Clone)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: Decimal,
    basepoint: Option<Vector>,
}

impl Hyperplane {
    /// Creates a hyperplane from a normal vector and constant term.
    #[must_use]
    pub fn new(normal_vector: Vector, constant_term: Decimal) -> Self {
        let basepoint = Self::derive_basepoint(&normal_vector, &constant_term);
        Self {
            normal_vector,
            constant_term,
            basepoint,
        }
    }

    /// Creates the degenerate hyperplane `0 = 0` of the given dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::InvalidConstruction`] if `dimension` is zero.
    pub fn with_dimension(dimension: usize) -> Result<Self, GeomError> {
        if dimension == 0 {
            return Err(GeomError::InvalidConstruction);
        }
        Ok(Self::new(
            Vector::zeros(dimension)?,
            Decimal::zero(),
        ))
    }

    /// Returns the index of the first coordinate that is not near zero,
    /// or `None` if every coordinate is near zero.
    ///
    /// `None` is a normal outcome for a degenerate row, not an error; the
    /// solver uses it directly as "this row has no pivot".
    #[must_use]
    pub fn first_nonzero_index(coords: &[Decimal]) -> Option<usize> {
        coords.iter().position(|c| !c.is_near_zero())
    }

    fn derive_basepoint(normal: &Vector, constant: &Decimal) -> Option<Vector> {
        let index = Self::first_nonzero_index(normal.coords())?;
        let mut coords = vec![Decimal::zero(); normal.dim()];
        coords[index] = constant.clone() / normal[index].clone();
        // normal.dim() >= 1, so the vector is nonempty
        Vector::new(coords).ok()
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant_term(&self) -> &Decimal {
        &self.constant_term
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dim()
    }

    /// Returns the cached basepoint, or `None` when the normal vector is
    /// entirely near zero and no unique basepoint exists.
    #[must_use]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns true if the hyperplanes are parallel, i.e. their normal
    /// vectors are.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] on unequal dimensions.
    pub fn is_parallel(&self, other: &Self) -> Result<bool, GeomError> {
        self.normal_vector.is_parallel(&other.normal_vector)
    }
}

impl PartialEq for Hyperplane {
    /// Geometric equality: the two hyperplanes describe the same point
    /// set.
    ///
    /// Two degenerate hyperplanes are equal when their constant terms are
    /// near-equal; a degenerate and a non-degenerate hyperplane are never
    /// equal; two non-degenerate hyperplanes are equal when their normals
    /// are parallel and the vector between their basepoints lies in the
    /// hyperplane (orthogonal to the normal).
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        match (self.normal_vector.is_zero(), other.normal_vector.is_zero()) {
            (true, true) => self.constant_term.is_near(&other.constant_term),
            (true, false) | (false, true) => false,
            (false, false) => {
                if !matches!(self.is_parallel(other), Ok(true)) {
                    return false;
                }
                // both normals are nonzero, so both basepoints exist
                let (Some(a), Some(b)) = (&self.basepoint, &other.basepoint) else {
                    return false;
                };
                let Ok(between) = a.minus(b) else {
                    return false;
                };
                matches!(between.is_orthogonal(&self.normal_vector), Ok(true))
            }
        }
    }
}

impl fmt::Display for Hyperplane {
    /// Renders the equation with coefficients rounded to 3 decimal
    /// places, e.g. `+01n_1 -2.5n_2 +00n_3 = 4`.
    ///
    /// Signs are always explicit and coefficient magnitudes are
    /// left-zero-padded to at least two characters; integral values are
    /// rendered without a decimal point. A degenerate normal renders the
    /// left side as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn round3(value: f64) -> f64 {
            (value * 1000.0).round() / 1000.0
        }

        fn magnitude_str(value: f64) -> String {
            #[allow(clippy::cast_possible_truncation)]
            let body = if value.fract() == 0.0 {
                format!("{}", value.abs() as i64)
            } else {
                format!("{}", value.abs())
            };
            if body.len() < 2 {
                format!("0{body}")
            } else {
                body
            }
        }

        let normal = self.normal_vector.coords();
        if Hyperplane::first_nonzero_index(normal).is_some() {
            let terms: Vec<String> = (0..self.dimension())
                .map(|i| {
                    let coefficient = round3(normal[i].to_f64());
                    let sign = if coefficient < 0.0 { '-' } else { '+' };
                    format!("{sign}{}n_{}", magnitude_str(coefficient), i + 1)
                })
                .collect();
            write!(f, "{}", terms.join(" "))?;
        } else {
            write!(f, "0")?;
        }

        let constant = round3(self.constant_term.to_f64());
        if constant.fract() == 0.0 {
            #[allow(clippy::cast_possible_truncation)]
            let integral = constant as i64;
            write!(f, " = {integral}")
        } else {
            write!(f, " = {constant}")
        }
    }
}

impl fmt::Debug for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hyperplane({self})")
    }
}
