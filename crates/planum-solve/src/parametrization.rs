//! Parametric descriptions of affine solution sets.

use std::fmt;

use planum_geom::{GeomError, Vector};

/// A base point plus an ordered set of direction vectors spanning an
/// affine solution set.
///
/// An empty direction-vector list represents a single point (a unique
/// solution). Constructed once as the final output of solving; immutable
/// afterwards.
#[derive(Clone, PartialEq)]
pub struct Parametrization {
    base_point: Vector,
    direction_vectors: Vec<Vector>,
}

impl Parametrization {
    /// Creates a parametrization from a base point and direction vectors.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DimensionMismatch`] if any direction vector's
    /// dimension differs from the base point's.
    pub fn new(base_point: Vector, direction_vectors: Vec<Vector>) -> Result<Self, GeomError> {
        for vector in &direction_vectors {
            if vector.dim() != base_point.dim() {
                return Err(GeomError::DimensionMismatch {
                    left: base_point.dim(),
                    right: vector.dim(),
                });
            }
        }
        Ok(Self {
            base_point,
            direction_vectors,
        })
    }

    /// Returns the base point.
    #[must_use]
    pub fn base_point(&self) -> &Vector {
        &self.base_point
    }

    /// Returns the direction vectors, in free-variable index order.
    #[must_use]
    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    /// Returns the shared dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.base_point.dim()
    }

    /// Returns true if the solution set is a single point.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.direction_vectors.is_empty()
    }
}

fn tuple_str(vector: &Vector) -> String {
    let parts: Vec<String> = vector
        .coords()
        .iter()
        .map(|c| format!("{}", (c.to_f64() * 1e4).round() / 1e4))
        .collect();
    format!("({})", parts.join(", "))
}

impl fmt::Display for Parametrization {
    /// Renders the base point and each direction vector rounded to
    /// 4 decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parametrization")?;
        write!(f, "basept: {}", tuple_str(&self.base_point))?;
        for vector in &self.direction_vectors {
            write!(f, "\ndirvec: {}", tuple_str(vector))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parametrization(dim {}, {} direction vectors)",
            self.dimension(),
            self.direction_vectors.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(coords: &[f64]) -> Vector {
        Vector::from_f64s(coords).unwrap()
    }

    #[test]
    fn test_dimension_mismatch_fails() {
        let base = v(&[0.0, 0.0, 0.0]);
        let bad = v(&[1.0, 0.0]);
        assert_eq!(
            Parametrization::new(base, vec![bad]),
            Err(GeomError::DimensionMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_unique_when_no_directions() {
        let p = Parametrization::new(v(&[1.0, 2.0]), vec![]).unwrap();
        assert!(p.is_unique());
        assert_eq!(p.dimension(), 2);
    }

    #[test]
    fn test_display() {
        let p = Parametrization::new(
            v(&[0.0, 2.0, 0.0]),
            vec![v(&[0.0, -1.0, 1.0]), v(&[-1.0, 0.5, 0.0])],
        )
        .unwrap();
        assert_eq!(
            format!("{p}"),
            "Parametrization\nbasept: (0, 2, 0)\ndirvec: (0, -1, 1)\ndirvec: (-1, 0.5, 0)"
        );
    }
}
