//! Regular-grid sampling of a bivariate value function.
//!
//! A [`SampleGrid`] holds the `order × order` scalar values of `f(x, z)`
//! evaluated at linearly spaced coordinates across a rectangular [`Domain`].
//! The grid is immutable once constructed; tessellation reads from it but
//! never writes back.

use crate::errors::BuildError;
use crate::float_types::Real;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A closed `[min, max]` interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Real,
    pub max: Real,
}

impl Bounds {
    pub const fn new(min: Real, max: Real) -> Self {
        Bounds { min, max }
    }

    /// Signed length of the interval.
    pub fn span(&self) -> Real {
        self.max - self.min
    }

    /// The `index`-th of `order` linearly spaced coordinates across the interval.
    ///
    /// `coordinate(0, order) == min` and `coordinate(order - 1, order)` lands on
    /// `max` up to floating-point rounding.
    pub fn coordinate(&self, index: usize, order: usize) -> Real {
        self.min + index as Real * self.span() / (order - 1) as Real
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        if self.min.is_finite() && self.max.is_finite() {
            Ok(())
        } else {
            Err(BuildError::NonFiniteBounds { min: self.min, max: self.max })
        }
    }
}

/// The rectangular patch of the XZ plane a surface is sampled over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub x: Bounds,
    pub z: Bounds,
}

impl Domain {
    pub const fn new(x: Bounds, z: Bounds) -> Self {
        Domain { x, z }
    }

    pub(crate) fn validate(&self) -> Result<(), BuildError> {
        self.x.validate()?;
        self.z.validate()
    }
}

pub(crate) fn validate_order(order: usize) -> Result<(), BuildError> {
    // order 1 would divide by zero computing the grid step
    if order < 2 {
        return Err(BuildError::OrderTooSmall(order));
    }
    Ok(())
}

/// An immutable `order × order` grid of sampled values, row-major in `i`
/// (the x axis), so `values[i][j] == f(x_i, z_j)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    order: usize,
    values: Vec<Vec<Real>>,
}

impl SampleGrid {
    /// Eagerly evaluate `value_function` at every grid coordinate.
    ///
    /// Any non-finite sample aborts the whole grid with
    /// [`BuildError::NonFiniteSample`]. With the `parallel` feature rows are
    /// sampled on the rayon pool; output is identical either way.
    pub fn sample<F>(value_function: F, order: usize, domain: &Domain) -> Result<Self, BuildError>
    where
        F: Fn(Real, Real) -> Real + Sync,
    {
        validate_order(order)?;
        domain.validate()?;

        #[cfg(feature = "parallel")]
        let values = (0..order)
            .into_par_iter()
            .map(|i| Self::sample_row(&value_function, i, order, domain))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let values = (0..order)
            .map(|i| Self::sample_row(&value_function, i, order, domain))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SampleGrid { order, values })
    }

    /// Like [`SampleGrid::sample`] but for a fallible value function.
    ///
    /// The first evaluation error aborts sampling and is surfaced as
    /// [`BuildError::Evaluation`] with the offending `(x, z)` attached.
    /// Always evaluated serially, in row-major order.
    pub fn try_sample<F, E>(
        value_function: F,
        order: usize,
        domain: &Domain,
    ) -> Result<Self, BuildError>
    where
        F: Fn(Real, Real) -> Result<Real, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        validate_order(order)?;
        domain.validate()?;

        let mut values = Vec::with_capacity(order);
        for i in 0..order {
            let x = domain.x.coordinate(i, order);
            let mut row = Vec::with_capacity(order);
            for j in 0..order {
                let z = domain.z.coordinate(j, order);
                let value = value_function(x, z)
                    .map_err(|e| BuildError::Evaluation { x, z, source: e.into() })?;
                if !value.is_finite() {
                    return Err(BuildError::NonFiniteSample { x, z });
                }
                row.push(value);
            }
            values.push(row);
        }
        Ok(SampleGrid { order, values })
    }

    /// Build a grid from pre-computed rows, validating that they form a
    /// square `order × order` array of finite values.
    pub fn from_rows(values: Vec<Vec<Real>>) -> Result<Self, BuildError> {
        let order = values.len();
        validate_order(order)?;
        for (i, row) in values.iter().enumerate() {
            if row.len() != order {
                return Err(BuildError::RaggedRow { expected: order, row: i, len: row.len() });
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(BuildError::NonFiniteValue { row: i, col: j });
            }
        }
        Ok(SampleGrid { order, values })
    }

    fn sample_row<F>(
        value_function: &F,
        i: usize,
        order: usize,
        domain: &Domain,
    ) -> Result<Vec<Real>, BuildError>
    where
        F: Fn(Real, Real) -> Real,
    {
        let x = domain.x.coordinate(i, order);
        (0..order)
            .map(|j| {
                let z = domain.z.coordinate(j, order);
                let value = value_function(x, z);
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(BuildError::NonFiniteSample { x, z })
                }
            })
            .collect()
    }

    /// Number of samples along each axis.
    pub const fn order(&self) -> usize {
        self.order
    }

    /// The sampled value at grid coordinate `(i, j)`.
    pub fn value(&self, i: usize, j: usize) -> Real {
        self.values[i][j]
    }

    /// All rows, `i`-major.
    pub fn rows(&self) -> &[Vec<Real>] {
        &self.values
    }
}
