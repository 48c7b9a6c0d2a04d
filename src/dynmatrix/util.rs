use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::traits::{FloatScalar, Scalar};

use super::vector::DynVector;
use super::DynMatrix;

impl<T: Copy> DynMatrix<T> {
    /// Apply `f` to every element.
    ///
    /// ```
    /// use numlab::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[0, 5, 10, 15]);
    /// // squares for even entries, cubes for odd ones
    /// let w = m.map(|x| if x % 2 == 0 { x * x } else { x * x * x });
    /// assert_eq!(w[(0, 1)], 125);
    /// assert_eq!(w[(1, 0)], 100);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> DynMatrix<U> {
        DynMatrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> DynMatrix<T> {
    /// Extract column `j` as a vector.
    pub fn col(&self, j: usize) -> DynVector<T> {
        assert!(j < self.ncols, "column {} out of bounds", j);
        DynVector::from_slice(&self.data[j * self.nrows..(j + 1) * self.nrows])
    }

    /// Extract row `i` as a vector.
    pub fn row(&self, i: usize) -> DynVector<T> {
        assert!(i < self.nrows, "row {} out of bounds", i);
        DynVector::from_vec((0..self.ncols).map(|j| self[(i, j)]).collect())
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// `(row, col)` of the smallest element, first in row-major order.
    ///
    /// NaNs are skipped. `None` for an empty or all-NaN matrix.
    ///
    /// ```
    /// use numlab::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[4.0, -1.0, 7.0, -1.0, 2.0, 0.0]);
    /// assert_eq!(m.argmin(), Some((0, 1)));
    /// ```
    pub fn argmin(&self) -> Option<(usize, usize)> {
        self.arg_extreme(|candidate, best| candidate < best)
    }

    /// `(row, col)` of the largest element, first in row-major order.
    ///
    /// NaNs are skipped. `None` for an empty or all-NaN matrix.
    pub fn argmax(&self) -> Option<(usize, usize)> {
        self.arg_extreme(|candidate, best| candidate > best)
    }

    fn arg_extreme(&self, better: impl Fn(T, T) -> bool) -> Option<(usize, usize)> {
        let mut best: Option<((usize, usize), T)> = None;
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                let x = self[(i, j)];
                if x.is_nan() {
                    continue;
                }
                match best {
                    Some((_, b)) if !better(x, b) => {}
                    _ => best = Some(((i, j), x)),
                }
            }
        }
        best.map(|(idx, _)| idx)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        let mut widths: Vec<usize> = alloc::vec![0; n];
        for (j, w) in widths.iter_mut().enumerate() {
            for i in 0..m {
                *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)])));
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for j in 0..n {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
