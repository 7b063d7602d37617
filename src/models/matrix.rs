//! Dense edge-attribute matrix.

/// A dense n×n matrix of edge attributes stored in row-major order.
///
/// Used for the cost, travel-time, and load matrices of a pricing graph.
/// `f64::INFINITY` denotes a missing or pruned edge.
///
/// # Examples
///
/// ```
/// use u_labeling::models::Matrix;
///
/// let mut m = Matrix::filled(3, f64::INFINITY);
/// m.set(0, 1, 2.5);
/// assert_eq!(m.get(0, 1), 2.5);
/// assert!(m.get(1, 0).is_infinite());
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    size: usize,
}

impl Matrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self::filled(size, 0.0)
    }

    /// Creates a matrix of the given size with every entry set to `value`.
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Creates a matrix from a row-major flat buffer.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a matrix from nested rows.
    ///
    /// Returns `None` if the rows do not form a square grid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return None;
            }
            data.extend(row);
        }
        Some(Self { data, size })
    }

    /// Returns the entry for the edge from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the entry for the edge from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        self.data[from * self.size + to] = value;
    }

    /// Number of nodes this matrix spans.
    pub fn size(&self) -> usize {
        self.size
    }
}
