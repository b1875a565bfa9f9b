// Borrowed column-major matrix view

/// A read-only `rows x cols` matrix stored column by column.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<'a> {
    data: &'a [f32],
    rows: usize,
    cols: usize,
}

impl<'a> Matrix<'a> {
    /// Returns `None` unless `data` holds exactly `rows * cols` values.
    pub fn new(data: &'a [f32], rows: usize, cols: usize) -> Option<Self> {
        (rows.checked_mul(cols)? == data.len()).then_some(Self { data, rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column `j`. Panics if `j >= cols`.
    #[inline]
    pub fn col(&self, j: usize) -> &'a [f32] {
        &self.data[j * self.rows..(j + 1) * self.rows]
    }

    #[inline]
    pub fn get_col(&self, j: usize) -> Option<&'a [f32]> {
        (j < self.cols).then(|| self.col(j))
    }

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}
