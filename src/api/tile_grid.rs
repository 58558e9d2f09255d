use crate::util::error::WebMercatorError;

/// A lazy, single-pass iterator over every integer cell of a
/// `(width + 1) x (height + 1)` rectangle anchored at a start vertex.
///
/// Cells are produced row-major with x varying fastest. A negative width or
/// height yields an empty sequence. Once exhausted, the iterator stays empty.
///
/// # Example
/// ```
/// use webmercator_rs::TileGrid;
///
/// let cells: Vec<_> = TileGrid::new((100, 100), 1, 1).collect();
/// assert_eq!(cells, vec![(100, 100), (101, 100), (100, 101), (101, 101)]);
/// ```
#[derive(Debug, Clone)]
pub struct TileGrid {
    start_x: i64,
    start_y: i64,
    width: i64,
    height: i64,
    x: i64,
    y: i64,
}

impl TileGrid {
    pub fn new(vertex: (i64, i64), width: i64, height: i64) -> Self {
        Self {
            start_x: vertex.0,
            start_y: vertex.1,
            width,
            height,
            x: 0,
            y: 0,
        }
    }

    pub fn builder() -> TileGridBuilder {
        TileGridBuilder::new()
    }
}

impl Iterator for TileGrid {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.width || self.y > self.height {
            return None;
        }

        let current = (self.start_x + self.x, self.start_y + self.y);
        if self.x == self.width {
            // end of row, start the next one
            self.x = 0;
            self.y += 1;
        } else {
            self.x += 1;
        }

        Some(current)
    }
}

/// Builds a [`TileGrid`], reporting a `MissingArgument` error when the start
/// vertex, width or height was not supplied.
#[derive(Debug, Clone, Default)]
pub struct TileGridBuilder {
    vertex: Option<(i64, i64)>,
    width: Option<i64>,
    height: Option<i64>,
}

impl TileGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex(mut self, x: i64, y: i64) -> Self {
        self.vertex = Some((x, y));
        self
    }

    pub fn width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn build(self) -> Result<TileGrid, WebMercatorError> {
        let vertex = self.vertex.ok_or_else(|| {
            WebMercatorError::MissingArgument("vertex is required".to_string())
        })?;
        let width = self.width.ok_or_else(|| {
            WebMercatorError::MissingArgument("width is required".to_string())
        })?;
        let height = self.height.ok_or_else(|| {
            WebMercatorError::MissingArgument("height is required".to_string())
        })?;

        Ok(TileGrid::new(vertex, width, height))
    }
}
