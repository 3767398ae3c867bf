use crate::{Error, IndexedPoint, Point, Segment};

/// A closed polygon in the plain.
///
/// The vertices are kept in cyclic order, the last one being connected back to the first. Every
/// vertex knows its own position: whatever reorders or removes vertices re-derives all the
/// indices afterwards, so they always go from `0` to `len - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
    vertices: Vec<IndexedPoint<T>>,
}

impl<T> Default for Polygon<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from(points: Vec<P>) -> Self {
        points.into_iter().collect()
    }
}

impl<T, P> FromIterator<P> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from_iter<I: IntoIterator<Item = P>>(points: I) -> Self {
        Self {
            vertices: points
                .into_iter()
                .enumerate()
                .map(|(index, point)| IndexedPoint::new(index, point))
                .collect(),
        }
    }
}

impl<T> IntoIterator for Polygon<T> {
    type Item = IndexedPoint<T>;
    type IntoIter = std::vec::IntoIter<IndexedPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<T> Polygon<T> {
    /// Returns the amount of vertices in the polygon.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the ordered vertices of the polygon.
    pub fn vertices(&self) -> &[IndexedPoint<T>] {
        &self.vertices
    }

    /// Returns an ordered iterator over the coordinates of the polygon.
    pub fn points(&self) -> impl Iterator<Item = &Point<T>> {
        self.vertices.iter().map(|vertex| &vertex.point)
    }

    /// Consumes the polygon, returning its ordered coordinates.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.vertices
            .into_iter()
            .map(|vertex| vertex.point)
            .collect()
    }

    /// Returns an ordered iterator over all the segments of this polygon.
    ///
    /// By definition, a polygon is a closed shape, hence the latest segment goes from the last
    /// vertex back to the very first.
    pub fn edges(&self) -> impl Iterator<Item = Segment<'_, T>> {
        self.vertices
            .iter()
            .zip(self.vertices.iter().skip(1).chain(self.vertices.first()))
            .map(|(from, to)| Segment::new(from, to))
    }

    /// Appends the given point as the last vertex of the polygon.
    pub fn push(&mut self, point: impl Into<Point<T>>) {
        self.vertices
            .push(IndexedPoint::new(self.vertices.len(), point));
    }

    /// Inserts the given point at the given position, shifting all the vertices after it.
    pub fn insert(&mut self, position: usize, point: impl Into<Point<T>>) -> Result<(), Error<T>> {
        if position > self.vertices.len() {
            return Err(Error::OutOfBounds {
                position,
                len: self.vertices.len(),
            });
        }

        self.vertices
            .insert(position, IndexedPoint::new(position, point));
        self.reindex();
        Ok(())
    }

    /// Removes the vertex at the given position, returning its coordinates.
    pub fn remove(&mut self, position: usize) -> Result<Point<T>, Error<T>> {
        if position >= self.vertices.len() {
            return Err(Error::OutOfBounds {
                position,
                len: self.vertices.len(),
            });
        }

        let removed = self.vertices.remove(position);
        self.reindex();
        Ok(removed.point)
    }

    /// Reverses the order of the vertices from `start` to `end`, both included, as if the polygon
    /// were a ring.
    ///
    /// If `start` is greater than `end` the range wraps around the last vertex back to the first
    /// one. Vertices out of the range keep their position.
    pub fn reverse_between(&mut self, start: usize, end: usize) -> Result<(), Error<T>> {
        let len = self.vertices.len();
        if let Some(position) = [start, end].into_iter().find(|&position| position >= len) {
            return Err(Error::OutOfBounds { position, len });
        }

        if start <= end {
            self.vertices[start..=end].reverse();
        } else {
            let span = len - start + end + 1;
            self.vertices.rotate_left(start);
            self.vertices[..span].reverse();
            self.vertices.rotate_right(start);
        }

        self.reindex();
        Ok(())
    }

    /// Makes the index of every vertex match its position.
    fn reindex(&mut self) {
        self.vertices
            .iter_mut()
            .enumerate()
            .for_each(|(index, vertex)| vertex.index = index);
    }
}
