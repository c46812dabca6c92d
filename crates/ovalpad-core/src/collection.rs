//! Ordered shape storage with single selection and round-robin coloring.

use crate::shapes::{PALETTE, ShapeId, ShapeTrait};
use crate::surface::DrawingSurface;
use kurbo::Point;
use thiserror::Error;

/// Errors from collection mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("out of memory while inserting a shape")]
    OutOfMemory,
}

/// Owns every shape in draw order and tracks which one is selected.
///
/// The selection is held by id, never by reference, and resolves to nothing
/// when no stored shape carries that id.
#[derive(Debug, Clone)]
pub struct ShapeCollection<S> {
    /// Back to front.
    items: Vec<S>,
    selected: Option<ShapeId>,
    /// Index into [`PALETTE`] for the next insertion.
    color_cursor: usize,
}

impl<S> Default for ShapeCollection<S> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            color_cursor: 0,
        }
    }
}

impl<S: ShapeTrait> ShapeCollection<S> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a zero-sized shape at `point` and select it.
    pub fn insert_shape(&mut self, point: Point) -> Result<ShapeId, CollectionError> {
        self.items
            .try_reserve(1)
            .map_err(|_| CollectionError::OutOfMemory)?;

        let shape = S::new_at(point, PALETTE[self.color_cursor]);
        self.color_cursor = (self.color_cursor + 1) % PALETTE.len();

        let id = shape.id();
        self.items.push(shape);
        self.selected = Some(id);
        log::debug!("Inserted shape {} at ({}, {})", id, point.x, point.y);
        Ok(id)
    }

    /// Select the topmost shape containing `point`.
    ///
    /// Leaves the selection untouched and returns false when nothing is hit.
    pub fn select_shape(&mut self, point: Point) -> bool {
        match self.items.iter().rev().find(|s| s.hit_test(point)) {
            Some(shape) => {
                self.selected = Some(shape.id());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently selected shape, if its id still resolves.
    pub fn selected(&self) -> Option<&S> {
        let id = self.selected?;
        self.items.iter().find(|s| s.id() == id)
    }

    pub fn selected_mut(&mut self) -> Option<&mut S> {
        let id = self.selected?;
        self.items.iter_mut().find(|s| s.id() == id)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected().map(|s| s.id())
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&S> {
        self.items.iter().find(|s| s.id() == id)
    }

    /// Shapes in draw order (back to front).
    pub fn shapes(&self) -> &[S] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw every shape onto `surface`, back to front.
    pub fn draw(&self, surface: &mut dyn DrawingSurface) {
        for shape in &self.items {
            shape.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Shape, ShapeColor};
    use crate::surface::RecordingSurface;

    fn collection_with(shapes: &[(Point, Point)]) -> ShapeCollection<Shape> {
        let mut collection: ShapeCollection<Shape> = ShapeCollection::new();
        for &(a, b) in shapes {
            collection.insert_shape(a).unwrap();
            collection.selected_mut().unwrap().fit_to_corners(a, b);
        }
        collection.clear_selection();
        collection
    }

    #[test]
    fn test_insert_selects_new_shape() {
        let mut collection: ShapeCollection<Shape> = ShapeCollection::new();
        let id = collection.insert_shape(Point::new(1.0, 2.0)).unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.selected_id(), Some(id));
        let shape = collection.selected().unwrap();
        assert_eq!(shape.center(), Point::new(1.0, 2.0));
        let ellipse = shape.as_ellipse().unwrap();
        assert!(ellipse.radius_x.abs() < f64::EPSILON);
        assert!(ellipse.radius_y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_robin_colors() {
        let mut collection: ShapeCollection<Shape> = ShapeCollection::new();
        for i in 0..14 {
            collection.insert_shape(Point::new(i as f64, 0.0)).unwrap();
            // Selection changes between inserts must not disturb the cycle.
            collection.clear_selection();
            collection.select_shape(Point::new(-50.0, -50.0));
        }
        let colors: Vec<ShapeColor> = collection.shapes().iter().map(|s| s.color()).collect();
        for (k, color) in colors.iter().enumerate() {
            assert_eq!(*color, PALETTE[k % PALETTE.len()]);
        }
    }

    #[test]
    fn test_select_prefers_topmost() {
        let mut collection = collection_with(&[
            (Point::new(0.0, 0.0), Point::new(20.0, 20.0)),
            (Point::new(5.0, 5.0), Point::new(25.0, 25.0)),
        ]);
        let top = collection.shapes()[1].id();

        assert!(collection.select_shape(Point::new(12.0, 12.0)));
        assert_eq!(collection.selected_id(), Some(top));
    }

    #[test]
    fn test_select_miss_keeps_selection() {
        let mut collection = collection_with(&[(Point::new(0.0, 0.0), Point::new(10.0, 10.0))]);
        let id = collection.shapes()[0].id();

        assert!(collection.select_shape(Point::new(5.0, 5.0)));
        assert!(!collection.select_shape(Point::new(100.0, 100.0)));
        assert_eq!(collection.selected_id(), Some(id));
    }

    #[test]
    fn test_clear_selection_idempotent() {
        let mut collection: ShapeCollection<Shape> = ShapeCollection::new();
        collection.insert_shape(Point::ZERO).unwrap();
        collection.clear_selection();
        collection.clear_selection();
        assert!(collection.selected().is_none());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_draw_in_insertion_order() {
        let collection = collection_with(&[
            (Point::new(0.0, 0.0), Point::new(2.0, 2.0)),
            (Point::new(10.0, 10.0), Point::new(12.0, 12.0)),
            (Point::new(20.0, 20.0), Point::new(22.0, 22.0)),
        ]);
        let mut surface = RecordingSurface::default();
        collection.draw(&mut surface);

        let centers: Vec<Point> = surface.calls.iter().map(|(g, _)| g.center).collect();
        assert_eq!(
            centers,
            vec![Point::new(1.0, 1.0), Point::new(11.0, 11.0), Point::new(21.0, 21.0)]
        );
        assert_eq!(surface.calls[2].1, PALETTE[2]);
    }
}
