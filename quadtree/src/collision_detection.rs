use common::{Body, Rectangle};

// Open intervals: rectangles that only share an edge do not intersect
pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

// Overlap of the areas both bodies swept since the last frame
pub fn hull_intersection(a: &Body, b: &Body) -> bool {
    rectangle_rectangle(&a.hull(), &b.hull())
}
