//! Core domain traits for route geometry.
//!
//! Kept minimal so apps can implement them for their own stop, attraction
//! or vehicle models.

/// Anything with a geographic position, such as a route stop.
pub trait Located {
    /// Location coordinates (lat, lng) in decimal degrees.
    fn location(&self) -> (f64, f64);
}

impl Located for (f64, f64) {
    fn location(&self) -> (f64, f64) {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> (f64, f64) {
        (**self).location()
    }
}
