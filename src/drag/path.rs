//! Event paths as the resolver sees them.
//!
//! Any toolkit can feed the resolver as long as it can list the ancestors of the
//! element under the pointer, innermost first, and say whether each one carries an
//! area marker.

/// An element that may carry an area marker.
pub trait AreaMarker {
    /// The marker's value, or `None` for an unmarked element.
    fn area(&self) -> Option<&str>;
}

impl<T: AreaMarker + ?Sized> AreaMarker for &T {
    fn area(&self) -> Option<&str> {
        (**self).area()
    }
}

/// A plain element description, used by the headless shell and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub area: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area: None,
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }
}

impl AreaMarker for Element {
    fn area(&self) -> Option<&str> {
        self.area.as_deref()
    }
}

/// A drag-over event: the ancestor chain from the element under the pointer up to
/// the root, and whether the platform default has been suppressed.
#[derive(Debug, Clone)]
pub struct DragOverEvent<N = Element> {
    pub path: Vec<N>,
    default_prevented: bool,
}

impl<N> DragOverEvent<N> {
    pub fn new(path: Vec<N>) -> Self {
        Self {
            path,
            default_prevented: false,
        }
    }

    /// Keeps the element under the pointer a valid drop target.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
