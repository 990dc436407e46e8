//! Named-field projection and named-method dispatch.
//!
//! Dynamically typed utility libraries look properties and methods up on
//! each element by name at runtime. The statically typed rendition puts
//! that lookup table on the element type itself: [`Project`] supplies
//! field-by-name projection (used by [`pluck`](crate::ops::pluck) and
//! [`sort_by_field`](crate::ops::sort_by_field)), and [`NamedMethod`]
//! supplies method-by-name dispatch (used by
//! [`invoke_named`](crate::ops::invoke_named)).

use crate::collection::Mapping;

/// Projection of a named field out of an element.
///
/// A sequence of mappings — the classic "array of records" — projects out
/// of the box: the field is `Option<V>`, absent keys yielding `None`.
///
/// # Examples
///
/// ```rust
/// use lowbar::collection::Mapping;
/// use lowbar::ops::Project;
///
/// let mut person = Mapping::new();
/// person.insert("age".to_string(), 31);
///
/// assert_eq!(person.project("age"), Some(31));
/// assert_eq!(person.project("name"), None);
/// ```
pub trait Project {
    /// The type a projection produces.
    type Field;

    /// Projects the field named `key` out of the element.
    fn project(&self, key: &str) -> Self::Field;
}

impl<V: Clone> Project for Mapping<V> {
    type Field = Option<V>;

    #[inline]
    fn project(&self, key: &str) -> Option<V> {
        self.get(key).cloned()
    }
}

/// Method-by-name dispatch for an element type.
///
/// The implementor owns the name-to-behavior table; unknown names are the
/// implementor's to handle (a panic or a sentinel output, as fits the
/// type).
///
/// # Examples
///
/// ```rust
/// use lowbar::ops::NamedMethod;
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl NamedMethod for Circle {
///     type Arguments = f64;
///     type Output = f64;
///
///     fn call_named(&self, name: &str, scale: &f64) -> f64 {
///         match name {
///             "scaled_radius" => self.radius * scale,
///             "scaled_area" => std::f64::consts::PI * self.radius * self.radius * scale,
///             _ => panic!("Circle has no method named {name}"),
///         }
///     }
/// }
///
/// let circle = Circle { radius: 2.0 };
/// assert_eq!(circle.call_named("scaled_radius", &3.0), 6.0);
/// ```
pub trait NamedMethod {
    /// The argument bundle every named method receives.
    type Arguments;

    /// The type every named method returns.
    type Output;

    /// Calls the method named `name` with the given arguments.
    fn call_named(&self, name: &str, arguments: &Self::Arguments) -> Self::Output;
}
