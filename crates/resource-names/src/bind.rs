use crate::error::Error;
use crate::pattern::NamePattern;

/// A field type that can be carried in a single resource name segment.
///
/// This is the closed set of conversions the binding adapter supports:
/// strings, the integer primitives, booleans, floats, and `char`. A field of
/// any other type cannot be registered (the generated code fails to compile),
/// rather than being skipped at runtime.
pub trait SegmentValue: Sized {
    /// Parse the raw segment text, or `None` when it does not represent a
    /// value of this type.
    fn from_segment(raw: &str) -> Option<Self>;

    /// The canonical segment text for this value (decimal for integers).
    fn to_segment(&self) -> String;
}

impl SegmentValue for String {
    fn from_segment(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn to_segment(&self) -> String {
        self.clone()
    }
}

macro_rules! segment_value_via_parse {
    ($($ty:ty),* $(,)?) => {$(
        impl SegmentValue for $ty {
            fn from_segment(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }

            fn to_segment(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

segment_value_via_parse!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

type Getter<R> = Box<dyn Fn(&R) -> Option<String>>;
type Setter<R> = Box<dyn Fn(&mut R, &str)>;

struct Binding<R> {
    variable: &'static str,
    get: Getter<R>,
    set: Setter<R>,
}

/// The field associations of one record type: a list of
/// `(variable name, getter, setter)` triples.
///
/// Bindings are built by [`Bindable::bindings`], normally through
/// `#[derive(Bindable)]`, and are discovered fresh on every bind or render
/// call; nothing is cached across calls.
///
/// # Examples
///
/// A hand-written implementation, equivalent to what the derive generates:
///
/// ```
/// use resource_names::{Bindable, Bindings};
///
/// #[derive(Default)]
/// struct Book {
///     user_id: String,
///     book_id: u64,
/// }
///
/// impl Bindable for Book {
///     fn bindings() -> Bindings<Self> {
///         Bindings::new()
///             .field("user_id", |r: &Book| &r.user_id, |r, v| r.user_id = v)
///             .field("book_id", |r: &Book| &r.book_id, |r, v| r.book_id = v)
///     }
/// }
/// ```
pub struct Bindings<R> {
    entries: Vec<Binding<R>>,
}

impl<R> Bindings<R> {
    /// An empty set of associations.
    pub fn new() -> Self {
        Bindings {
            entries: Vec::new(),
        }
    }

    /// Register a field by accessor pair. The setter only runs when the raw
    /// segment text converts to the field's type; otherwise the field is
    /// left untouched.
    pub fn field<T: SegmentValue + 'static>(
        self,
        variable: &'static str,
        get: fn(&R) -> &T,
        set: fn(&mut R, T),
    ) -> Self
    where
        R: 'static,
    {
        self.bind(
            variable,
            move |record| Some(get(record).to_segment()),
            move |record, raw| match T::from_segment(raw) {
                Some(value) => set(record, value),
                None => {
                    tracing::trace!(variable, raw, "segment value not convertible, skipping");
                }
            },
        )
    }

    /// Register a raw getter/setter pair. The getter may return `None` to
    /// signal that the record currently has no value for the variable, which
    /// makes rendering fail with
    /// [`Error::MissingVariable`](crate::Error::MissingVariable).
    pub fn bind<G, S>(mut self, variable: &'static str, get: G, set: S) -> Self
    where
        G: Fn(&R) -> Option<String> + 'static,
        S: Fn(&mut R, &str) + 'static,
    {
        self.entries.push(Binding {
            variable,
            get: Box::new(get),
            set: Box::new(set),
        });
        self
    }

    fn resolve(&self, record: &R, variable: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|binding| binding.variable == variable)
            .and_then(|binding| (binding.get)(record))
    }

    fn assign(&self, record: &mut R, variable: &str, raw: &str) {
        for binding in &self.entries {
            if binding.variable == variable {
                (binding.set)(record, raw);
            }
        }
    }
}

impl<R> Default for Bindings<R> {
    fn default() -> Self {
        Bindings::new()
    }
}

/// A record whose fields are associated with variable segment names.
///
/// Implemented via `#[derive(Bindable)]`, where each bound field carries a
/// `#[binding("segment_name")]` attribute. Fields without the attribute are
/// not considered for binding or rendering.
pub trait Bindable {
    /// The field associations for this record type.
    fn bindings() -> Bindings<Self>
    where
        Self: Sized;
}

impl NamePattern {
    /// Parse a resource name and assign all discovered variable segment
    /// values onto the record's bound fields.
    ///
    /// A discovered variable with no bound field is ignored, and a value that
    /// does not convert to its field's type is skipped without touching the
    /// field. Neither case is an error.
    ///
    /// # Errors
    ///
    /// Propagates [`NamePattern::matches`] errors; the record is left
    /// unmodified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_names::{Bindable, NamePattern};
    ///
    /// #[derive(Bindable, Default)]
    /// struct Book {
    ///     #[binding("user_id")]
    ///     user_id: String,
    ///     #[binding("book_id")]
    ///     book_id: u64,
    /// }
    ///
    /// let pattern = NamePattern::compile("/users/{user_id}/books/{book_id}");
    /// let mut book = Book::default();
    /// pattern.bind_into("/users/42/books/7", &mut book).unwrap();
    /// assert_eq!(book.user_id, "42");
    /// assert_eq!(book.book_id, 7);
    /// ```
    pub fn bind_into<R: Bindable>(&self, name: &str, record: &mut R) -> Result<(), Error> {
        let params = self.matches(name)?;
        let bindings = R::bindings();

        for (variable, raw) in &params {
            bindings.assign(record, variable, raw);
        }

        Ok(())
    }

    /// Render a resource name from the record's bound fields.
    ///
    /// Unlike [`NamePattern::bind_into`], which quietly skips unbound
    /// variables, rendering fails when a variable segment has no bound field:
    /// every segment must be supplied to produce a complete name.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingVariable`] naming the first variable segment with no
    ///   bound field value.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_names::{Bindable, NamePattern};
    ///
    /// #[derive(Bindable)]
    /// struct User {
    ///     #[binding("user_id")]
    ///     id: String,
    /// }
    ///
    /// let pattern = NamePattern::compile("/users/{user_id}");
    /// let user = User { id: "42".to_string() };
    /// assert_eq!(pattern.render(&user).unwrap(), "/users/42");
    /// ```
    pub fn render<R: Bindable>(&self, record: &R) -> Result<String, Error> {
        let bindings = R::bindings();
        self.format(|variable| bindings.resolve(record, variable))
    }
}
