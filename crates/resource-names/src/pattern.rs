use std::collections::HashMap;

use crate::error::Error;

/// One `/`-delimited component of a resource name pattern.
///
/// A segment is either a constant (`users` in `/users/{user_id}`) that must
/// match a candidate name verbatim, or a variable (`{user_id}`) that captures
/// whatever text occupies its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must match exactly, case-sensitively.
    Constant(String),
    /// A named placeholder; the stored string is the name between the braces.
    Variable(String),
}

impl Segment {
    /// The constant text, or the variable's name.
    pub fn value(&self) -> &str {
        match self {
            Segment::Constant(s) | Segment::Variable(s) => s,
        }
    }

    /// Whether this segment is a variable placeholder.
    pub fn is_variable(&self) -> bool {
        matches!(self, Segment::Variable(_))
    }
}

/// A compiled resource name pattern.
///
/// A pattern is a template to parse resource names against and to render
/// resource names from. It is immutable after compilation and safe to share
/// across threads.
///
/// # Examples
///
/// ```
/// use resource_names::NamePattern;
///
/// let pattern = NamePattern::compile("/users/{user_id}/books/{book_id}");
///
/// let params = pattern.matches("/users/42/books/7").unwrap();
/// assert_eq!(params["user_id"], "42");
/// assert_eq!(params["book_id"], "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    segments: Vec<Segment>,
}

/// Splits a pattern or name on `/`, ignoring leading and trailing separators.
/// Interior empty segments are kept, so `/a//b` has three segments.
fn split(s: &str) -> Vec<&str> {
    s.trim_matches('/').split('/').collect()
}

/// A placeholder is `{name}`: at least three bytes, brace-delimited.
fn is_placeholder(s: &str) -> bool {
    s.len() >= 3 && s.as_bytes()[0] == b'{' && s.as_bytes()[s.len() - 1] == b'}'
}

impl NamePattern {
    /// Compile a template string into a pattern.
    ///
    /// Given `/resource/{resource_id}`, the result holds the constant segment
    /// `resource` followed by the variable segment `resource_id`. Compilation
    /// never fails; any segment that is not a well-formed placeholder is
    /// treated as a constant. Variable names are not checked for uniqueness
    /// or non-emptiness.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_names::NamePattern;
    ///
    /// let pattern = NamePattern::compile("/users/{user_id}");
    /// assert_eq!(pattern.variables().collect::<Vec<_>>(), vec!["user_id"]);
    /// ```
    pub fn compile(template: &str) -> NamePattern {
        let segments = split(template)
            .into_iter()
            .map(|seg| {
                if is_placeholder(seg) {
                    Segment::Variable(seg[1..seg.len() - 1].to_string())
                } else {
                    Segment::Constant(seg.to_string())
                }
            })
            .collect();

        NamePattern { segments }
    }

    /// The pattern's segments, in template order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the variable segments, in template order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Constant(_) => None,
        })
    }

    /// Match a concrete resource name against this pattern, extracting the
    /// values of all variable segments.
    ///
    /// The name is split the same way as the template. Matching walks both
    /// segment lists in lock-step: constant segments must compare equal
    /// byte-for-byte, variable segments capture the candidate text. If the
    /// same variable name occurs more than once, the last occurrence wins.
    ///
    /// On failure the parameters gathered so far are discarded; callers only
    /// ever see a complete mapping or an error.
    ///
    /// # Errors
    ///
    /// * [`Error::SegmentCountMismatch`] if the name has a different number
    ///   of segments than the pattern.
    /// * [`Error::ConstantMismatch`] on the first constant segment whose text
    ///   differs from the candidate's.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_names::NamePattern;
    ///
    /// let pattern = NamePattern::compile("/users/{user_id}");
    /// assert!(pattern.matches("/users/42").is_ok());
    /// assert!(pattern.matches("/groups/42").is_err());
    /// assert!(pattern.matches("/users/42/books").is_err());
    /// ```
    pub fn matches(&self, name: &str) -> Result<HashMap<String, String>, Error> {
        let candidate = split(name);

        if candidate.len() != self.segments.len() {
            tracing::trace!(
                pattern_segments = self.segments.len(),
                name_segments = candidate.len(),
                "segment count mismatch"
            );
            return Err(Error::SegmentCountMismatch {
                expected: self.segments.len(),
                found: candidate.len(),
            });
        }

        let mut params = HashMap::new();

        for (index, (segment, text)) in self.segments.iter().zip(&candidate).enumerate() {
            match segment {
                Segment::Constant(literal) => {
                    if literal != text {
                        tracing::trace!(index, expected = %literal, found = %text, "constant mismatch");
                        return Err(Error::ConstantMismatch {
                            index,
                            expected: literal.clone(),
                            found: text.to_string(),
                        });
                    }
                }
                Segment::Variable(var) => {
                    params.insert(var.clone(), text.to_string());
                }
            }
        }

        Ok(params)
    }

    /// Render a resource name from this pattern, resolving each variable
    /// segment through the given lookup.
    ///
    /// The result is `"/" + segment` for every segment in template order, so
    /// it always begins with `/`. The resolver returns the value's canonical
    /// textual form, or `None` when it has no value for that variable.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingVariable`] naming the first variable segment the
    ///   resolver cannot supply.
    ///
    /// # Examples
    ///
    /// ```
    /// use resource_names::NamePattern;
    ///
    /// let pattern = NamePattern::compile("/users/{user_id}");
    /// let name = pattern
    ///     .format(|var| (var == "user_id").then(|| "42".to_string()))
    ///     .unwrap();
    /// assert_eq!(name, "/users/42");
    /// ```
    pub fn format<F>(&self, mut resolve: F) -> Result<String, Error>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut name = String::new();

        for segment in &self.segments {
            name.push('/');
            match segment {
                Segment::Constant(literal) => name.push_str(literal),
                Segment::Variable(var) => match resolve(var) {
                    Some(value) => name.push_str(&value),
                    None => return Err(Error::MissingVariable(var.clone())),
                },
            }
        }

        Ok(name)
    }
}
