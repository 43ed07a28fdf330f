use std::fmt;

/// Text sink matchers describe themselves and their mismatches into.
///
/// Values appended through [`append_value`](Self::append_value) are wrapped in
/// angle brackets so they stand out from the surrounding prose.
///
/// # Examples
///
/// ```
/// use matchers::Description;
///
/// let mut description = Description::new();
/// description
///     .append_text("codes")
///     .append_value_list(" (", ", ", ")", [1, 2]);
/// assert_eq!(description.as_str(), "codes (<1>, <2>)");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Description {
    text: String,
}

impl Description {
    /// Creates an empty description.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Appends literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Appends `value` wrapped in angle brackets.
    pub fn append_value(&mut self, value: &dyn fmt::Display) -> &mut Self {
        self.text.push('<');
        self.text.push_str(&value.to_string());
        self.text.push('>');
        self
    }

    /// Appends `start`, each value separated by `separator`, then `end`.
    pub fn append_value_list<I>(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.append_text(start);
        for (index, value) in values.into_iter().enumerate() {
            if index > 0 {
                self.append_text(separator);
            }
            self.append_value(&value);
        }
        self.append_text(end)
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consumes the description and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Write for Description {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
