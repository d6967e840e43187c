//! Creatable selector
//!
//! A single-choice field with a typed filter. When the filter matches no
//! option, confirming creates a new one from the typed label.

/// One selectable option. `value` is what gets stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Lower-case and join whitespace runs with `-`
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone)]
pub struct Selector {
    pub label: &'static str,
    options: Vec<SelectOption>,
    selected: Option<String>,
    /// Typed filter
    query: String,
    /// Position among the current matches
    cursor: usize,
}

impl Selector {
    pub fn new(label: &'static str, values: &[&str]) -> Self {
        Self {
            label,
            options: values
                .iter()
                .map(|v| SelectOption::new(*v, *v))
                .collect(),
            selected: None,
            query: String::new(),
            cursor: 0,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Selected value, if any
    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_label(&self) -> Option<&str> {
        let value = self.selected.as_deref()?;
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    /// Options whose label or value contains the filter (case-insensitive)
    pub fn matches(&self) -> Vec<&SelectOption> {
        let needle = self.query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| {
                needle.is_empty()
                    || o.label.to_lowercase().contains(&needle)
                    || o.value.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Option under the cursor
    pub fn candidate(&self) -> Option<&SelectOption> {
        let matches = self.matches();
        matches.get(self.cursor.min(matches.len().saturating_sub(1))).copied()
    }

    /// True when confirming now would create a new option
    pub fn would_create(&self) -> bool {
        !self.query.trim().is_empty() && self.matches().is_empty()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.cursor = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.cursor = 0;
    }

    /// Returns false when there was no filter to clear
    pub fn clear_query(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.sync_cursor();
        true
    }

    pub fn next(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn previous(&mut self) {
        let len = self.matches().len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Put the cursor on the selected option (or the first one)
    pub fn sync_cursor(&mut self) {
        let selected = self.selected.as_deref();
        self.cursor = self
            .matches()
            .iter()
            .position(|o| Some(o.value.as_str()) == selected)
            .unwrap_or(0);
    }

    /// Pick the candidate, or create the typed label when nothing matches.
    ///
    /// Picking the already selected option clears the selection.
    pub fn confirm(&mut self) {
        if self.would_create() {
            let label = self.query.clone();
            self.create(&label);
        } else if let Some(value) = self.candidate().map(|o| o.value.clone()) {
            if self.selected.as_deref() == Some(value.as_str()) {
                self.selected = None;
            } else {
                self.selected = Some(value);
            }
        }
        self.query.clear();
        self.sync_cursor();
    }

    /// Add an option from a free-form label and select it.
    ///
    /// The stored value is the slug; an existing option with the same slug
    /// is selected instead of duplicated. Blank labels are ignored.
    pub fn create(&mut self, label: &str) {
        let value = slugify(label);
        if value.is_empty() {
            return;
        }
        if !self.options.iter().any(|o| o.value == value) {
            tracing::debug!(field = self.label, value = %value, "option created");
            self.options.push(SelectOption::new(label.trim(), value.clone()));
        }
        self.selected = Some(value);
    }

    /// Add known values (e.g. projects seen in loaded records)
    pub fn absorb<'a>(&mut self, values: impl IntoIterator<Item = &'a str>) {
        for value in values {
            if value.trim().is_empty() || self.options.iter().any(|o| o.value == value) {
                continue;
            }
            self.options.push(SelectOption::new(value, value));
        }
    }
}
