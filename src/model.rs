//! Data model for extracted autodocs.

/// Header tag that decides whether a block is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// `*`, always extracted
    Default,
    /// `i`
    Internal,
    /// `o`
    Obsolete,
    /// `f`
    Future,
    /// Any other tag character; never extracted
    Other(char),
}

impl From<char> for Classification {
    fn from(c: char) -> Self {
        match c {
            '*' => Classification::Default,
            'i' => Classification::Internal,
            'o' => Classification::Obsolete,
            'f' => Classification::Future,
            other => Classification::Other(other),
        }
    }
}

impl Classification {
    /// The header character this classification was read from.
    pub fn tag(self) -> char {
        match self {
            Classification::Default => '*',
            Classification::Internal => 'i',
            Classification::Obsolete => 'o',
            Classification::Future => 'f',
            Classification::Other(c) => c,
        }
    }
}

/// A single complete autodoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autodoc {
    pub name: String,
    /// Body text with the leading markers stripped, newlines kept
    pub body: String,
}

impl Autodoc {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Autodoc {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Every autodoc discovered across all inputs, in discovery order until sorted.
#[derive(Debug, Default)]
pub struct AutodocList {
    docs: Vec<Autodoc>,
}

impl AutodocList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the autodocs found in one input.
    pub fn append(&mut self, docs: impl IntoIterator<Item = Autodoc>) {
        self.docs.extend(docs);
    }

    /// Case-insensitive sort by name. Equal names keep discovery order.
    pub fn sort(&mut self) {
        self.docs.sort_by_cached_key(|doc| doc.name.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn as_slice(&self) -> &[Autodoc] {
        &self.docs
    }
}
