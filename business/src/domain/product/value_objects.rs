/// Store-assigned product identifier.
/// Opaque to the business layer: only the store adapter knows its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Writable product attributes, named as they appear in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Category,
    InStock,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Name,
        ProductField::Description,
        ProductField::Price,
        ProductField::Category,
        ProductField::InStock,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Category => "category",
            ProductField::InStock => "inStock",
        }
    }
}

impl std::fmt::Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
