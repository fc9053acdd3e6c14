//! Type descriptors.
//!
//! A [`Type`] is a cheap handle to an immutable descriptor owned by a
//! [`Registry`](crate::Registry). Descriptors are interned, so two handles
//! to structurally identical types point at the same allocation and compare
//! equal by identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use regex::Regex;
use typeform_foundation::{Error, Result, Value};

/// Handle to an interned type descriptor.
///
/// Cloning is O(1). Equality and hashing use the descriptor's identity, which
/// the registry guarantees coincides with structural identity.
#[derive(Clone)]
pub struct Type(Arc<TypeDef>);

pub(crate) struct TypeDef {
    id: Arc<str>,
    kind: TypeKind,
}

/// The closed set of type descriptors.
#[derive(Clone, Debug)]
pub enum TypeKind {
    /// Accepts every value.
    Any,
    /// Any string.
    Str,
    /// Any number other than `NaN`; infinities are allowed.
    Num,
    /// A boolean.
    Bool,
    /// A number that is an integer representable in 32 bits.
    Int32,
    /// A list whose every element satisfies the item type.
    List(Type),
    /// A record; fields are checked in declaration order.
    Struct(Vec<Field>),
    /// Nil, or a value satisfying the inner type.
    Option(Type),
    /// One of a fixed set of literal values.
    Enum(Vec<Value>),
    /// A value satisfying at least one member type, tried in order.
    Union(Vec<Type>),
    /// An `Int32` within `[start, end]`.
    Int32Range {
        /// Inclusive lower bound.
        start: i32,
        /// Inclusive upper bound.
        end: i32,
    },
    /// A string whose length lies within `[min_length, max_length]`.
    RangeText {
        /// Inclusive minimum length in characters.
        min_length: usize,
        /// Inclusive maximum length in characters.
        max_length: usize,
    },
    /// A string matching a pattern in full.
    PatternStr(Pattern),
    /// Another type shown under a domain name.
    Alias {
        /// Display name.
        name: Arc<str>,
        /// The aliased type.
        target: Type,
    },
}

/// A named field of a struct type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Field name.
    pub name: Arc<str>,
    /// Field type.
    pub ty: Type,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A compiled pattern that must match an entire string.
#[derive(Clone)]
pub struct Pattern {
    source: Arc<str>,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source`, anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](typeform_foundation::ErrorKind::InvalidPattern)
    /// if `source` is not a valid regular expression.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{source})$"))
            .map_err(|e| Error::invalid_pattern(source, e.to_string()))?;
        Ok(Self {
            source: source.into(),
            regex,
        })
    }

    /// The pattern as written, without the anchors.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the whole of `text` matches.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

impl Type {
    pub(crate) fn new(id: Arc<str>, kind: TypeKind) -> Self {
        Self(Arc::new(TypeDef { id, kind }))
    }

    /// Returns the descriptor variant.
    #[must_use]
    pub fn kind(&self) -> &TypeKind {
        &self.0.kind
    }

    /// Canonical key of this type; equal keys mean the same instance.
    #[must_use]
    pub fn type_id(&self) -> &str {
        &self.0.id
    }

    /// Display name: the constructor name, or the alias name for aliases.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.0.kind {
            TypeKind::Any => "Any",
            TypeKind::Str => "Str",
            TypeKind::Num => "Num",
            TypeKind::Bool => "Bool",
            TypeKind::Int32 => "Int32",
            TypeKind::List(_) => "List",
            TypeKind::Struct(_) => "Struct",
            TypeKind::Option(_) => "Option",
            TypeKind::Enum(_) => "Enum",
            TypeKind::Union(_) => "Union",
            TypeKind::Int32Range { .. } => "Int32Range",
            TypeKind::RangeText { .. } => "RangeText",
            TypeKind::PatternStr(_) => "PatternStr",
            TypeKind::Alias { name, .. } => name.as_ref(),
        }
    }

    /// Returns true if this type is an alias.
    #[must_use]
    pub fn is_alias(&self) -> bool {
        matches!(self.0.kind, TypeKind::Alias { .. })
    }

    /// Follows aliases down to the structural type.
    #[must_use]
    pub fn resolve(&self) -> &Type {
        let mut ty = self;
        while let TypeKind::Alias { target, .. } = ty.kind() {
            ty = target;
        }
        ty
    }

    // =========================================================================
    // Introspection
    // =========================================================================
    // Form renderers pick an input element from these. All see through aliases.

    /// Ordered fields of a struct type.
    #[must_use]
    pub fn fields(&self) -> Option<&[Field]> {
        match self.resolve().kind() {
            TypeKind::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Looks up a struct field's type by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Type> {
        self.fields()?
            .iter()
            .find(|f| &*f.name == name)
            .map(|f| &f.ty)
    }

    /// Item type of a list or option type.
    #[must_use]
    pub fn item_type(&self) -> Option<&Type> {
        match self.resolve().kind() {
            TypeKind::List(item) | TypeKind::Option(item) => Some(item),
            _ => None,
        }
    }

    /// Allowed values of an enum type.
    #[must_use]
    pub fn enum_values(&self) -> Option<&[Value]> {
        match self.resolve().kind() {
            TypeKind::Enum(values) => Some(values),
            _ => None,
        }
    }

    /// Member types of a union type.
    #[must_use]
    pub fn union_types(&self) -> Option<&[Type]> {
        match self.resolve().kind() {
            TypeKind::Union(types) => Some(types),
            _ => None,
        }
    }

    /// Lower bound of an integer range type.
    #[must_use]
    pub fn start(&self) -> Option<i32> {
        match self.resolve().kind() {
            TypeKind::Int32Range { start, .. } => Some(*start),
            _ => None,
        }
    }

    /// Upper bound of an integer range type.
    #[must_use]
    pub fn end(&self) -> Option<i32> {
        match self.resolve().kind() {
            TypeKind::Int32Range { end, .. } => Some(*end),
            _ => None,
        }
    }

    /// Minimum length of a bounded text type.
    #[must_use]
    pub fn min_length(&self) -> Option<usize> {
        match self.resolve().kind() {
            TypeKind::RangeText { min_length, .. } => Some(*min_length),
            _ => None,
        }
    }

    /// Maximum length of a bounded text type.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        match self.resolve().kind() {
            TypeKind::RangeText { max_length, .. } => Some(*max_length),
            _ => None,
        }
    }

    /// Source of a pattern type's pattern.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self.resolve().kind() {
            TypeKind::PatternStr(pattern) => Some(pattern.as_str()),
            _ => None,
        }
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({})", self.0.id)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TypeKind::Any
            | TypeKind::Str
            | TypeKind::Num
            | TypeKind::Bool
            | TypeKind::Int32
            | TypeKind::Alias { .. } => write!(f, "{}", self.name()),
            TypeKind::List(item) => write!(f, "List<{item}>"),
            TypeKind::Option(item) => write!(f, "Option<{item}>"),
            TypeKind::Struct(fields) => {
                write!(f, "Struct{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",\n")?;
                    }
                    // Nested multi-line types are indented under their field.
                    let ty = field.ty.to_string().replace('\n', "\n  ");
                    write!(f, "{}:{ty}", field.name)?;
                }
                write!(f, "}}")
            }
            TypeKind::Enum(values) => {
                write!(f, "Enum<")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ">")
            }
            TypeKind::Union(types) => {
                write!(f, "Union<")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{ty}")?;
                }
                write!(f, ">")
            }
            TypeKind::Int32Range { start, end } => write!(f, "Int32Range<{start},{end}>"),
            TypeKind::RangeText {
                min_length,
                max_length,
            } => write!(f, "RangeText<{min_length},{max_length}>"),
            TypeKind::PatternStr(pattern) => write!(f, "PatternStr<{pattern:?}>"),
        }
    }
}
