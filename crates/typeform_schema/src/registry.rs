//! The intern table and type constructors.
//!
//! A [`Registry`] hands out [`Type`] handles. Each constructor derives the
//! canonical key of the type it would build and returns the existing instance
//! when that key is already present, so structurally identical constructions
//! are reference-equal no matter where they are called from.
//!
//! Registries are meant to be populated while schemas are defined and only
//! read afterwards. Lookups and inserts are safe from multiple threads: two
//! racing first-time constructions of the same key yield one instance.
//!
//! Handles must not cross registries. A composite type built from another
//! registry's parts would be interned with foreign children; debug builds
//! panic when that happens.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use once_cell::sync::Lazy;
use tracing::{debug, trace};
use typeform_foundation::{Error, ErrorContext, Result, Value};

use crate::config::RegistryConfig;
use crate::descriptor::{Field, Pattern, Type, TypeKind};
use crate::key;

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Intern table for type descriptors.
pub struct Registry {
    types: DashMap<Arc<str>, Type>,
    config: RegistryConfig,
}

impl Registry {
    /// Creates a registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a registry with the given configuration.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        let registry = Self {
            types: DashMap::with_capacity(config.capacity),
            config,
        };

        if registry.config.preintern_primitives {
            registry.any();
            registry.str();
            registry.num();
            registry.bool();
            registry.int32();
        }

        registry
    }

    /// The process-wide registry, created on first use.
    ///
    /// Prefer an explicit registry where one can be threaded through; this is
    /// for schemas declared in `static` initializers and similar places.
    #[must_use]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Returns the configuration this registry was built with.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the number of interned types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Looks up an interned type by its [`type_id`](Type::type_id).
    #[must_use]
    pub fn get(&self, type_id: &str) -> Option<Type> {
        self.types.get(type_id).map(|entry| entry.value().clone())
    }

    /// Returns true if a type with this key has been interned.
    #[must_use]
    pub fn contains_key(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    /// Returns true if `ty` is the instance this registry interned.
    fn owns(&self, ty: &Type) -> bool {
        self.types
            .get(ty.type_id())
            .is_some_and(|entry| entry.value() == ty)
    }

    /// Returns the instance registered under `id`, building it on first use.
    fn intern(&self, id: String, build: impl FnOnce() -> TypeKind) -> Type {
        match self.types.entry(id.into()) {
            Entry::Occupied(entry) => {
                if self.config.log_interning {
                    trace!(type_id = %entry.key(), "reused interned type");
                }
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                let ty = Type::new(entry.key().clone(), build());
                if self.config.log_interning {
                    debug!(type_id = %ty.type_id(), kind = ty.name(), "interned type");
                }
                entry.insert(ty.clone());
                ty
            }
        }
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// `Any`: accepts every value.
    pub fn any(&self) -> Type {
        self.intern(key::ANY.to_owned(), || TypeKind::Any)
    }

    /// `Str`: any string.
    pub fn str(&self) -> Type {
        self.intern(key::STR.to_owned(), || TypeKind::Str)
    }

    /// `Num`: any number.
    pub fn num(&self) -> Type {
        self.intern(key::NUM.to_owned(), || TypeKind::Num)
    }

    /// `Bool`: a boolean.
    pub fn bool(&self) -> Type {
        self.intern(key::BOOL.to_owned(), || TypeKind::Bool)
    }

    /// `Int32`: an integer representable in 32 bits.
    pub fn int32(&self) -> Type {
        self.intern(key::INT32.to_owned(), || TypeKind::Int32)
    }

    // =========================================================================
    // Parametrized constructors
    // =========================================================================

    /// `List<T>`.
    pub fn list(&self, item: Type) -> Type {
        debug_assert!(self.owns(&item), "{item:?} belongs to another registry");
        self.intern(key::list(&item), || TypeKind::List(item))
    }

    /// `Option<T>`.
    pub fn option(&self, item: Type) -> Type {
        debug_assert!(self.owns(&item), "{item:?} belongs to another registry");
        self.intern(key::option(&item), || TypeKind::Option(item))
    }

    /// A struct with the given fields, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicateField`](typeform_foundation::ErrorKind::DuplicateField)
    /// if a field name appears twice.
    pub fn struct_of<I, K>(&self, fields: I) -> Result<Type>
    where
        I: IntoIterator<Item = (K, Type)>,
        K: Into<Arc<str>>,
    {
        let fields: Vec<Field> = fields
            .into_iter()
            .map(|(name, ty)| Field::new(name, ty))
            .collect();
        debug_assert!(
            fields.iter().all(|field| self.owns(&field.ty)),
            "struct field types belong to another registry"
        );

        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(&field.name) {
                return Err(Error::duplicate_field(&*field.name).with_context(
                    ErrorContext::new().with_frame(format!("Struct field `{}`", field.name)),
                ));
            }
        }

        Ok(self.intern(key::structure(&fields), || TypeKind::Struct(fields)))
    }

    /// An enum over literal values; membership is strict equality.
    pub fn enum_of<I, V>(&self, values: I) -> Type
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.intern(key::enumeration(&values), || TypeKind::Enum(values))
    }

    /// A union, tried in the given order.
    pub fn union<I>(&self, types: I) -> Type
    where
        I: IntoIterator<Item = Type>,
    {
        let types: Vec<Type> = types.into_iter().collect();
        debug_assert!(
            types.iter().all(|ty| self.owns(ty)),
            "union members belong to another registry"
        );
        self.intern(key::union(&types), || TypeKind::Union(types))
    }

    /// An `Int32` within `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidBounds`](typeform_foundation::ErrorKind::InvalidBounds)
    /// if `start > end`.
    pub fn int32_range(&self, start: i32, end: i32) -> Result<Type> {
        if start > end {
            return Err(Error::invalid_bounds(
                "Int32Range",
                i64::from(start),
                i64::from(end),
            ));
        }
        Ok(self.intern(key::int32_range(start, end), || TypeKind::Int32Range {
            start,
            end,
        }))
    }

    /// A string whose length in characters lies within `[min_length, max_length]`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidBounds`](typeform_foundation::ErrorKind::InvalidBounds)
    /// if `min_length > max_length`.
    pub fn range_text(&self, min_length: usize, max_length: usize) -> Result<Type> {
        if min_length > max_length {
            return Err(Error::invalid_bounds(
                "RangeText",
                i64::try_from(min_length).unwrap_or(i64::MAX),
                i64::try_from(max_length).unwrap_or(i64::MAX),
            ));
        }
        Ok(self.intern(key::range_text(min_length, max_length), || {
            TypeKind::RangeText {
                min_length,
                max_length,
            }
        }))
    }

    /// A string that must match `pattern` in full.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](typeform_foundation::ErrorKind::InvalidPattern)
    /// if `pattern` is not a valid regular expression.
    pub fn pattern_str(&self, pattern: &str) -> Result<Type> {
        let id = key::pattern_str(pattern);
        // Compiling is the expensive part; skip it when the type already exists.
        if let Some(existing) = self.get(&id) {
            return Ok(existing);
        }
        let compiled = Pattern::new(pattern)?;
        Ok(self.intern(id, || TypeKind::PatternStr(compiled)))
    }

    // =========================================================================
    // Aliasing
    // =========================================================================

    /// Shows `target` under a domain name.
    ///
    /// The alias checks and parses exactly like `target`, but reports and
    /// renders as `name`.
    pub fn alias(&self, target: Type, name: impl Into<Arc<str>>) -> Type {
        debug_assert!(self.owns(&target), "{target:?} belongs to another registry");
        let name: Arc<str> = name.into();
        self.intern(key::alias(&name, &target), || TypeKind::Alias { name, target })
    }

    /// A named record schema: an alias over a struct.
    ///
    /// # Errors
    ///
    /// Returns an error if the struct cannot be built; the error context
    /// names the model.
    pub fn model<I, K>(&self, name: impl Into<Arc<str>>, fields: I) -> Result<Type>
    where
        I: IntoIterator<Item = (K, Type)>,
        K: Into<Arc<str>>,
    {
        let name: Arc<str> = name.into();
        let structure = self.struct_of(fields).map_err(|mut err| {
            err.context.get_or_insert_with(ErrorContext::new).source = Some(name.to_string());
            err
        })?;
        Ok(self.alias(structure, name))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.types.len())
            .field("config", &self.config)
            .finish()
    }
}
