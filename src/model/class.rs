//! Class and member data structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Member visibility as written with a UML visibility symbol.
///
/// Omission is represented by `Option<Visibility>::None` at the member level,
/// never by a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// `+`
    Public,
    /// `#`
    Protected,
    /// `~`
    Package,
    /// `-`
    Private,
}

impl Visibility {
    /// Parse a UML visibility symbol. Unrecognized symbols yield `None`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Public),
            "#" => Some(Self::Protected),
            "~" => Some(Self::Package),
            "-" => Some(Self::Private),
            _ => None,
        }
    }

    /// The UML symbol for this visibility.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Public => "+",
            Self::Protected => "#",
            Self::Package => "~",
            Self::Private => "-",
        }
    }

    /// Whether callers outside the package hierarchy can see this member.
    #[must_use]
    pub const fn is_exposed(&self) -> bool {
        matches!(self, Self::Public | Self::Protected)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Tri-state static flag.
///
/// Code models only ever carry `Static` or `NonStatic`. Diagram models may
/// also leave the flag `Unspecified`, which is distinct from `NonStatic`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaticFlag {
    Static,
    NonStatic,
    #[default]
    Unspecified,
}

impl StaticFlag {
    /// Build from an optional boolean, keeping omission visible.
    #[must_use]
    pub const fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Static,
            Some(false) => Self::NonStatic,
            None => Self::Unspecified,
        }
    }

    /// Coerce to a boolean. `Unspecified` reads as "not static".
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        matches!(self, Self::Static)
    }

    #[must_use]
    pub const fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl fmt::Display for StaticFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::NonStatic => write!(f, "non-static"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Kind of classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class => write!(f, "class"),
            Self::Interface => write!(f, "interface"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// How sure the model is that a class really exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationConfidence {
    /// Explicitly declared.
    #[default]
    Official,
    /// Referenced by name but never declared.
    Placeholder,
}

/// A field (attribute) of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Raw declared type. `None` when the diagram omits it.
    pub declared_type: Option<String>,
    pub visibility: Option<Visibility>,
    pub is_static: StaticFlag,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: Some(declared_type.into()),
            visibility: None,
            is_static: StaticFlag::Unspecified,
        }
    }

    /// A diagram entry that names the field without a type.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            visibility: None,
            is_static: StaticFlag::Unspecified,
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = if is_static {
            StaticFlag::Static
        } else {
            StaticFlag::NonStatic
        };
        self
    }

    /// Declared type, or an empty string when omitted.
    #[must_use]
    pub fn type_or_empty(&self) -> &str {
        self.declared_type.as_deref().unwrap_or("")
    }

    /// One-line UML rendering, e.g. `- total: double`.
    #[must_use]
    pub fn display(&self) -> String {
        let mut out = String::new();
        if let Some(vis) = self.visibility {
            out.push_str(vis.symbol());
            out.push(' ');
        }
        if self.is_static == StaticFlag::Static {
            out.push_str("{static} ");
        }
        out.push_str(&self.name);
        if let Some(ty) = self.declared_type.as_deref().filter(|t| !t.trim().is_empty()) {
            out.push_str(": ");
            out.push_str(ty);
        }
        out
    }
}

/// A method (operation) of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    /// Declared return type. Code models use `void` when nothing is returned;
    /// `None` means the diagram omitted it.
    pub return_type: Option<String>,
    /// Parameter types in order. `None` is a name-only declaration.
    pub parameters: Option<Vec<String>>,
    pub visibility: Option<Visibility>,
    pub is_static: StaticFlag,
}

impl Method {
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: Some(return_type.into()),
            parameters: Some(Vec::new()),
            visibility: None,
            is_static: StaticFlag::Unspecified,
        }
    }

    /// A diagram entry that names the method without parameters or return type.
    #[must_use]
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: None,
            visibility: None,
            is_static: StaticFlag::Unspecified,
        }
    }

    #[must_use]
    pub fn with_parameters<I, S>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = Some(parameters.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = if is_static {
            StaticFlag::Static
        } else {
            StaticFlag::NonStatic
        };
        self
    }

    /// Parameter types, treating a name-only declaration as no parameters.
    #[must_use]
    pub fn parameter_types(&self) -> &[String] {
        self.parameters.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.parameter_types().len()
    }

    #[must_use]
    pub const fn is_name_only(&self) -> bool {
        self.parameters.is_none()
    }

    /// Return type with omission read as `void`.
    #[must_use]
    pub fn return_type_or_void(&self) -> &str {
        match self.return_type.as_deref() {
            Some(ty) if !ty.trim().is_empty() => ty,
            _ => "void",
        }
    }

    /// Whether the method returns something other than `void`.
    #[must_use]
    pub fn returns_value(&self) -> bool {
        self.return_type_or_void().trim() != "void"
    }

    /// Human-readable signature, e.g. `total(int, String)`.
    #[must_use]
    pub fn display_signature(&self) -> String {
        match &self.parameters {
            Some(params) => format!("{}({})", self.name, params.join(", ")),
            None => self.name.clone(),
        }
    }

    /// One-line UML rendering, e.g. `+ total(int): double`.
    #[must_use]
    pub fn display(&self) -> String {
        let mut out = String::new();
        if let Some(vis) = self.visibility {
            out.push_str(vis.symbol());
            out.push(' ');
        }
        if self.is_static == StaticFlag::Static {
            out.push_str("{static} ");
        }
        out.push_str(&self.display_signature());
        if let Some(ret) = self.return_type.as_deref().filter(|t| !t.trim().is_empty()) {
            out.push_str(": ");
            out.push_str(ret);
        }
        out
    }
}

/// A class, interface or enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub kind: ClassKind,
    pub is_abstract: bool,
    pub confidence: DeclarationConfidence,
    /// Enum literal names, in declaration order. Empty for other kinds.
    pub literals: Vec<String>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl Class {
    /// Create an officially declared class with no members.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_abstract: false,
            confidence: DeclarationConfidence::Official,
            literals: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create a placeholder for a class referenced before being declared.
    #[must_use]
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            confidence: DeclarationConfidence::Placeholder,
            ..Self::new(name, ClassKind::Class)
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.confidence == DeclarationConfidence::Placeholder
    }

    /// First field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// All methods with the given name, in declaration order.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Method> + 'a {
        self.methods.iter().filter(move |m| m.name == name)
    }

    /// Whether a method has the shape of a constructor for this class.
    #[must_use]
    pub fn is_constructor_name(&self, method_name: &str) -> bool {
        method_name == self.name
    }
}
