//! Static option schemas describing the recognized configuration keys of
//! each unit type.
//!
//! A unit type is fully described by an ordered list of [`OptionSchema`]
//! records. The declaration order is load-bearing: the document builder
//! walks the list front to back and emits a `[Section]` header on every
//! section change, so reordering entries changes the rendered output.

/// Immutable description of one recognized configuration key.
#[derive(Debug, Clone, Copy)]
pub struct OptionSchema {
    /// Section the key is rendered under (e.g. `"Service"`), case-preserving.
    pub section: &'static str,
    /// Key name as it appears in the unit file, case-preserving.
    ///
    /// Lookup in the argument set uses the lower-cased form.
    pub key: &'static str,
    /// Value used when the caller supplies none. May contain placeholder
    /// tokens, which are substituted at resolution time.
    pub default: Option<&'static str>,
    /// Whether the key is marked required in help output.
    ///
    /// The hard failure for a missing value is driven by the explicit
    /// required-option gate in [`crate::prereq::require_option`], not by
    /// this flag.
    pub required: bool,
    /// Whether the caller may supply the key more than once. Each supplied
    /// value becomes its own output line, in supplied order.
    pub multiple: bool,
    /// Advisory enumeration of well-known values, surfaced in help text.
    /// Out-of-set values are accepted and passed through unchanged.
    pub allowed_values: Option<&'static [&'static str]>,
}

impl OptionSchema {
    /// Plain optional key with no default.
    const fn new(section: &'static str, key: &'static str) -> Self {
        Self {
            section,
            key,
            default: None,
            required: false,
            multiple: false,
            allowed_values: None,
        }
    }

    const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    const fn with_allowed_values(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = Some(values);
        self
    }
}

const UNIT: &str = "Unit";
const SERVICE: &str = "Service";
const SOCKET: &str = "Socket";
const INSTALL: &str = "Install";

/// Schema of a `.service` unit, in rendering order.
pub const SERVICE_OPTIONS: &[OptionSchema] = &[
    OptionSchema::new(UNIT, "Description"),
    OptionSchema::new(SERVICE, "Type").with_allowed_values(&[
        "simple", "exec", "forking", "oneshot", "dbus", "notify", "idle",
    ]),
    OptionSchema::new(SERVICE, "WorkingDirectory").with_default("%execstartdir%"),
    OptionSchema::new(SERVICE, "ExecStart").required(),
    OptionSchema::new(SERVICE, "Restart").with_allowed_values(&[
        "no",
        "on-success",
        "on-failure",
        "on-abnormal",
        "on-watchdog",
        "on-abort",
        "always",
    ]),
    OptionSchema::new(SERVICE, "SyslogIdentifier"),
    OptionSchema::new(SERVICE, "User"),
    OptionSchema::new(SERVICE, "Group"),
    OptionSchema::new(SERVICE, "Environment").multiple(),
    OptionSchema::new(INSTALL, "WantedBy").with_default("multi-user.target"),
    OptionSchema::new(INSTALL, "Also"),
];

/// Schema of a `.socket` unit, in rendering order.
pub const SOCKET_OPTIONS: &[OptionSchema] = &[
    OptionSchema::new(UNIT, "Description"),
    OptionSchema::new(SOCKET, "ListenStream").required(),
    OptionSchema::new(INSTALL, "WantedBy").with_default("sockets.target"),
];

/// The unit types this tool can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A `.service` unit.
    Service,
    /// A `.socket` unit.
    Socket,
}

impl UnitKind {
    /// Ordered option schema for this unit type.
    #[must_use]
    pub const fn options(self) -> &'static [OptionSchema] {
        match self {
            Self::Service => SERVICE_OPTIONS,
            Self::Socket => SOCKET_OPTIONS,
        }
    }

    /// File extension of the generated unit file, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Socket => "socket",
        }
    }

    /// File name of the unit `name` of this type (e.g. `"web.service"`).
    #[must_use]
    pub fn file_name(self, name: &str) -> String {
        format!("{name}.{}", self.extension())
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service => write!(f, "service"),
            Self::Socket => write!(f, "socket"),
        }
    }
}
