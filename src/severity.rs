use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Severity tag carried alongside a flash message.
///
/// The standard tags follow the familiar `SEVERE` .. `FINEST` ladder.
/// Applications with their own vocabulary use [`Severity::custom`].
///
/// The serialized name is what travels in the cookie, after the `/`
/// separator, so it never contains `/` (or anything else outside
/// `[A-Za-z0-9_-]`).
///
/// # Examples
///
/// ```
/// use flash_core::Severity;
///
/// assert_eq!(Severity::Severe.name(), "SEVERE");
/// assert_eq!(Severity::from_name("INFO").unwrap(), Severity::Info);
///
/// let custom = Severity::custom("SUCCESS").unwrap();
/// assert_eq!(custom.name(), "SUCCESS");
///
/// assert!(Severity::custom("a/b").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A serious failure
    Severe,
    /// A potential problem
    Warning,
    /// An informational message
    #[default]
    Info,
    /// A configuration message
    Config,
    /// Tracing detail
    Fine,
    /// Fairly detailed tracing
    Finer,
    /// Highly detailed tracing
    Finest,
    /// Application-defined tag, validated by [`Severity::custom`]
    ///
    /// A value built directly is checked again when it is encoded.
    Custom(String),
}

impl Severity {
    /// Creates a custom severity tag.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidSeverity`] if `name` is empty or contains
    /// anything other than ASCII letters, digits, `_` or `-`.
    pub fn custom(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(Error::new(
                ErrorKind::InvalidSeverity,
                format!("'{}' is not a valid severity name", name),
            ));
        }
        Ok(match standard(&name) {
            Some(level) => level,
            None => Severity::Custom(name),
        })
    }

    /// Looks up a severity by its serialized name.
    ///
    /// Standard names map to their variants; any other valid name becomes
    /// [`Severity::Custom`].
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Self::custom(name)
    }

    /// Checks that the serialized name can travel in a cookie and read back
    /// as the same severity.
    ///
    /// Only [`Severity::Custom`] can fail: its name must be valid and must
    /// not be one of the standard names.
    pub(crate) fn check(&self) -> Result<(), Error> {
        let Severity::Custom(name) = self else {
            return Ok(());
        };
        if !is_valid_name(name) {
            return Err(Error::new(
                ErrorKind::InvalidSeverity,
                format!("'{}' is not a valid severity name", name.escape_debug()),
            ));
        }
        if standard(name).is_some() {
            return Err(Error::new(
                ErrorKind::InvalidSeverity,
                format!("custom severity '{}' shadows a standard level", name),
            ));
        }
        Ok(())
    }

    /// Returns the stable serialized name.
    pub fn name(&self) -> &str {
        match self {
            Severity::Severe => "SEVERE",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Config => "CONFIG",
            Severity::Fine => "FINE",
            Severity::Finer => "FINER",
            Severity::Finest => "FINEST",
            Severity::Custom(name) => name,
        }
    }

    /// The `tracing` level a message of this severity is logged at.
    pub fn tracing_level(&self) -> tracing::Level {
        match self {
            Severity::Severe => tracing::Level::ERROR,
            Severity::Warning => tracing::Level::WARN,
            Severity::Info | Severity::Config | Severity::Custom(_) => tracing::Level::INFO,
            Severity::Fine => tracing::Level::DEBUG,
            Severity::Finer | Severity::Finest => tracing::Level::TRACE,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

fn standard(name: &str) -> Option<Severity> {
    match name {
        "SEVERE" => Some(Severity::Severe),
        "WARNING" => Some(Severity::Warning),
        "INFO" => Some(Severity::Info),
        "CONFIG" => Some(Severity::Config),
        "FINE" => Some(Severity::Fine),
        "FINER" => Some(Severity::Finer),
        "FINEST" => Some(Severity::Finest),
        _ => None,
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
