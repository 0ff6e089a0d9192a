//! Content version and template container detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Content document version written by this crate.
pub const CURRENT_VERSION: &str = "1.0";

/// Major version of `content.json` this crate can load.
pub const SUPPORTED_MAJOR: u32 = 1;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// A parsed `major.minor[.patch]` content version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContentVersion {
    /// Major version; must equal [`SUPPORTED_MAJOR`]
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Patch version (0 when omitted)
    pub patch: u32,
}

impl std::fmt::Display for ContentVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parse a version string such as `"1.0"` or `"1.2.3"`.
///
/// # Returns
/// * `Ok(ContentVersion)` if the string is well formed
/// * `Err(Error::Format)` otherwise
pub fn parse_version(version: &str) -> Result<ContentVersion> {
    let parts: Vec<&str> = version.trim().split('.').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(Error::Format(format!("malformed version '{}'", version)));
    }

    let mut numbers = [0u32; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Format(format!("malformed version '{}'", version)));
        }
        *slot = part
            .parse()
            .map_err(|_| Error::Format(format!("malformed version '{}'", version)))?;
    }

    Ok(ContentVersion {
        major: numbers[0],
        minor: numbers[1],
        patch: numbers[2],
    })
}

/// Check that a version string is well formed and has the supported major.
///
/// # Returns
/// * `Ok(ContentVersion)` if the version can be loaded
/// * `Err(Error::Format)` if the string is malformed
/// * `Err(Error::UnsupportedVersion)` if the major version differs
pub fn check_version(version: &str) -> Result<ContentVersion> {
    let parsed = parse_version(version)?;
    if parsed.major != SUPPORTED_MAJOR {
        return Err(Error::UnsupportedVersion(version.to_string()));
    }
    Ok(parsed)
}

/// Check if a version string can be loaded.
pub fn is_supported_version(version: &str) -> bool {
    check_version(version).is_ok()
}

/// Check if bytes start like a ZIP container (the template format).
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.len() >= ZIP_MAGIC.len() && data.starts_with(ZIP_MAGIC)
}

/// Check if a file starts like a ZIP container.
///
/// # Example
/// ```no_run
/// use deckplan::detect::is_zip_file;
///
/// if is_zip_file("template.pptx") {
///     println!("looks like a container");
/// }
/// ```
pub fn is_zip_file<P: AsRef<Path>>(path: P) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader.read_exact(&mut header).is_ok() && is_zip_bytes(&header)
}
