//! In-memory model of the generated checksum enum

use std::collections::HashSet;

use crate::error::FlysumError;
use crate::scanner::FileReference;

use super::{is_java_identifier, is_rust_identifier, Target};

/// Fully-qualified name of the generated enum when none is configured
pub const DEFAULT_TYPE_NAME: &str = "io.github.agileek.flyway.JavaMigrationChecksums";

/// Identifier and checksum of one migration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumRecord {
    pub identifier: String,
    /// CRC-32 with its bit pattern kept in a signed integer
    pub checksum: i32,
}

impl ChecksumRecord {
    #[must_use]
    pub fn new(identifier: impl Into<String>, checksum: i32) -> Self {
        Self {
            identifier: identifier.into(),
            checksum,
        }
    }

    /// Read a file and build its record
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_file(file: &FileReference) -> Result<Self, FlysumError> {
        let crc = file.compute_checksum()?;
        // Bit pattern preserved; values above i32::MAX become negative
        Ok(Self::new(file.identifier(), crc as i32))
    }

    /// The checksum as the unsigned CRC-32 value
    #[must_use]
    pub const fn unsigned(&self) -> u32 {
        self.checksum as u32
    }
}

/// One constant of the generated enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub value: i32,
}

/// Generated enum: one private `int` field set by a private constructor,
/// a public accessor returning it, and one constant per migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumModel {
    /// Package segments, outermost first; may be empty
    pub package: Vec<String>,
    pub name: String,
    pub field: String,
    pub accessor: String,
    pub constants: Vec<EnumConstant>,
}

impl EnumModel {
    /// Create an empty enum from a fully-qualified name such as
    /// `io.github.agileek.flyway.JavaMigrationChecksums`
    ///
    /// # Errors
    /// Returns [`FlysumError::InvalidTypeName`] if the name or a package
    /// segment is empty.
    pub fn new(
        qualified_name: &str,
        field: impl Into<String>,
        accessor: impl Into<String>,
    ) -> Result<Self, FlysumError> {
        let (package, name): (Vec<String>, &str) = match qualified_name.rsplit_once('.') {
            Some((package, name)) => (package.split('.').map(str::to_string).collect(), name),
            None => (Vec::new(), qualified_name),
        };

        if name.is_empty() || package.iter().any(String::is_empty) {
            return Err(FlysumError::InvalidTypeName(qualified_name.to_string()));
        }

        Ok(Self {
            package,
            name: name.to_string(),
            field: field.into(),
            accessor: accessor.into(),
            constants: Vec::new(),
        })
    }

    /// Build the checksum enum with one constant per record, in order
    ///
    /// # Errors
    /// Returns an error if the type name is malformed.
    pub fn checksums(qualified_name: &str, records: &[ChecksumRecord]) -> Result<Self, FlysumError> {
        let mut model = Self::new(qualified_name, "checksum", "getChecksum")?;
        for record in records {
            model.add_constant(record.identifier.clone(), record.checksum);
        }
        Ok(model)
    }

    /// Append a constant
    pub fn add_constant(&mut self, name: impl Into<String>, value: i32) {
        self.constants.push(EnumConstant {
            name: name.into(),
            value,
        });
    }

    /// Dot-separated package and name
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package.join("."), self.name)
        }
    }

    /// Check that every name in the model is usable in `target`'s source
    ///
    /// # Errors
    /// Returns [`FlysumError::InvalidTypeName`] for a bad type or package
    /// name, [`FlysumError::InvalidConstantName`] for a constant that is not
    /// an identifier or clashes with a generated member, and
    /// [`FlysumError::DuplicateConstant`] when two constants share a name.
    pub fn validate(&self, target: Target) -> Result<(), FlysumError> {
        let type_name_ok = match target {
            Target::Java => self
                .package
                .iter()
                .chain(std::iter::once(&self.name))
                .all(|segment| is_java_identifier(segment)),
            Target::Rust => is_rust_identifier(&self.name),
        };
        if !type_name_ok {
            return Err(FlysumError::InvalidTypeName(self.qualified_name()));
        }

        let reserved = target.reserved_members(self);
        let mut seen = HashSet::new();
        for constant in &self.constants {
            if !target.is_identifier(&constant.name) || reserved.contains(&constant.name) {
                return Err(FlysumError::InvalidConstantName {
                    name: constant.name.clone(),
                    target,
                });
            }
            if !seen.insert(constant.name.as_str()) {
                return Err(FlysumError::DuplicateConstant {
                    name: constant.name.clone(),
                });
            }
        }
        Ok(())
    }
}
