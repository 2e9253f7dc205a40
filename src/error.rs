//! Crate-level error types.

use std::fmt;

/// Errors produced by the molscope crate.
#[derive(Debug)]
pub enum MolscopeError {
    /// A bond references an atom outside the graph, or links an atom to
    /// itself.
    InvalidBond {
        /// Position of the offending bond in the bond sequence.
        bond: usize,
        /// First endpoint index.
        from: usize,
        /// Second endpoint index.
        to: usize,
        /// Number of atoms in the graph the bond was checked against.
        atom_count: usize,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Frame or graph serialization failure.
    Serialize(String),
}

impl fmt::Display for MolscopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBond {
                bond,
                from,
                to,
                atom_count,
            } => write!(
                f,
                "bond {bond} ({from}-{to}) is invalid for a graph of \
                 {atom_count} atoms"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for MolscopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MolscopeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn invalid_bond_message_names_endpoints() {
        let err = MolscopeError::InvalidBond {
            bond: 2,
            from: 1,
            to: 7,
            atom_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "bond 2 (1-7) is invalid for a graph of 4 atoms"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_errors_chain_their_source() {
        let err: MolscopeError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
