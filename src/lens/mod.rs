// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Modular lenses and the residue vectors they produce.
//!
//! A [`Lens`] is a fixed tuple of positive moduli. Looking at an integer
//! through a lens yields its [`Spectrum`]: the residue modulo each modulus,
//! in order.
//!
//! # Examples
//!
//! ```
//! use residue_telescope::lens::Lens;
//!
//! let lens = Lens::new(vec![6, 8, 9]).unwrap();
//! let spectrum = lens.spectrum_of(25);
//! assert_eq!(spectrum.components(), &[1, 1, 7]);
//! assert_eq!(format!("{}", spectrum), "(1, 1, 7)");
//! ```

pub mod spectrum;

pub use spectrum::Spectrum;

use crate::error::{Result, TelescopeError};
use std::fmt;
use std::str::FromStr;

/// An immutable, validated tuple of strictly positive moduli.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lens {
    moduli: Box<[i64]>,
}

impl Lens {
    /// Create a lens, rejecting an empty list or any modulus `<= 0`.
    pub fn new(moduli: impl Into<Vec<i64>>) -> Result<Self> {
        let moduli = moduli.into();
        if moduli.is_empty() {
            return Err(TelescopeError::validation(
                "a lens needs at least one modulus",
            ));
        }
        if let Some(bad) = moduli.iter().find(|&&m| m <= 0) {
            return Err(TelescopeError::validation(format!(
                "moduli must be positive integers, got {}",
                bad
            )));
        }
        Ok(Self {
            moduli: moduli.into_boxed_slice(),
        })
    }

    /// The moduli, in lens order.
    pub fn moduli(&self) -> &[i64] {
        &self.moduli
    }

    /// Number of moduli, which is also the length of every spectrum.
    pub fn dimension(&self) -> usize {
        self.moduli.len()
    }

    /// Residue vector of `n`.
    ///
    /// Uses the Euclidean remainder, so every component lies in
    /// `[0, moduli[i])` for negative `n` as well.
    pub fn spectrum_of(&self, n: i64) -> Spectrum {
        Spectrum::from_residues(self.moduli.iter().map(|&m| n.rem_euclid(m) as u64))
    }
}

/// Parse a list of modulus tokens into a lens.
///
/// Each token may itself hold several moduli separated by commas, so both
/// `["6", "8", "9"]` and `["6,8,9"]` are accepted.
pub fn parse_moduli<S: AsRef<str>>(tokens: &[S]) -> Result<Lens> {
    let mut moduli = Vec::new();
    for token in tokens {
        for part in token
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
        {
            let m = part.parse::<i64>().map_err(|_| {
                TelescopeError::validation(format!("modulus '{}' is not an integer", part))
            })?;
            moduli.push(m);
        }
    }
    Lens::new(moduli)
}

impl FromStr for Lens {
    type Err = TelescopeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_moduli(&[s])
    }
}

impl fmt::Display for Lens {
    /// Format as "mod(6, 8, 9)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mod(")?;
        for (i, m) in self.moduli.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, ")")
    }
}
