//! Advisor personas.
//!
//! Each persona carries its own topic vocabulary, keyword table, rubric and
//! question bank. Persona selection is a closed enum; string parsing only
//! exists at the boundaries (environment, wire payloads).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The selected advisor role.
///
/// Serialized under the display names the rest of the product uses
/// ("Product Manager", "Shark VC"); the retired "Product PM" spelling is
/// still accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    /// Product-strategy advisor.
    #[serde(rename = "Product Manager", alias = "Product PM")]
    ProductManager,
    /// Investor advisor.
    #[serde(rename = "Shark VC")]
    SharkVc,
}

impl Persona {
    /// All personas, in selector order.
    pub const ALL: [Persona; 2] = [Persona::ProductManager, Persona::SharkVc];

    /// Returns the display name shown in the agent selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::ProductManager => "Product Manager",
            Persona::SharkVc => "Shark VC",
        }
    }

    /// Returns a short blurb describing the persona.
    pub fn description(&self) -> &'static str {
        match self {
            Persona::ProductManager => "Start here - Product strategy insights",
            Persona::SharkVc => "Next step - Brutal investor feedback",
        }
    }

    /// Parses a persona name, falling back to the investor advisor when the
    /// name is unknown.
    ///
    /// The fallback mirrors the product's historical behavior: any selector
    /// value that is not the product persona gets the investor keyword table.
    /// Callers that want unknown names rejected should use [`FromStr`]
    /// instead.
    pub fn from_name_lenient(name: &str) -> Self {
        parse_name(name).unwrap_or(Persona::SharkVc)
    }
}

fn parse_name(name: &str) -> Option<Persona> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("product manager") || name.eq_ignore_ascii_case("product pm") {
        Some(Persona::ProductManager)
    } else if name.eq_ignore_ascii_case("shark vc") {
        Some(Persona::SharkVc)
    } else {
        None
    }
}

impl FromStr for Persona {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(s).ok_or_else(|| AppError::UnknownPersona(s.to_string()))
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Persona::ProductManager.display_name(), "Product Manager");
        assert_eq!(Persona::SharkVc.display_name(), "Shark VC");
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!(
            "Product Manager".parse::<Persona>().unwrap(),
            Persona::ProductManager
        );
        assert_eq!("shark vc".parse::<Persona>().unwrap(), Persona::SharkVc);

        let err = "Growth Guru".parse::<Persona>().unwrap_err();
        assert!(matches!(err, AppError::UnknownPersona(_)));
    }

    #[test]
    fn test_legacy_alias() {
        assert_eq!(
            "Product PM".parse::<Persona>().unwrap(),
            Persona::ProductManager
        );
    }

    #[test]
    fn test_lenient_parse_falls_back_to_investor() {
        assert_eq!(Persona::from_name_lenient("Shark VC"), Persona::SharkVc);
        assert_eq!(
            Persona::from_name_lenient("Product Manager"),
            Persona::ProductManager
        );
        // Unknown selector values degrade to the investor table.
        assert_eq!(Persona::from_name_lenient("Growth Guru"), Persona::SharkVc);
        assert_eq!(Persona::from_name_lenient(""), Persona::SharkVc);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Persona::ProductManager).unwrap();
        assert_eq!(json, "\"Product Manager\"");
        let parsed: Persona = serde_json::from_str("\"Product PM\"").unwrap();
        assert_eq!(parsed, Persona::ProductManager);
    }
}
