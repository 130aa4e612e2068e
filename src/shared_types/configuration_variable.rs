use std::fmt;

// -----------------------------------------------------------------------------
// ----- ConfigurationVariable -------------------------------------------------

/// Run-time parameters the server reports through `ParameterStatus`.
///
/// Names the server sends that are not listed here land in `Unknown`, keeping
/// the literal name so nothing is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigurationVariable {
    ApplicationName,
    ClientEncoding,
    DateStyle,
    DefaultTransactionReadOnly,
    InHotStandby,
    IntegerDatetimes,
    IntervalStyle,
    IsSuperuser,
    ScramIterations,
    SearchPath,
    ServerEncoding,
    ServerVersion,
    SessionAuthorization,
    StandardConformingStrings,
    TimeZone,
    /// A name not listed above. `from_name` and `canonical` never produce
    /// this for a listed name.
    Unknown(String),
}

// -----------------------------------------------------------------------------
// ----- ConfigurationVariable: Static -----------------------------------------

impl ConfigurationVariable {
    pub fn from_name(name: &str) -> Self {
        use ConfigurationVariable::*;

        match name {
            "application_name" => ApplicationName,
            "client_encoding" => ClientEncoding,
            "DateStyle" => DateStyle,
            "default_transaction_read_only" => DefaultTransactionReadOnly,
            "in_hot_standby" => InHotStandby,
            "integer_datetimes" => IntegerDatetimes,
            "IntervalStyle" => IntervalStyle,
            "is_superuser" => IsSuperuser,
            "scram_iterations" => ScramIterations,
            "search_path" => SearchPath,
            "server_encoding" => ServerEncoding,
            "server_version" => ServerVersion,
            "session_authorization" => SessionAuthorization,
            "standard_conforming_strings" => StandardConformingStrings,
            "TimeZone" => TimeZone,
            other => Unknown(other.to_string()),
        }
    }

    /// Fold an `Unknown` spelling of a listed name back to its variant, so a
    /// hand-built value compares equal to what the decoder produces.
    pub fn canonical(self) -> Self {
        match self {
            ConfigurationVariable::Unknown(name) => Self::from_name(&name),
            known => known,
        }
    }
}

// -----------------------------------------------------------------------------
// ----- ConfigurationVariable: Public -----------------------------------------

impl ConfigurationVariable {
    /// Name exactly as the server spells it.
    pub fn name(&self) -> &str {
        use ConfigurationVariable::*;

        match self {
            ApplicationName => "application_name",
            ClientEncoding => "client_encoding",
            DateStyle => "DateStyle",
            DefaultTransactionReadOnly => "default_transaction_read_only",
            InHotStandby => "in_hot_standby",
            IntegerDatetimes => "integer_datetimes",
            IntervalStyle => "IntervalStyle",
            IsSuperuser => "is_superuser",
            ScramIterations => "scram_iterations",
            SearchPath => "search_path",
            ServerEncoding => "server_encoding",
            ServerVersion => "server_version",
            SessionAuthorization => "session_authorization",
            StandardConformingStrings => "standard_conforming_strings",
            TimeZone => "TimeZone",
            Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ConfigurationVariable::Unknown(_))
    }
}

impl fmt::Display for ConfigurationVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// ----- Tests -----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_roundtrip() {
        for name in [
            "server_version",
            "client_encoding",
            "DateStyle",
            "TimeZone",
            "integer_datetimes",
            "standard_conforming_strings",
        ] {
            let var = ConfigurationVariable::from_name(name);
            assert!(var.is_known(), "{name}");
            assert_eq!(var.name(), name);
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(
            ConfigurationVariable::from_name("datestyle"),
            ConfigurationVariable::Unknown("datestyle".into())
        );
    }

    #[test]
    fn canonical_folds_listed_names() {
        assert_eq!(
            ConfigurationVariable::Unknown("TimeZone".into()).canonical(),
            ConfigurationVariable::TimeZone
        );
        assert_eq!(
            ConfigurationVariable::Unknown("my.custom_guc".into()).canonical(),
            ConfigurationVariable::Unknown("my.custom_guc".into())
        );
        assert_eq!(
            ConfigurationVariable::SearchPath.canonical(),
            ConfigurationVariable::SearchPath
        );
    }

    #[test]
    fn unknown_keeps_literal_name() {
        let var = ConfigurationVariable::from_name("my.custom_guc");
        assert!(!var.is_known());
        assert_eq!(var.to_string(), "my.custom_guc");
    }
}

// -----------------------------------------------------------------------------
// -----------------------------------------------------------------------------
