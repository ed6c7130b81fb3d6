use crate::error::{RegistrarError, RegistrarResult};
use crate::models::Params;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extra option carrying the DynDNS login for DYNAMIC records
pub const DYNDNS_LOGIN: &str = "DynDnsLogin";

/// Extra option carrying the DynDNS password for DYNAMIC records
pub const DYNDNS_PASSWORD: &str = "DynDnsPassword";

/// DNS record types accepted by the registrar
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    AAAA,
    /// Value is maintained out-of-band through a DynDNS login
    DYNAMIC,
    CNAME,
    MX,
    SRV,
    TXT,
    NS,
}

impl DnsRecordType {
    pub const ALL: [DnsRecordType; 8] = [
        DnsRecordType::A,
        DnsRecordType::AAAA,
        DnsRecordType::DYNAMIC,
        DnsRecordType::CNAME,
        DnsRecordType::MX,
        DnsRecordType::SRV,
        DnsRecordType::TXT,
        DnsRecordType::NS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DnsRecordType::A => "A",
            DnsRecordType::AAAA => "AAAA",
            DnsRecordType::DYNAMIC => "DYNAMIC",
            DnsRecordType::CNAME => "CNAME",
            DnsRecordType::MX => "MX",
            DnsRecordType::SRV => "SRV",
            DnsRecordType::TXT => "TXT",
            DnsRecordType::NS => "NS",
        }
    }

    /// Whether records of this type must carry a value when added or updated
    pub fn requires_value(&self) -> bool {
        !matches!(self, DnsRecordType::DYNAMIC)
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for DnsRecordType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for DnsRecordType {
    type Err = RegistrarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DnsRecordType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                RegistrarError::InvalidArgument(format!(
                    "Unknown DNS record type {:?}; accepted values are A, AAAA, DYNAMIC, CNAME, MX, SRV, TXT and NS",
                    s
                ))
            })
    }
}

/// Which record operation is being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOperation {
    Add,
    Remove,
    Update,
}

/// Check a record request before it goes on the wire.
///
/// Remove only needs a known type; a missing value there means every record
/// of that type under the name.
pub fn validate_record(
    operation: RecordOperation,
    record_type: &str,
    value: Option<&str>,
    extra: &Params,
) -> RegistrarResult<DnsRecordType> {
    let record_type: DnsRecordType = record_type.parse()?;

    if operation == RecordOperation::Remove {
        return Ok(record_type);
    }

    if record_type.requires_value() && value.is_none_or(str::is_empty) {
        return Err(RegistrarError::InvalidArgument(format!(
            "{} records must have a value",
            record_type
        )));
    }

    if record_type == DnsRecordType::DYNAMIC
        && !(extra.contains_key(DYNDNS_LOGIN) && extra.contains_key(DYNDNS_PASSWORD))
    {
        return Err(RegistrarError::InvalidArgument(format!(
            "{} and {} are required when record type is DYNAMIC",
            DYNDNS_LOGIN, DYNDNS_PASSWORD
        )));
    }

    Ok(record_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dyndns_options() -> Params {
        Params::from([
            (DYNDNS_LOGIN.to_string(), "user".to_string()),
            (DYNDNS_PASSWORD.to_string(), "pass".to_string()),
        ])
    }

    #[test]
    fn test_parse_known_types() {
        for t in DnsRecordType::ALL {
            assert_eq!(t.as_str().parse::<DnsRecordType>().unwrap(), t);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("a".parse::<DnsRecordType>().is_err());
        assert!(matches!(
            "BOGUS".parse::<DnsRecordType>(),
            Err(RegistrarError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_value_required_except_dynamic() {
        let err = validate_record(RecordOperation::Add, "A", None, &Params::new()).unwrap_err();
        assert!(matches!(err, RegistrarError::InvalidArgument(_)));

        let err =
            validate_record(RecordOperation::Update, "TXT", Some(""), &Params::new()).unwrap_err();
        assert!(matches!(err, RegistrarError::InvalidArgument(_)));

        let ok = validate_record(RecordOperation::Add, "DYNAMIC", None, &dyndns_options());
        assert_eq!(ok.unwrap(), DnsRecordType::DYNAMIC);
    }

    #[test]
    fn test_dynamic_needs_both_credentials() {
        let mut partial = Params::new();
        partial.insert(DYNDNS_LOGIN.to_string(), "user".to_string());

        for op in [RecordOperation::Add, RecordOperation::Update] {
            assert!(validate_record(op, "DYNAMIC", None, &Params::new()).is_err());
            assert!(validate_record(op, "DYNAMIC", None, &partial).is_err());
        }
    }

    #[test]
    fn test_remove_only_checks_type() {
        assert_eq!(
            validate_record(RecordOperation::Remove, "MX", None, &Params::new()).unwrap(),
            DnsRecordType::MX
        );
        assert_eq!(
            validate_record(RecordOperation::Remove, "DYNAMIC", None, &Params::new()).unwrap(),
            DnsRecordType::DYNAMIC
        );
        assert!(validate_record(RecordOperation::Remove, "SOA", None, &Params::new()).is_err());
    }
}
