use super::record::{Record, RecordId};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

impl UnitStatus {
    pub const ALL: [UnitStatus; 3] = [
        UnitStatus::Available,
        UnitStatus::Occupied,
        UnitStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Occupied => "occupied",
            UnitStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStatus {
                kind: "unit",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(rename = "unitId")]
    pub id: RecordId,
    pub unit_number: String,
    pub building: String,
    pub status: UnitStatus,
}

impl Unit {
    /// Human label used wherever a unit is referenced ("101 - North Wing")
    pub fn label(&self) -> String {
        format!("{} - {}", self.unit_number, self.building)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDraft {
    pub unit_number: String,
    pub building: String,
    pub status: UnitStatus,
}

impl Record for Unit {
    type Draft = UnitDraft;

    const COLLECTION: &'static str = "units";
    const NOUN: &'static str = "Unit";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_status_parse() {
        assert_eq!("occupied".parse::<UnitStatus>(), Ok(UnitStatus::Occupied));
        assert_eq!("Maintenance".parse::<UnitStatus>(), Ok(UnitStatus::Maintenance));
        assert!("vacant".parse::<UnitStatus>().is_err());
    }

    #[test]
    fn test_unit_deserializes_lowercase_status() {
        let json = r#"{"unitId": 3, "unitNumber": "201A", "building": "North", "status": "maintenance"}"#;
        let unit: Unit = serde_json::from_str(json).unwrap();

        assert_eq!(unit.status, UnitStatus::Maintenance);
        assert_eq!(unit.label(), "201A - North");
    }
}
