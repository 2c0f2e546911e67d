use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Alarm severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum AlarmLevel {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl AlarmLevel {
    pub const ALL: [AlarmLevel; 4] = [
        AlarmLevel::Low,
        AlarmLevel::Medium,
        AlarmLevel::High,
        AlarmLevel::Critical,
    ];

    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for AlarmLevel {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AlarmLevel::Low),
            2 => Ok(AlarmLevel::Medium),
            3 => Ok(AlarmLevel::High),
            4 => Ok(AlarmLevel::Critical),
            other => Err(CoreError::InvalidLevel(other)),
        }
    }
}

impl From<AlarmLevel> for i64 {
    fn from(level: AlarmLevel) -> Self {
        level.as_i64()
    }
}

impl std::fmt::Display for AlarmLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlarmLevel::Low => write!(f, "low"),
            AlarmLevel::Medium => write!(f, "medium"),
            AlarmLevel::High => write!(f, "high"),
            AlarmLevel::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_range_is_closed() {
        assert!(AlarmLevel::try_from(0).is_err());
        assert!(AlarmLevel::try_from(5).is_err());
        assert!(AlarmLevel::try_from(-1).is_err());
        for (raw, level) in (1..=4).zip(AlarmLevel::ALL) {
            assert_eq!(AlarmLevel::try_from(raw).unwrap(), level);
            assert_eq!(i64::from(level), raw);
        }
    }

    #[test]
    fn level_serializes_as_integer() {
        let json = serde_json::to_string(&AlarmLevel::High).unwrap();
        assert_eq!(json, "3");
        let back: AlarmLevel = serde_json::from_str("4").unwrap();
        assert_eq!(back, AlarmLevel::Critical);
        assert!(serde_json::from_str::<AlarmLevel>("9").is_err());
    }
}
