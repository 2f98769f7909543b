use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde form is the same string as `as_str`, so a value echoed over
/// IPC always parses back through `FromStr`.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(StoreError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Severity {
    Critical => "critical",
    Warning => "warning",
});

str_enum!(DistrictHealth {
    Critical => "critical",
    Warning => "warning",
    Normal => "normal",
});

str_enum!(TrendDirection {
    Up => "up",
    Down => "down",
});

str_enum!(AlertAction {
    Resolve => "resolve",
    Escalate => "escalate",
    MarkFalse => "mark_false",
});

str_enum!(TimeRange {
    Last7 => "7",
    Last30 => "30",
    Last90 => "90",
});

str_enum!(ActiveTab {
    Alerts => "alerts",
    Dashboard => "dashboard",
    Profile => "profile",
});
