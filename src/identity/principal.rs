use serde::{Deserialize, Serialize};

/// Closed set of role names used by the dispatch office. Navigation metadata
/// and the permission table only ever reference these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    Dispatcher,
    TimekeeperA,
    TimekeeperB,
    DispatcherMain,
    FuelAccountant,
    ParkingManager,
    Mechanic,
    Driver,
    Inspector,
    Analyst,
    SuperAdmin,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Dispatcher => "dispatcher",
            RoleName::TimekeeperA => "timekeeper_a",
            RoleName::TimekeeperB => "timekeeper_b",
            RoleName::DispatcherMain => "dispatcher_main",
            RoleName::FuelAccountant => "fuel_accountant",
            RoleName::ParkingManager => "parking_manager",
            RoleName::Mechanic => "mechanic",
            RoleName::Driver => "driver",
            RoleName::Inspector => "inspector",
            RoleName::Analyst => "analyst",
            RoleName::SuperAdmin => "super_admin",
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role attached to an identity at login time; one role per identity,
/// never mutated after assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub name: RoleName,
    pub display_name: String,
}

/// Basic profile of the authenticated user. Owned exclusively by the session
/// store; replaced wholesale on login/logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: u32,
    pub username: String,
    pub email: String,
}
