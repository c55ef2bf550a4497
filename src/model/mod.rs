//! Dispatcher domain model: vehicle assignments, routes, employees and
//! vehicles, plus the filter and statistics shapes used when listing them.
//! Display helpers reproduce the reference-table conventions of the dispatch
//! office (tab numbers, state plates, shift labels).

mod assignment;
mod employee;
mod route;
mod vehicle;

pub use assignment::{Assignment, AssignmentStatus, ShiftType};
pub use employee::Employee;
pub use route::Route;
pub use vehicle::{Vehicle, VehicleStatus};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignmentFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub route_number: Option<u32>,
    pub shift: Option<String>,
    pub assignment_date: Option<chrono::NaiveDate>,
    pub driver_name: Option<String>,
    pub status: Option<AssignmentStatus>,
    pub brigade: Option<String>,
    pub application_number: Option<String>,
    pub vehicle_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub route_type: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehicleFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub vehicle_type: Option<String>,
    pub route_number: Option<u32>,
    pub status: Option<VehicleStatus>,
    pub is_active: Option<bool>,
}

/// Per-shift assignment counts for the daily summary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShiftCounts {
    pub shift_1: u32,
    pub shift_2: u32,
    pub shift_3: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatcherStats {
    pub total_assignments: u32,
    pub active_assignments: u32,
    pub completed_assignments: u32,
    pub total_routes: u32,
    pub total_drivers: u32,
    pub total_vehicles: u32,
    pub shifts: ShiftCounts,
    pub date: chrono::NaiveDate,
}
