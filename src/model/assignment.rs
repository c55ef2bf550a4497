use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Work shift of an assignment, stored as "1"/"2"/"3" in the source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftType {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl ShiftType {
    pub fn value(&self) -> &'static str {
        match self {
            ShiftType::First => "1",
            ShiftType::Second => "2",
            ShiftType::Third => "3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::First => "1-я смена",
            ShiftType::Second => "2-я смена",
            ShiftType::Third => "3-я смена",
        }
    }
}

/// Daily vehicle assignment (наряд). Field names follow the dispatch-office
/// charging sheet; most columns are optional because historical rows are
/// sparsely filled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u32,

    // Date and brigade
    pub assignment_date: NaiveDate,
    pub month: Option<u8>,
    pub brigade: Option<String>,
    pub shift: Option<String>,

    // Application and address
    pub application_number: Option<String>,
    pub address: Option<String>,

    // Route
    pub route_number: u32,
    pub route_type: Option<String>,
    pub internal_number: Option<String>,

    // Fuel
    pub fuel_route: Option<String>,
    pub fuel_address: Option<String>,

    // Waybills
    pub driver_waybill: Option<String>,
    pub waybill_number: Option<String>,

    // Working hour marks (five periods on the sheet)
    pub hour1: Option<NaiveTime>,
    pub hour2: Option<NaiveTime>,
    pub hour3: Option<NaiveTime>,
    pub hour4: Option<NaiveTime>,
    pub hour5: Option<NaiveTime>,

    // Departure/return and end-of-shift marks
    pub departure_vzd: Option<NaiveTime>,
    pub departure_zgd: Option<NaiveTime>,
    pub end_kb: Option<NaiveTime>,
    pub break_1: Option<NaiveTime>,
    pub break_2: Option<NaiveTime>,
    pub profit_start: Option<NaiveTime>,
    pub profit_end: Option<NaiveTime>,

    // Vehicle
    pub vehicle_number: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_bedt: Option<String>,
    pub coal_info: Option<String>,
    pub vehicle_type_pc: Option<String>,
    pub state_number_pc: Option<String>,

    // Crew
    pub driver_tab_number: Option<u32>,
    pub driver_name: Option<String>,
    pub conductor_tab_number: Option<u32>,
    pub conductor_name: Option<String>,

    // Standard schedule
    pub departure_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
    pub route_endpoint: Option<String>,

    pub status: AssignmentStatus,
    pub notes: Option<String>,
}

impl Assignment {
    /// Human readable assignment name.
    pub fn display_name(&self) -> String {
        format!("Маршрут {}, {}", self.route_number, self.assignment_date.format("%d.%m.%Y"))
    }

    /// Human readable shift, falling back to the raw value for unknown codes.
    pub fn shift_display(&self) -> String {
        match self.shift.as_deref() {
            Some("1") => ShiftType::First.label().to_string(),
            Some("2") => ShiftType::Second.label().to_string(),
            Some("3") => ShiftType::Third.label().to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Summary of the filled working-hour marks, `None` when the sheet has none.
    pub fn working_hours_summary(&self) -> Option<String> {
        let marks = [self.hour1, self.hour2, self.hour3, self.hour4, self.hour5];
        let parts: Vec<String> = marks
            .iter()
            .enumerate()
            .filter_map(|(i, h)| h.map(|t| format!("Час{}: {}", i + 1, t.format("%H:%M"))))
            .collect();
        if parts.is_empty() { None } else { Some(parts.join("; ")) }
    }

    pub fn breaks_summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(t) = self.break_1 {
            parts.push(format!("Перерыв 1: {}", t.format("%H:%M")));
        }
        if let Some(t) = self.break_2 {
            parts.push(format!("Перерыв 2: {}", t.format("%H:%M")));
        }
        if parts.is_empty() { None } else { Some(parts.join("; ")) }
    }

    /// Complete vehicle information from the sheet columns.
    pub fn full_vehicle_info(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(n) = &self.vehicle_number {
            parts.push(format!("№{}", n));
        }
        if let Some(m) = &self.vehicle_model {
            parts.push(m.clone());
        }
        if let Some(s) = &self.state_number_pc {
            parts.push(format!("г/н {}", s));
        }
        if parts.is_empty() { None } else { Some(parts.join(" - ")) }
    }
}
