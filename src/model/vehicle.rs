use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Active,
    Repair,
    Maintenance,
    Decommissioned,
    Reserve,
}

impl VehicleStatus {
    /// Human readable status label.
    pub fn display(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "В работе",
            VehicleStatus::Repair => "В ремонте",
            VehicleStatus::Maintenance => "На ТО",
            VehicleStatus::Decommissioned => "Списан",
            VehicleStatus::Reserve => "Резерв",
        }
    }
}

/// Reference-table rolling stock record (sprpe).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub internal_number: String,
    pub state_number: Option<String>,

    pub vehicle_type: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub year: Option<u16>,

    pub capacity: Option<u32>,
    pub fuel_type: Option<String>,
    pub engine_type: Option<String>,

    pub route_number: Option<u32>,
    pub depot: Option<String>,
    pub garage_number: Option<String>,

    pub status: VehicleStatus,
    pub is_active: bool,

    pub acquisition_date: Option<NaiveDate>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,

    pub notes: Option<String>,
    pub description: Option<String>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        match &self.model {
            Some(model) => format!("№{} - {}", self.internal_number, model),
            None => format!("ПС №{}", self.internal_number),
        }
    }

    /// Internal number, model and state plate joined for full identification.
    pub fn full_name(&self) -> String {
        let mut parts = vec![format!("№{}", self.internal_number)];
        if let Some(model) = &self.model {
            parts.push(model.clone());
        }
        if let Some(state) = &self.state_number {
            parts.push(format!("г/н {}", state));
        }
        parts.join(" - ")
    }

    pub fn status_display(&self) -> &'static str {
        self.status.display()
    }
}
