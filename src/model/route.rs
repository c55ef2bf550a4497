use serde::{Deserialize, Serialize};

/// Reference-table transit route record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub id: u32,
    pub number: u32,
    pub name: Option<String>,
    pub start_point: Option<String>,
    pub end_point: Option<String>,
    pub route_type: Option<String>,
    pub distance: Option<f64>,
    pub travel_time: Option<u32>,
    pub first_departure: Option<String>,
    pub last_departure: Option<String>,
    pub interval_peak: Option<u32>,
    pub interval_normal: Option<u32>,
    pub depot: Option<String>,
    pub fuel_address: Option<String>,
    pub garage_address: Option<String>,
    pub is_active: bool,
    pub description: Option<String>,
    pub notes: Option<String>,
}

impl Route {
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => format!("№{} - {}", self.number, name),
            None => format!("Маршрут №{}", self.number),
        }
    }

    /// Endpoint pair when both are known, otherwise the display name.
    pub fn route_info(&self) -> String {
        match (&self.start_point, &self.end_point) {
            (Some(start), Some(end)) => format!("{} - {}", start, end),
            _ => self.display_name(),
        }
    }
}
