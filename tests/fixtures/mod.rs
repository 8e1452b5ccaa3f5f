// Test fixtures - reusable test data
// Provides consistent agenda snapshots across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use salon_agenda::models::event::AgendaEvent;
use salon_agenda::models::professional::Professional;
use salon_agenda::models::status::AppointmentStatus;
use salon_agenda::services::snapshot::AgendaSnapshot;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Mar 10 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        monday().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample salon data for testing
pub mod salon {
    use super::dates::at;
    use super::*;

    pub fn professionals() -> Vec<Professional> {
        vec![
            Professional::new(3, "Carla Dias").with_avatar("https://cdn.example/carla.png"),
            Professional::new(7, "Rafael Lima"),
            Professional::new(9, "Bia Souza"),
        ]
    }

    pub fn events() -> Vec<AgendaEvent> {
        vec![
            AgendaEvent::appointment(
                42,
                3,
                at(9, 0),
                at(10, 0),
                AppointmentStatus::Confirmed,
                "Maria",
                "Haircut",
            ),
            AgendaEvent::appointment(
                43,
                3,
                at(9, 30),
                at(9, 45),
                AppointmentStatus::Unconfirmed,
                "Joana",
                "Fringe trim",
            ),
            AgendaEvent::appointment(
                44,
                7,
                at(7, 30),
                at(8, 30),
                AppointmentStatus::Waiting,
                "Lúcia",
                "Blow dry",
            ),
            AgendaEvent::appointment(
                45,
                7,
                at(14, 0),
                at(15, 0),
                AppointmentStatus::Cancelled,
                "Pedro",
                "Beard",
            ),
            AgendaEvent::busy_block(90, 9, at(12, 0), at(13, 0), "Lunch"),
        ]
    }

    pub fn snapshot() -> AgendaSnapshot {
        AgendaSnapshot {
            professionals: professionals(),
            events: events(),
        }
    }

    /// Same data as the backend sends it.
    pub const SNAPSHOT_JSON: &str = r##"{
        "professionals": [
            { "id": 3, "name": "Carla Dias", "avatarUrl": "https://cdn.example/carla.png" },
            { "id": 7, "name": "Rafael Lima" }
        ],
        "appointments": [
            {
                "id": 42, "professionalId": 3,
                "startTime": "2025-03-10T09:00:00-03:00", "endTime": "2025-03-10T10:00:00-03:00",
                "status": "confirmed", "clientName": "Maria", "serviceName": "Haircut"
            },
            {
                "id": 44, "professionalId": 7,
                "startTime": "2025-03-10T10:30:00Z", "endTime": "2025-03-10T11:30:00Z",
                "status": "waiting", "clientName": "Lúcia", "serviceName": "Blow dry",
                "color": "#0EA5E9"
            }
        ],
        "busyBlocks": [
            {
                "id": 90, "professionalId": 7,
                "startTime": "2025-03-10T12:00:00", "endTime": "2025-03-10T13:00:00",
                "reason": "Lunch"
            }
        ]
    }"##;
}
