// Unit tests for AppointmentStatus
// Checks the label and color table the event cards are painted from

use salon_agenda::models::settings::AgendaSettings;
use salon_agenda::models::status::AppointmentStatus;
use test_case::test_case;

#[test_case(AppointmentStatus::Confirmed, "Confirmed", "#22C55E" ; "confirmed is green")]
#[test_case(AppointmentStatus::Unconfirmed, "Unconfirmed", "#F59E0B" ; "unconfirmed is amber")]
#[test_case(AppointmentStatus::Waiting, "Waiting", "#3B82F6" ; "waiting is blue")]
#[test_case(AppointmentStatus::Cancelled, "Cancelled", "#EF4444" ; "cancelled is red")]
#[test_case(AppointmentStatus::Billed, "Billed", "#8B5CF6" ; "billed is purple")]
#[test_case(AppointmentStatus::Blocked, "Blocked", "#6B7280" ; "blocked is gray")]
fn test_label_and_color(status: AppointmentStatus, label: &str, color: &str) {
    assert_eq!(status.label(), label);
    assert_eq!(status.color(), color);
    assert_eq!(status.to_string(), label);
}

#[test_case("confirmed", AppointmentStatus::Confirmed)]
#[test_case("Waiting", AppointmentStatus::Waiting)]
#[test_case("  billed\n", AppointmentStatus::Billed)]
#[test_case("BLOCKED", AppointmentStatus::Blocked)]
fn test_parse_backend_keys(raw: &str, expected: AppointmentStatus) {
    assert_eq!(raw.parse::<AppointmentStatus>(), Ok(expected));
}

#[test_case("" ; "empty")]
#[test_case("no-show" ; "unsupported key")]
#[test_case("confirmado" ; "localized label")]
fn test_unknown_keys_are_rejected(raw: &str) {
    assert!(raw.parse::<AppointmentStatus>().is_err());
}

#[test]
fn test_colors_are_distinct() {
    let mut colors: Vec<&str> = AppointmentStatus::ALL.iter().map(|s| s.color()).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), AppointmentStatus::ALL.len());
}

#[test]
fn test_new_appointments_default_to_unconfirmed() {
    assert_eq!(AppointmentStatus::default(), AppointmentStatus::Unconfirmed);
    assert_eq!(
        AgendaSettings::default().default_status,
        AppointmentStatus::Unconfirmed
    );
}
