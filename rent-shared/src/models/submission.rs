use serde::{Deserialize, Serialize};

use crate::pii::Masked;

/// Which intake form a payload came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Booking,
    Contact,
}

impl SubmissionKind {
    /// Top-level key carrying the payload in request bodies and stored files.
    pub fn payload_key(&self) -> &'static str {
        match self {
            SubmissionKind::Booking => "booking",
            SubmissionKind::Contact => "contact",
        }
    }

    /// Filename seed used when the submitter gave no name.
    pub fn default_seed(&self) -> &'static str {
        match self {
            SubmissionKind::Booking => "guest",
            SubmissionKind::Contact => "anon",
        }
    }
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.payload_key())
    }
}

/// A wall-clock moment as the booking form renders it: `2025-01-01` / `2:00 PM`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub check_in: Slot,
    pub check_out: Slot,
    pub guests: u32,
    pub name: String,
    pub mobile: Masked<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: Masked<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_wire_shape_is_camel_case() {
        let booking = BookingSubmission {
            check_in: Slot { date: "2025-01-01".into(), time: "2:00 PM".into() },
            check_out: Slot { date: "2025-01-02".into(), time: "2:00 PM".into() },
            guests: 2,
            name: "Ali".into(),
            mobile: Masked("+92-300-1111111".to_string()),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["checkIn"]["date"], "2025-01-01");
        assert_eq!(value["checkOut"]["time"], "2:00 PM");
        assert_eq!(value["guests"], 2);
        assert_eq!(value["mobile"], "+92-300-1111111");
        assert!(value.get("check_in").is_none());
    }

    #[test]
    fn test_contact_mobile_is_optional_on_the_wire() {
        let contact: ContactSubmission = serde_json::from_value(json!({
            "name": "Sara",
            "email": "sara@example.com",
            "message": "Is the apartment free in May?"
        }))
        .unwrap();

        assert_eq!(contact.mobile.expose(), "");
    }

    #[test]
    fn test_debug_output_hides_phone_numbers() {
        let booking: BookingSubmission = serde_json::from_value(json!({
            "checkIn": { "date": "2025-01-01", "time": "2:00 PM" },
            "checkOut": { "date": "2025-01-02", "time": "2:00 PM" },
            "guests": 2,
            "name": "Ali",
            "mobile": "+92-300-1111111"
        }))
        .unwrap();
        assert_eq!(booking.mobile.expose(), "+92-300-1111111");
        let logged = format!("{:?}", booking);
        assert!(logged.contains("Ali"));
        assert!(!logged.contains("1111111"));

        let contact = ContactSubmission {
            name: "Sara".into(),
            mobile: Masked("+92 333 2222222".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", contact).contains("2222222"));
    }

    #[test]
    fn test_kind_keys_and_seeds() {
        assert_eq!(SubmissionKind::Booking.payload_key(), "booking");
        assert_eq!(SubmissionKind::Contact.payload_key(), "contact");
        assert_eq!(SubmissionKind::Booking.default_seed(), "guest");
        assert_eq!(SubmissionKind::Contact.default_seed(), "anon");
        assert_eq!(SubmissionKind::Contact.to_string(), "contact");
    }
}
