use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// A rendered notification, ready for any mail transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Outbound notification port. Failures are reported to the caller, who decides
/// whether they matter; the intake service never lets them escape.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        notification: &Notification,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Renders a notification from a raw intake payload.
pub type Formatter = fn(&Value) -> Notification;

pub fn format_booking(payload: &Value) -> Notification {
    let name = field(payload, "name");
    let rows = vec![
        ("Name", name.clone()),
        ("Mobile", field(payload, "mobile")),
        ("Guests", field(payload, "guests")),
        ("Check-in", slot(payload, "checkIn")),
        ("Check-out", slot(payload, "checkOut")),
    ];
    render(format!("New booking request from {}", name), "New booking request", &rows)
}

pub fn format_contact(payload: &Value) -> Notification {
    let name = field(payload, "name");
    let rows = vec![
        ("Name", name.clone()),
        ("Email", field(payload, "email")),
        ("Mobile", field(payload, "mobile")),
        ("Message", field(payload, "message")),
    ];
    render(format!("New contact message from {}", name), "New contact message", &rows)
}

fn render(subject: String, heading: &str, rows: &[(&str, String)]) -> Notification {
    let mut text = format!("{}\n\n", heading);
    let mut html = format!("<h2>{}</h2>\n<table>\n", escape_html(heading));

    for (label, value) in rows {
        text.push_str(&format!("{}: {}\n", label, value));
        html.push_str(&format!(
            "  <tr><th align=\"left\">{}</th><td>{}</td></tr>\n",
            label,
            escape_html(value)
        ));
    }
    html.push_str("</table>\n");

    Notification { subject, text, html }
}

fn field(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => "-".to_string(),
    }
}

fn slot(payload: &Value, key: &str) -> String {
    match payload.get(key) {
        Some(slot) => format!("{} {}", field(slot, "date"), field(slot, "time")),
        None => "-".to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_notification() {
        let n = format_booking(&json!({
            "name": "Ali",
            "mobile": "+92-300-1111111",
            "guests": 2,
            "checkIn": { "date": "2025-01-01", "time": "2:00 PM" },
            "checkOut": { "date": "2025-01-02", "time": "2:00 PM" }
        }));

        assert_eq!(n.subject, "New booking request from Ali");
        assert!(n.text.contains("Guests: 2\n"));
        assert!(n.text.contains("Check-in: 2025-01-01 2:00 PM\n"));
        assert!(n.text.contains("Check-out: 2025-01-02 2:00 PM\n"));
        assert!(n.html.contains("<td>+92-300-1111111</td>"));
    }

    #[test]
    fn test_contact_notification_escapes_html() {
        let n = format_contact(&json!({
            "name": "Sara",
            "email": "sara@example.com",
            "message": "<b>hi</b> & bye"
        }));

        assert_eq!(n.subject, "New contact message from Sara");
        assert!(n.text.contains("Message: <b>hi</b> & bye\n"));
        assert!(n.text.contains("Mobile: -\n"));
        assert!(n.html.contains("&lt;b&gt;hi&lt;/b&gt; &amp; bye"));
    }

    #[test]
    fn test_missing_fields_render_as_dash() {
        let n = format_booking(&json!({}));
        assert_eq!(n.subject, "New booking request from -");
        assert!(n.text.contains("Check-in: -\n"));
    }
}
