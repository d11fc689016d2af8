//! Display helpers for event cards

use crate::models::{
    event::{Event, EventLocation, TicketInfo},
    EventCategory, LocationKind,
};

/// Label for a category code; unknown codes are returned unchanged
pub fn category_label(code: &str) -> &str {
    match code.parse::<EventCategory>() {
        Ok(category) => category.label(),
        Err(_) => code,
    }
}

pub fn location_label(location: Option<&EventLocation>) -> String {
    let Some(location) = location else {
        return "Location TBD".to_string();
    };

    let venue_name = location.venue.as_ref().and_then(|v| v.name.as_deref());
    let city = location.address.as_ref().and_then(|a| a.city.as_deref());

    match (location.kind, venue_name, city) {
        (LocationKind::Venue, Some(name), _) => name.to_string(),
        (LocationKind::Attraction, _, _) if location.attraction.is_some() => "At attraction".to_string(),
        (LocationKind::Online, _, _) => "Online event".to_string(),
        (_, _, Some(city)) => city.to_string(),
        _ => "Location TBD".to_string(),
    }
}

/// Badge text for ticketing, `None` when there is nothing to show
pub fn ticket_label(ticket: Option<&TicketInfo>) -> Option<String> {
    let ticket = ticket?;
    if ticket.is_free {
        return Some("Free".to_string());
    }
    if let (Some(price), Some(currency)) = (ticket.price, ticket.currency.as_deref()) {
        return Some(format!("{} {}", price, currency));
    }
    if ticket.registration_required {
        return Some("Registration required".to_string());
    }
    None
}

/// "All day", a same-day time span or a multi-day date span (UTC)
pub fn time_window(event: &Event) -> String {
    if event.all_day {
        return "All day".to_string();
    }
    if event.start_date.date_naive() == event.end_date.date_naive() {
        format!(
            "{} – {}",
            event.start_date.format("%H:%M"),
            event.end_date.format("%H:%M")
        )
    } else {
        format!(
            "{} – {}",
            event.start_date.format("%b %-d"),
            event.end_date.format("%b %-d")
        )
    }
}
