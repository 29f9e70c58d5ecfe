use resmap_boundary::Event;

/// Ascending by date string; events of the same day keep their order.
pub fn sort_by_date(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date));
}

/// Date and, if known, time of an event.
#[must_use]
pub fn when(event: &Event) -> String {
    match event.time.as_deref().map(str::trim) {
        Some(time) if !time.is_empty() => format!("{} {time}", event.date),
        _ => event.date.clone(),
    }
}
