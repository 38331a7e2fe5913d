use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub banner_url: Option<String>,
    pub is_featured: bool,
}

impl EventDto {
    /// An event is upcoming when its date is on or after `now`.
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date >= now
    }
}

/// JSON body of `PUT /api/events?id=` used to toggle the featured flag.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FeatureEventDto {
    pub is_featured: Option<bool>,
}

/// Events split the way the home page displays them.
#[derive(PartialEq, Clone, Debug, Default)]
pub struct HomeEvents {
    /// Event shown in the hero section.
    pub featured: Option<EventDto>,
    /// Events dated on or after the reference time, in the order received.
    pub upcoming: Vec<EventDto>,
}

impl HomeEvents {
    /// Splits a list of events into the hero event and the upcoming list.
    ///
    /// The hero event is the first event flagged as featured, falling back to the
    /// first event of the list when none is flagged.
    pub fn from_events(events: Vec<EventDto>, now: DateTime<Utc>) -> Self {
        let featured = events
            .iter()
            .find(|e| e.is_featured)
            .or_else(|| events.first())
            .cloned();

        let upcoming = events.into_iter().filter(|e| e.is_upcoming(now)).collect();

        Self { featured, upcoming }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn event(id: i32, date: DateTime<Utc>, is_featured: bool) -> EventDto {
        EventDto {
            id,
            title: format!("Event {}", id),
            description: "D".to_string(),
            date,
            location: "Denver".to_string(),
            banner_url: None,
            is_featured,
        }
    }

    #[test]
    fn picks_flagged_event_as_featured() {
        let now = Utc::now();
        let events = vec![
            event(1, now + Duration::days(2), false),
            event(2, now - Duration::days(2), true),
        ];

        let home = HomeEvents::from_events(events, now);

        assert_eq!(home.featured.map(|e| e.id), Some(2));
    }

    #[test]
    fn falls_back_to_first_event_when_none_flagged() {
        let now = Utc::now();
        let events = vec![
            event(5, now + Duration::days(1), false),
            event(6, now + Duration::days(3), false),
        ];

        let home = HomeEvents::from_events(events, now);

        assert_eq!(home.featured.map(|e| e.id), Some(5));
    }

    #[test]
    fn upcoming_excludes_past_events() {
        let now = Utc::now();
        let events = vec![
            event(1, now - Duration::hours(1), false),
            event(2, now, false),
            event(3, now + Duration::days(10), false),
        ];

        let home = HomeEvents::from_events(events, now);
        let ids: Vec<i32> = home.upcoming.iter().map(|e| e.id).collect();

        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn empty_list_has_no_featured_event() {
        let home = HomeEvents::from_events(Vec::new(), Utc::now());

        assert!(home.featured.is_none());
        assert!(home.upcoming.is_empty());
    }
}
