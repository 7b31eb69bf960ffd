//! Domain models.
//!
//! Application state is never stored: it is rebuilt from `ProfileCreated`
//! events on every query.

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};
use crate::rpc::SuiEvent;

/// A profile as recorded by a `ProfileCreated` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: String,
}

impl Profile {
    /// Decode an event payload. Extra payload fields are ignored.
    pub fn from_event(event: &SuiEvent) -> Result<Self, serde_json::Error> {
        serde_json::from_value(event.parsed_json.clone())
    }
}

/// Application state: every profile, in event-index order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationState {
    pub users: Vec<Profile>,
}

impl ApplicationState {
    /// Map events to profiles one-to-one. Fails on the first bad payload.
    pub fn from_events(events: &[SuiEvent]) -> QueryResult<Self> {
        let users = events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                Profile::from_event(event).map_err(|source| QueryError::Payload {
                    index,
                    event_id: event.id.to_string(),
                    source,
                })
            })
            .collect::<QueryResult<Vec<_>>>()?;

        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::EventId;
    use serde_json::json;

    fn event(seq: usize, payload: serde_json::Value) -> SuiEvent {
        SuiEvent {
            id: EventId { tx_digest: format!("digest{}", seq), event_seq: "0".into() },
            package_id: "0x1".into(),
            transaction_module: "manage".into(),
            sender: "0x2".into(),
            event_type: "0x1::manage::ProfileCreated".into(),
            parsed_json: payload,
            timestamp_ms: None,
        }
    }

    #[test]
    fn test_single_event() {
        let state = ApplicationState::from_events(&[event(0, json!({"name": "a", "description": "b"}))]).unwrap();
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"users": [{"name": "a", "description": "b"}]})
        );
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let events: Vec<_> = ["carol", "alice", "bob", "alice"]
            .iter()
            .enumerate()
            .map(|(i, name)| event(i, json!({"name": name, "description": "", "owner": "0x2"})))
            .collect();

        let state = ApplicationState::from_events(&events).unwrap();
        let names: Vec<_> = state.users.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["carol", "alice", "bob", "alice"]);
        assert_eq!(state.len(), events.len());
    }

    #[test]
    fn test_bad_payload_reports_position() {
        let events = vec![
            event(0, json!({"name": "ok", "description": "fine"})),
            event(1, json!({"name": 42})),
        ];

        match ApplicationState::from_events(&events) {
            Err(QueryError::Payload { index, event_id, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(event_id, "digest1:0");
            }
            other => panic!("expected payload error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty() {
        let state = ApplicationState::from_events(&[]).unwrap();
        assert!(state.is_empty());
    }
}
