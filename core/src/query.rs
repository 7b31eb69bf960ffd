//! State reader.
//!
//! Rebuilds [`ApplicationState`] from the `ProfileCreated` events of the
//! configured package. One index call per query: no pagination, no
//! deduplication, no caching.

use async_trait::async_trait;

use crate::config::NetworkConfig;
use crate::error::{QueryResult, RpcResult};
use crate::models::ApplicationState;
use crate::rpc::{EventFilter, EventPage, EventQuery};

/// Read access to an event index.
///
/// Implemented by [`crate::rpc::SuiClient`] over any transport, and by
/// test doubles.
#[async_trait(?Send)]
pub trait EventIndex {
    /// Fetch one page of events matching `query`.
    async fn query_events(&self, query: &EventQuery) -> RpcResult<EventPage>;
}

/// Query used by [`query_state`]: `ProfileCreated` events, first page, ascending.
pub fn profile_events_query(config: &NetworkConfig) -> EventQuery {
    EventQuery::new(EventFilter::MoveEventType(config.profile_event_type()))
}

/// Rebuild the application state from the event index.
///
/// Index errors propagate unchanged; a payload that is not a profile fails
/// the whole query.
pub async fn query_state<I>(index: &I, config: &NetworkConfig) -> QueryResult<ApplicationState>
where
    I: EventIndex + ?Sized,
{
    let query = profile_events_query(config);
    let page = index.query_events(&query).await?;

    if page.has_next_page {
        log::debug!(
            "Event index returned a partial page ({} events), remaining pages are not fetched",
            page.data.len()
        );
    }

    let state = ApplicationState::from_events(&page.data)?;
    log::info!("Loaded {} profiles", state.len());
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Network;
    use crate::error::{QueryError, RpcError};
    use crate::rpc::{EventId, SuiEvent};
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    struct MockIndex {
        result: RpcResult<EventPage>,
        queries: RefCell<Vec<EventQuery>>,
    }

    impl MockIndex {
        fn returning(result: RpcResult<EventPage>) -> Self {
            Self { result, queries: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl EventIndex for MockIndex {
        async fn query_events(&self, query: &EventQuery) -> RpcResult<EventPage> {
            self.queries.borrow_mut().push(query.clone());
            self.result.clone()
        }
    }

    fn config() -> NetworkConfig {
        NetworkConfig::new(Network::Testnet, "0xfeed", "0xbeef").unwrap()
    }

    fn profile_event(seq: usize, name: &str, description: &str) -> SuiEvent {
        SuiEvent {
            id: EventId { tx_digest: format!("tx{}", seq), event_seq: "0".into() },
            package_id: "0xfeed".into(),
            transaction_module: "manage".into(),
            sender: "0x7".into(),
            event_type: "0xfeed::manage::ProfileCreated".into(),
            parsed_json: json!({"name": name, "description": description}),
            timestamp_ms: Some("1718000000000".into()),
        }
    }

    #[test]
    fn test_query_uses_profile_event_filter() {
        let index = MockIndex::returning(Ok(EventPage::default()));
        let config = config();

        let state = block_on(query_state(&index, &config)).unwrap();
        assert!(state.is_empty());

        let queries = index.queries.borrow();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0].filter,
            EventFilter::MoveEventType(config.profile_event_type())
        );
        assert_eq!(queries[0].cursor, None);
        assert!(!queries[0].descending);
    }

    #[test]
    fn test_single_profile_scenario() {
        let page = EventPage { data: vec![profile_event(0, "a", "b")], ..Default::default() };
        let index = MockIndex::returning(Ok(page));

        let state = block_on(query_state(&index, &config())).unwrap();
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"users": [{"name": "a", "description": "b"}]})
        );
    }

    #[test]
    fn test_truncated_page_is_propagated() {
        let page = EventPage {
            data: (0..3).map(|i| profile_event(i, &format!("user{}", i), "")).collect(),
            next_cursor: Some(EventId { tx_digest: "tx2".into(), event_seq: "0".into() }),
            has_next_page: true,
        };
        let index = MockIndex::returning(Ok(page));

        let state = block_on(query_state(&index, &config())).unwrap();
        assert_eq!(state.len(), 3);
        assert_eq!(state.users[2].name, "user2");
        assert_eq!(index.queries.borrow().len(), 1);
    }

    #[test]
    fn test_index_failure_propagates() {
        let index = MockIndex::returning(Err(RpcError::Http("connection reset".into())));

        match block_on(query_state(&index, &config())) {
            Err(QueryError::Index(RpcError::Http(msg))) => assert_eq!(msg, "connection reset"),
            other => panic!("expected index error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_payload_returns_no_state() {
        let mut bad = profile_event(1, "x", "y");
        bad.parsed_json = json!({"description": "missing name"});
        let page = EventPage { data: vec![profile_event(0, "a", "b"), bad], ..Default::default() };
        let index = MockIndex::returning(Ok(page));

        assert!(matches!(
            block_on(query_state(&index, &config())),
            Err(QueryError::Payload { index: 1, .. })
        ));
    }
}
