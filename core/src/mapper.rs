//! Classification of transport outcomes into client results.
//!
//! # Design
//! This is the one place that decides what a response means. The rules, in
//! order:
//!
//! 1. No response (transport failure) is `Network`, whatever else happened.
//! 2. 404 is `ItemNotFound`; the body is never looked at.
//! 3. Any other status outside 200..=299 is `Unknown { code }`.
//! 4. A 2xx body is decoded into the expected shape. If it does not decode
//!    the service broke its contract, and the result is `Unknown { code }`
//!    with the 2xx status that was observed.
//!
//! A request that could not be built never reaches the transport;
//! [`map_request_error`] classifies it instead.
//!
//! The expected shape is picked by the type parameter through
//! [`ResponseBody`]. Mapping has no state: the same outcome always yields an
//! equal result.

use tracing::warn;

use crate::error::{RequestError, Result, TodoApiError};
use crate::http::Outcome;
use crate::types::Task;

/// A shape a successful response body can be decoded into.
pub trait ResponseBody: Sized {
    fn decode(body: &[u8]) -> serde_json::Result<Self>;
}

impl ResponseBody for Task {
    fn decode(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

impl ResponseBody for Vec<Task> {
    fn decode(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// No payload expected; whatever the server sent is ignored.
impl ResponseBody for () {
    fn decode(_body: &[u8]) -> serde_json::Result<Self> {
        Ok(())
    }
}

pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Map a transport outcome to the operation's result.
pub fn map_outcome<T: ResponseBody>(outcome: &Outcome) -> Result<T> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "no response received");
            return Err(TodoApiError::Network);
        }
    };

    match response.status {
        404 => Err(TodoApiError::ItemNotFound),
        status if is_success(status) => T::decode(&response.body).map_err(|err| {
            warn!(status, error = %err, "success response body did not decode");
            TodoApiError::Unknown { code: status }
        }),
        status => Err(TodoApiError::Unknown { code: status }),
    }
}

/// Map a request that was never sent. An id no URL can carry cannot name a
/// task on the server, so it is `ItemNotFound`; an unencodable body means no
/// response could arrive, so it is `Network`.
pub fn map_request_error(error: &RequestError) -> TodoApiError {
    warn!(%error, "request not sent");
    match error {
        RequestError::UnaddressableId(_) => TodoApiError::ItemNotFound,
        RequestError::Encode(_) => TodoApiError::Network,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::http::HttpResponse;

    const TASK_JSON: &str =
        r#"{"userId":"1","id":"1","title":"delectus aut autem","completed":false}"#;

    fn respond(status: u16, body: &str) -> Outcome {
        Ok(HttpResponse::new(status, body))
    }

    fn expected_task() -> Task {
        Task {
            id: "1".to_string(),
            user_id: "1".to_string(),
            title: "delectus aut autem".to_string(),
            completed: false,
        }
    }

    #[test]
    fn transport_failure_is_network_error() {
        let outcome: Outcome = Err(TransportError::Connection("refused".to_string()));
        assert_eq!(map_outcome::<Task>(&outcome), Err(TodoApiError::Network));
        assert_eq!(map_outcome::<()>(&outcome), Err(TodoApiError::Network));
    }

    #[test]
    fn ok_decodes_single_task() {
        let task = map_outcome::<Task>(&respond(200, TASK_JSON)).unwrap();
        assert_eq!(task, expected_task());
    }

    #[test]
    fn created_decodes_single_task() {
        let task = map_outcome::<Task>(&respond(201, TASK_JSON)).unwrap();
        assert_eq!(task, expected_task());
    }

    #[test]
    fn ok_decodes_task_list_in_order() {
        let body = r#"[
            {"userId":"1","id":"1","title":"a","completed":false},
            {"userId":"1","id":"2","title":"b","completed":true}
        ]"#;
        let tasks = map_outcome::<Vec<Task>>(&respond(200, body)).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, "1");
        assert_eq!(tasks[1].id, "2");
        assert!(tasks[1].completed);
    }

    #[test]
    fn one_bad_element_fails_the_whole_list() {
        let body = r#"[
            {"userId":"1","id":"1","title":"a","completed":false},
            {"userId":"1","id":"2","title":"b"}
        ]"#;
        assert_eq!(
            map_outcome::<Vec<Task>>(&respond(200, body)),
            Err(TodoApiError::Unknown { code: 200 })
        );
    }

    #[test]
    fn undecodable_success_body_is_unknown_with_observed_status() {
        assert_eq!(
            map_outcome::<Task>(&respond(201, "not json")),
            Err(TodoApiError::Unknown { code: 201 })
        );
        assert_eq!(
            map_outcome::<Vec<Task>>(&respond(200, "")),
            Err(TodoApiError::Unknown { code: 200 })
        );
    }

    #[test]
    fn not_found_wins_over_a_valid_body() {
        assert_eq!(
            map_outcome::<Task>(&respond(404, TASK_JSON)),
            Err(TodoApiError::ItemNotFound)
        );
        assert_eq!(map_outcome::<()>(&respond(404, "")), Err(TodoApiError::ItemNotFound));
    }

    #[test]
    fn other_statuses_carry_their_code() {
        for code in [301, 400, 401, 418, 500, 503] {
            assert_eq!(
                map_outcome::<Task>(&respond(code, TASK_JSON)),
                Err(TodoApiError::Unknown { code })
            );
        }
    }

    #[test]
    fn unit_shape_ignores_body() {
        assert_eq!(map_outcome::<()>(&respond(200, "")), Ok(()));
        assert_eq!(map_outcome::<()>(&respond(200, "{}")), Ok(()));
        assert_eq!(map_outcome::<()>(&respond(204, "garbage")), Ok(()));
    }

    #[test]
    fn mapping_is_repeatable() {
        for outcome in [respond(200, TASK_JSON), respond(200, "{"), respond(418, "")] {
            assert_eq!(map_outcome::<Task>(&outcome), map_outcome::<Task>(&outcome));
        }
    }

    #[test]
    fn success_range_is_inclusive() {
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
    }

    #[test]
    fn unsent_requests_map_without_a_status() {
        let unaddressable = RequestError::UnaddressableId("..".to_string());
        assert_eq!(map_request_error(&unaddressable), TodoApiError::ItemNotFound);

        let encode = RequestError::Encode(serde_json::from_str::<Task>("{").unwrap_err());
        assert_eq!(map_request_error(&encode), TodoApiError::Network);
    }
}
