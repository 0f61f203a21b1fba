//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; error responses read it so the problem
//! body and the `x-trace-id` header always agree. Outside a request the id
//! is `"unknown"`.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
        .unwrap_or_else(|| "unknown".to_string())
}

/// Run `future` with `trace_id` visible through [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_a_request() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn scoped_id_is_visible_and_restored() {
        let seen = with_trace_id("trace-1".to_string(), async {
            let inner = with_trace_id("trace-2".to_string(), async { trace_id() }).await;
            (trace_id(), inner)
        })
        .await;

        assert_eq!(seen, ("trace-1".to_string(), "trace-2".to_string()));
        assert_eq!(trace_id(), "unknown");
    }
}
