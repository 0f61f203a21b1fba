//! Request middleware.
//!
//! App::new()
//!     .wrap(TraceSpan)         // reads trace_id and creates the span
//!     .wrap(StructuredLogger)  // one request_completed event per request
//!     .wrap(RequestTrace)      // generates + stores trace_id, sets header
//!
//! `RequestTrace` is outermost so the logger's event carries the trace id.

pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;
