//! Remote-search adapters for the action-resource, user and group widgets.
//!
//! The host search widget asks for query parameters on every keystroke and
//! hands back the endpoint's JSON; the adapters here build the former and
//! reshape the latter into `{results: [{id, text}]}`.

mod client;
mod kind;
mod query;
mod results;
mod sequence;
mod widget;

pub use client::{SearchClient, SearchError, SearchOutcome};
pub use kind::{EntityKind, UnknownEntityKind};
pub use query::{build_query, encode_query, SHAPE_PARAM, SIZE_PARAM};
pub use results::{map_results, parse_results, SearchOption, SearchResults};
pub use sequence::{RequestTicket, SearchSequencer};
pub use widget::{register_widgets, WidgetRegistration};
