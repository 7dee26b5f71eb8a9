//! Inquiry composer — collects a destination, start date, and party size,
//! then turns them into a chat-service deep link and a shareable query.

pub mod compose;
pub mod share;
pub mod state;

pub use compose::{
    InquiryComposer, SubmitResult, build_share_query, compose_message, encode_uri_component,
    format_date,
};
pub use share::{ShareQuery, parse_share_query};
pub use state::{InquiryState, InquiryView, PartyAction};
