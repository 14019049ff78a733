//! Products

mod errors;
mod handlers;
mod query;
mod requests;
mod responses;

pub(crate) use handlers::*;
