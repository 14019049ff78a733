//! Product catalog domain and persistence modules.

pub mod context;
pub mod database;
pub mod products;

#[cfg(test)]
mod test;

mod uuids;
