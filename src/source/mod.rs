mod client;
mod pagination;
mod retry;

pub use client::Client;
pub use pagination::{PageSource, Paginator};
