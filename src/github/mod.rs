pub mod client;
pub mod paginator;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::GitHubClient;
pub use paginator::{Paginated, Paginator};
pub use transport::{HttpTransport, Page, Transport};
