//! # Tally Entry Point
//!
//! Thin wrapper that calls into the library.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tally::run().await
}
