//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use apifetch_core::testing::{fixtures, MockFetcher};
//!
//! let fetcher = Arc::new(MockFetcher::with_payload(fixtures::users_payload()));
//! let pipeline = Pipeline::new("https://example.com/users", fetcher.clone());
//! pipeline.run().await;
//!
//! assert_eq!(fetcher.requested_urls().await.len(), 1);
//! ```

mod mock_fetcher;

pub use mock_fetcher::MockFetcher;

/// Test fixtures and helper functions.
pub mod fixtures {
    use serde_json::{json, Value};

    /// A single well-formed record.
    pub fn user(id: u64, name: &str) -> Value {
        json!({ "id": id, "name": name })
    }

    /// A small payload shaped like the reference `/users` endpoint.
    pub fn users_payload() -> Value {
        json!([
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz"
            },
            {
                "id": 2,
                "name": "Ervin Howell",
                "username": "Antonette",
                "email": "Shanna@melissa.tv"
            },
            {
                "id": 3,
                "name": "Clementine Bauch",
                "username": "Samantha",
                "email": "Nathan@yesenia.net"
            }
        ])
    }

    /// Lines printed for [`users_payload`], without trailing newlines.
    pub fn users_output() -> Vec<&'static str> {
        vec![
            "Data received:",
            "ID: 1, Name: Leanne Graham",
            "ID: 2, Name: Ervin Howell",
            "ID: 3, Name: Clementine Bauch",
        ]
    }
}
