//! Integration tests for startdeck-api
//!
//! Uses wiremock to simulate the dashboard API and verifies end-to-end
//! behavior of the ApiClient: auth headers, request bodies, and response
//! parsing for every sync endpoint.


mod test_bookmarks;
mod test_tasks;
