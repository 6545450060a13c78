// ABOUTME: API module containing the HTTP handler functions for the tickd REST API.
// ABOUTME: Counter CRUD lives in the counters sub-module.

pub mod counters;
