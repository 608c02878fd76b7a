//! Integration tests for feedcache.
//!
//! End-to-end scenarios that wire the store, the evictor and the event
//! ingestion boundary the way the application does.


pub mod support;
