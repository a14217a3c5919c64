//! Host-based scenario tests for the PAX counter node
//! These tests run on the development machine, not on the ESP32. Each one
//! drives the config store and provisioning flow through several simulated
//! boots that share one persistent store.
