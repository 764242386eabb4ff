//! End-to-end tests, run against a live server with
//! `cargo test -p bookshelf_tests --features system_tests` (or `load_tests`)
