//! Property-based tests over the full rule tables.
