//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (initial load, the poll loop)
//! and delegates rendering details to `components`.

pub mod dashboard;
