//! Workspace-level integration test harness for nttcalc.
