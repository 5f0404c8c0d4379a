//! Feature implementations for pomopanel.
//!
//! This module contains the implementation of:
//! - Pomodoro session timer

pub mod pomodoro;
