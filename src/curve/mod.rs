//! This module provides group operations on elliptic curves over prime
//! fields.

pub mod sw;
