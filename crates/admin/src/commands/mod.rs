//! Management commands

pub mod add_arks;
