//! Database queries for the Invoice Dashboard.
//!
//! This module contains database query functions organized by table.
//! Every statement binds its inputs as parameters.

pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod user;
