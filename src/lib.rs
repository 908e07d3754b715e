#![allow(dead_code)]

pub mod capture;
pub mod classify;
pub mod config;
pub mod core;
