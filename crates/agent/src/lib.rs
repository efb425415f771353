// Module structure for the traceroute input agent.

// Core infrastructure
pub mod acc;
pub mod config;
pub mod runner;

// Domain modules
pub mod gather;
pub mod runtime;
