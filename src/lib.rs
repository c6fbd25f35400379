// Library for tests to access modules

pub mod cli;
pub mod config;
pub mod idb;
pub mod mapping;
pub mod models;
pub mod resolver;
pub mod sync;
pub mod version;
pub mod vsphere;
