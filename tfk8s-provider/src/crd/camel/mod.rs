//! Apache Camel K custom resources (`camel.apache.org`)

pub mod v1;
