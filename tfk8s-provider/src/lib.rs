// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

#[allow(unused_extern_crates)]
extern crate self as tfk8s_provider;

pub mod client;
pub mod context;
pub mod crd;
pub mod datasource;
pub mod diag;
pub mod error;
pub mod manifest;
pub mod provider;
pub mod resource;
pub mod response;
pub mod schema;
