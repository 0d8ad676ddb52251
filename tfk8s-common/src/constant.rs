// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

pub const APP_NAME: &str = "terraform-provider-k8s";

/// Prefix for environment variables, nested keys are separated by `__`
pub const ENV_PREFIX: &str = "TFK8S";

/// Environment variable holding the log filter directives
pub const LOG_LEVEL_ENV: &str = "TF_LOG_PROVIDER";

/// Type name of the provider, prepended to every data source and resource type name
pub const PROVIDER_TYPE_NAME: &str = "k8s";

pub const DEFAULT_FIELD_MANAGER: &str = "terraform-provider-k8s";

pub const HANDSHAKE_PREFIX: &str = "TFK8S_PROVIDER";
pub const PROTOCOL_VERSION: u32 = 1;
