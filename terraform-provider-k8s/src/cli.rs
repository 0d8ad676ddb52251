// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[
    clap(
        name = "terraform-provider-k8s",
        version,
        author,
        about = "Terraform provider for Kubernetes custom resources"
    )
]
pub struct CliArgs {
    #[clap(short, long, env = "TFK8S_CONFIG", help = "Path to a JSON or YAML configuration file")]
    pub config: Option<String>,
    #[clap(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[
        clap(
            name = "serve",
            about = "Run the plugin server (default)"
        )
    ]
    Serve,
    #[
        clap(
            name = "schema",
            about = "Print the provider schema as JSON"
        )
    ]
    Schema,
    #[
        clap(
            name = "read",
            about = "Read a data source once and print its state as JSON",
        )
    ]
    Read {
        #[clap(long = "type", help = "Data source type, e.g. k8s_camel_apache_org_integration_v1")]
        type_name: String,
        #[clap(short, long)]
        namespace: String,
        #[clap(long)]
        name: String,
    },
    #[
        clap(
            name = "crds",
            about = "Print the Custom Resource Definitions (CRDs) the provider is built from"
        )
    ]
    Crds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn cli_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[rstest]
    #[case(&["terraform-provider-k8s"], None)]
    #[case(&["terraform-provider-k8s", "serve"], Some("serve"))]
    #[case(&["terraform-provider-k8s", "--config", "tfk8s.yaml", "crds"], Some("crds"))]
    fn parses_subcommands(#[case] argv: &[&str], #[case] expected: Option<&str>) {
        let args = CliArgs::try_parse_from(argv).unwrap();
        let name = args.cmd.map(|cmd| match cmd {
            Commands::Serve => "serve",
            Commands::Schema => "schema",
            Commands::Read { .. } => "read",
            Commands::Crds => "crds",
        });
        assert_eq!(name, expected);
    }

    #[test]
    fn read_takes_object_key() {
        let args = CliArgs::try_parse_from([
            "terraform-provider-k8s", "read",
            "--type", "k8s_camel_apache_org_integration_v1",
            "-n", "camel",
            "--name", "hello",
        ]).unwrap();

        match args.cmd {
            Some(Commands::Read { type_name, namespace, name }) => {
                assert_eq!(type_name, "k8s_camel_apache_org_integration_v1");
                assert_eq!(namespace, "camel");
                assert_eq!(name, "hello");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
