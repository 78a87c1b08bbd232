use super::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn defaults_config_path_and_workspace_root() {
    let cli = Cli::parse_from(["tf-agentd"]);
    assert_eq!(cli.config, PathBuf::from("config.json"));
    assert_eq!(cli.workspace_root, PathBuf::from("."));
    assert!(!cli.debug);
}

#[test]
fn accepts_explicit_flags() {
    let cli = Cli::parse_from(["tf-agentd", "--config", "/etc/tf/config.json", "--workspace-root", "/srv/tf", "--debug"]);
    assert_eq!(cli.config, PathBuf::from("/etc/tf/config.json"));
    assert_eq!(cli.workspace_root, PathBuf::from("/srv/tf"));
    assert!(cli.debug);
}
