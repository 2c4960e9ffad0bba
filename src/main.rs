use anyhow::{Context, Result, bail};
use clap::Parser;
use drci::runtime::{RealRuntime, Runtime};
use std::io::Read;
use std::path::{Path, PathBuf};

/// drci - Drupal contrib installer companion
///
/// Keeps a split workspace wired together: computes install directories for
/// drupal-* extension packages, links the web root to the canonical
/// contrib/custom trees, and points drupal/core patches at drupal/drupal.
///
/// Examples:
///   drci reconcile                          # link web/ to contrib/, custom/ and vendor/
///   drci resolve drupal-module drupal/views # print the install directory
#[derive(Parser, Debug)]
#[command(author, version = env!("DRCI_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory (defaults to the working directory; also via DRCI_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "DRCI_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub project_root: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Link the web root to the contrib/custom trees and the dependency cache
    Reconcile(ReconcileArgs),

    /// Print the install directory for an extension package
    Resolve(ResolveArgs),

    /// Rewrite a patch manifest so drupal/core patches target drupal/drupal
    RedirectPatches(RedirectPatchesArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReconcileArgs {}

#[derive(clap::Args, Debug)]
pub struct ResolveArgs {
    /// The package type, e.g. "drupal-module"
    #[arg(value_name = "PACKAGE_TYPE")]
    pub package_type: String,

    /// The package pretty name in the format "vendor/name"
    #[arg(value_name = "VENDOR/NAME")]
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct RedirectPatchesArgs {
    /// Extra-metadata JSON file to rewrite; stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;
    let root = cli.project_root.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Reconcile(_args) => drci::hooks::post_update(&runtime, &root),
        Commands::Resolve(args) => resolve(&args),
        Commands::RedirectPatches(args) => redirect_patches(&runtime, &args),
    }
}

fn resolve(args: &ResolveArgs) -> Result<()> {
    match drci::resolver::resolve_install_path(&args.package_type, &args.name) {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => bail!(
            "{} is not handled here; use the host default install path",
            args.package_type
        ),
    }
}

fn redirect_patches(runtime: &RealRuntime, args: &RedirectPatchesArgs) -> Result<()> {
    let input = match &args.file {
        Some(file) if file != Path::new("-") => runtime.read_to_string(file)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read extra metadata from stdin")?;
            buffer
        }
    };
    let extra: drci::package::ExtraMetadata =
        serde_json::from_str(&input).context("Failed to parse extra metadata")?;
    let rewritten = drci::patches::redirect(&extra);
    println!("{}", serde_json::to_string_pretty(&rewritten)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_reconcile_parsing() {
        let cli = Cli::try_parse_from(["drci", "reconcile"]).unwrap();
        assert!(matches!(cli.command, Commands::Reconcile(_)));
        assert_eq!(cli.project_root, None);
    }

    #[test]
    fn test_cli_resolve_parsing() {
        let cli = Cli::try_parse_from(["drci", "resolve", "drupal-module", "drupal/views"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.package_type, "drupal-module");
                assert_eq!(args.name, "drupal/views");
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_redirect_patches_default_stdin() {
        let cli = Cli::try_parse_from(["drci", "redirect-patches"]).unwrap();
        match cli.command {
            Commands::RedirectPatches(args) => assert_eq!(args.file, None),
            _ => panic!("Expected RedirectPatches command"),
        }
    }

    #[test]
    fn test_cli_global_root_parsing() {
        let cli = Cli::try_parse_from(["drci", "--root", "/tmp/site", "reconcile"]).unwrap();
        assert_eq!(cli.project_root, Some(PathBuf::from("/tmp/site")));

        // the flag is global, so it also parses after the subcommand
        let cli = Cli::try_parse_from(["drci", "reconcile", "-r", "/tmp/site"]).unwrap();
        assert_eq!(cli.project_root, Some(PathBuf::from("/tmp/site")));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["drci"]);
        assert!(result.is_err());
    }
}
