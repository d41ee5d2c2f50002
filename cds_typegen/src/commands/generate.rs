//! Generate command - writes the TypeScript declaration file.

use super::load_config;
use crate::cli::{Cli, GenerateArgs};
use cds_typegen_core::{
    error::{CdsTypegenError, Result},
    model::Csn,
    tooling::TypeGenerator,
    typesync::{Diagnostic, config::TypesyncConfig},
};
use std::path::Path;
use tracing::{debug, info, warn};

/// Runs generation with configuration values only.
pub fn run_default(cli: &Cli) -> Result<()> {
    run(cli, &GenerateArgs::default())
}

/// Runs generation, with command-line values overriding the configuration.
pub fn run(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    info!("Starting TypeScript declaration generation");

    let mut config = load_config(cli)?.typesync;
    apply_overrides(&mut config, args);
    debug!("Effective typesync configuration: {:?}", config);

    let generator = TypeGenerator::new(config);

    let diagnostics = if args.stdout {
        let input = generator.config().input_path.as_deref().ok_or_else(|| {
            CdsTypegenError::config("typesync.input_path is not set and no --input was given")
        })?;
        let generated = generator.generate(&Csn::from_path(input)?);
        print!("{}", generated.content);
        generated.diagnostics
    } else {
        let report = generator.generate_from_input()?;
        info!(
            entities = report.stats.entities,
            enums = report.stats.enums,
            operations = report.stats.operations,
            "Wrote {} bytes to {:?}",
            report.file.bytes_written,
            report.file.path
        );
        report.diagnostics
    };

    check_diagnostics(&diagnostics, args.deny_warnings)
}

/// Applies command-line overrides to the loaded configuration.
pub fn apply_overrides(config: &mut TypesyncConfig, args: &GenerateArgs) {
    if let Some(input) = &args.input {
        config.input_path = Some(input.to_string_lossy().into_owned());
    }

    if let Some(output) = &args.output {
        let directory = output
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        config.output_path = directory.to_string_lossy().into_owned();
        if let Some(file_name) = output.file_name() {
            config.output_file = file_name.to_string_lossy().into_owned();
        }
    }

    if let Some(prefix) = &args.prefix {
        config.interface_prefix = prefix.clone();
    }
    if args.no_namespaces {
        config.emit_namespaces = false;
    }
    if args.no_entity_enum {
        config.emit_entity_enum = false;
    }
}

fn check_diagnostics(diagnostics: &[Diagnostic], deny_warnings: bool) -> Result<()> {
    for diagnostic in diagnostics {
        warn!("{}", diagnostic);
    }

    if deny_warnings && !diagnostics.is_empty() {
        return Err(CdsTypegenError::UnresolvedReferences(diagnostics.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = TypesyncConfig::builder()
            .input_path("from-config.json")
            .interface_prefix("I")
            .build();
        let args = GenerateArgs {
            input: Some(PathBuf::from("gen/csn.json")),
            output: Some(PathBuf::from("web/types/model.d.ts")),
            prefix: Some(String::new()),
            no_namespaces: true,
            ..Default::default()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.input_path.as_deref(), Some("gen/csn.json"));
        assert_eq!(config.output_path, "web/types");
        assert_eq!(config.output_file, "model.d.ts");
        assert_eq!(config.interface_prefix, "");
        assert!(!config.emit_namespaces);
        assert!(config.emit_entity_enum);
    }

    #[test]
    fn test_bare_output_file_goes_to_current_dir() {
        let mut config = TypesyncConfig::default();
        let args = GenerateArgs {
            output: Some(PathBuf::from("model.ts")),
            ..Default::default()
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.output_path, ".");
        assert_eq!(config.output_file, "model.ts");
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut config = TypesyncConfig::builder().interface_prefix("I").build();
        let expected = config.clone();

        apply_overrides(&mut config, &GenerateArgs::default());

        assert_eq!(config, expected);
    }

    #[test]
    fn test_deny_warnings_fails_on_diagnostics() {
        let diagnostics = vec![Diagnostic::UnresolvedInclude {
            definition: "Books".to_string(),
            include: "managed".to_string(),
        }];

        assert!(check_diagnostics(&diagnostics, false).is_ok());
        assert!(matches!(
            check_diagnostics(&diagnostics, true),
            Err(CdsTypegenError::UnresolvedReferences(1))
        ));
        assert!(check_diagnostics(&[], true).is_ok());
    }
}
