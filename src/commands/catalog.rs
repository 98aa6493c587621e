use crate::*;

pub fn handle_catalog_commands(cli: &Cli) -> anyhow::Result<bool> {
    let catalog = Catalog::builtin();
    match &cli.command {
        Commands::Detect { filenames } => {
            let reports: Vec<DetectReport> = filenames.iter().map(|f| describe(f)).collect();
            print_out(cli.json, &reports, |r| {
                format!("{}\t{}\t{}", r.filename, r.unit_type, r.display_name)
            })?;
        }
        Commands::Types => {
            print_out(cli.json, unit_type_table(), |i| {
                format!("{}\t{}\t{}", i.unit_type, i.display_name, i.doc_key)
            })?;
        }
        Commands::Sections => {
            let items: Vec<SectionItem> = catalog
                .sections
                .iter()
                .map(|s| SectionItem {
                    section: s.name.to_string(),
                    directives: s.directives.iter().map(|d| d.to_string()).collect(),
                })
                .collect();
            print_out(cli.json, &items, |s| format!("[{}]", s.section))?;
        }
        Commands::Directives { section } => {
            let Some(list) = catalog.directives(section) else {
                anyhow::bail!("unknown section: {}", section);
            };
            print_out(cli.json, list, |d| d.to_string())?;
        }
        Commands::Explain { directive } => {
            let Some(help) = catalog.help(directive) else {
                anyhow::bail!("no documentation for directive: {}", directive);
            };
            let item = HelpItem {
                directive: directive.clone(),
                help: help.to_string(),
            };
            print_one(cli.json, item, |h| format!("{}: {}", h.directive, h.help))?;
        }
        Commands::Validate {
            directive,
            value,
            strict,
        } => {
            let rule = DirectiveRule::for_directive(directive);
            let report = ValidateReport {
                directive: directive.clone(),
                value: value.clone(),
                rule: rule.as_str().to_string(),
                valid: validate_directive(directive, value),
            };
            let valid = report.valid;
            print_one(cli.json, report, |r| {
                format!(
                    "{}\t{}={}\t({})",
                    if r.valid { "valid" } else { "invalid" },
                    r.directive,
                    r.value,
                    r.rule
                )
            })?;
            if *strict && !valid {
                anyhow::bail!("invalid value for {}: {}", directive, value);
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}
