use crate::*;
use std::path::{Path, PathBuf};

pub fn handle_edit_commands(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Preview { file } => {
            let loaded = load_unit(file)?;
            let report = PreviewReport {
                detect: describe(&loaded.name),
                text: loaded.contents,
            };
            if cli.json {
                print_one(true, report, |_| String::new())?;
            } else {
                println!(
                    "# {} ({})",
                    report.detect.display_name, report.detect.unit_type
                );
                print!("{}", report.text);
                if !report.text.ends_with('\n') {
                    println!();
                }
            }
        }
        Commands::Insert {
            file,
            section,
            directive,
            at,
            name,
            force,
        } => {
            if config.strict_catalog && !force {
                check_catalog(Catalog::builtin(), section, directive)?;
            }
            let loaded = load_unit(file)?;
            let mut doc = Document::new(loaded.contents);
            match at {
                Some(n) => {
                    let landed = doc.set_cursor(*n);
                    if landed != *n {
                        tracing::warn!("cursor {} is past the end; inserting at {}", n, landed);
                    }
                }
                None => doc.cursor_to_end(),
            }
            if !doc.insert_directive(section, directive) {
                anyhow::bail!("section and directive must not be empty");
            }
            let dir = parent_dir(file);
            let target = name.as_deref().unwrap_or(&loaded.name);
            let saved = save_unit(&dir, target, doc.text(), &config.default_filename)?;
            if config.audit {
                audit(
                    "insert",
                    serde_json::json!({
                        "path": saved.path,
                        "section": section,
                        "directive": directive
                    }),
                );
            }
            let report = InsertReport {
                section: section.clone(),
                directive: directive.clone(),
                cursor: doc.selection().end,
                saved,
            };
            print_one(cli.json, report, |r| {
                format!(
                    "inserted [{}] {}= into {} (cursor {})",
                    r.section, r.directive, r.saved.path, r.cursor
                )
            })?;
        }
        Commands::New { name, dir } => {
            let dir = dir
                .clone()
                .or_else(|| config.save_dir.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            let name = resolve_save_name(name, &config.default_filename)?;
            let target = dir.join(&name);
            if target.exists() {
                anyhow::bail!("refusing to overwrite {}", target.display());
            }
            let unit_type = detect_unit_type(&name);
            if !unit_type.is_known() {
                tracing::warn!("{} has no unit extension; writing generic boilerplate", name);
            }
            let text = boilerplate(Catalog::builtin(), unit_type);
            let saved = save_unit(&dir, &name, &text, &config.default_filename)?;
            if config.audit {
                audit(
                    "new",
                    serde_json::json!({"path": saved.path, "unit_type": saved.unit_type}),
                );
            }
            print_one(cli.json, saved, |s| {
                format!("created {} ({})", s.path, s.unit_type)
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `[Unit]`, the type's own section when the catalog has one, then `[Install]`.
fn boilerplate(catalog: &Catalog, unit_type: UnitType) -> String {
    let mut doc = Document::default();
    doc.insert_directive("Unit", "Description");
    if let Some(section) = catalog.primary_section(unit_type) {
        if let Some(first) = section.directives.first() {
            doc.insert_directive(section.name, first);
        }
    }
    doc.insert_directive("Install", "WantedBy");
    format!("{}\n", doc.text().trim_start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_boilerplate_has_timer_section() {
        let text = boilerplate(Catalog::builtin(), UnitType::Timer);
        assert_eq!(
            text,
            "[Unit]\nDescription=\n[Timer]\nOnCalendar=\n[Install]\nWantedBy=\n"
        );
    }

    #[test]
    fn mount_boilerplate_skips_type_section() {
        let text = boilerplate(Catalog::builtin(), UnitType::Mount);
        assert_eq!(text, "[Unit]\nDescription=\n[Install]\nWantedBy=\n");
    }

    #[test]
    fn bare_filename_saves_next_to_cwd() {
        assert_eq!(parent_dir(Path::new("a.service")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("/x/a.service")), PathBuf::from("/x"));
    }
}
