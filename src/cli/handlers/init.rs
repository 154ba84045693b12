use std::fs;

use crate::cli::commands::InitArgs;
use crate::io::phases_io;

const CONFIG_TOML_TEMPLATE: &str = r##"[project]
name = "{name}"

# --- UI Customization ---
# Uncomment and edit to override defaults.

[ui]
show_key_hints = true

# [ui.colors]
# background = "#0B1221"
# text = "#9FB3C8"
# text_bright = "#F0F4F8"
# highlight = "#FF8E3C"
# dim = "#5C6B7A"
# green = "#3DDC84"
# red = "#FF5C5C"
"##;

/// Starter checklist: the classic three start-up phases.
const PHASES_TEMPLATE: &str = r#"{
  "startUpPhases": [
    {
      "id": 1,
      "title": "Foundation",
      "isCompleted": false,
      "tasks": [
        { "id": 1, "label": "Setup virtual office", "isChecked": false },
        { "id": 2, "label": "Set mission & vision", "isChecked": false },
        { "id": 3, "label": "Select business name", "isChecked": false },
        { "id": 4, "label": "Buy domains", "isChecked": false }
      ]
    },
    {
      "id": 2,
      "title": "Discovery",
      "isCompleted": false,
      "tasks": [
        { "id": 1, "label": "Create roadmap", "isChecked": false },
        { "id": 2, "label": "Competitor analysis", "isChecked": false }
      ]
    },
    {
      "id": 3,
      "title": "Delivery",
      "isCompleted": false,
      "tasks": [
        { "id": 1, "label": "Release marketing website", "isChecked": false },
        { "id": 2, "label": "Release MVP", "isChecked": false }
      ]
    }
  ]
}
"#;

/// Infer a project name from a directory name: replace hyphens with spaces,
/// title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_config_toml(name: &str) -> String {
    CONFIG_TOML_TEMPLATE.replace("{name}", name)
}

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let data_dir = cwd.join(phases_io::DATA_DIR);

    if data_dir.is_dir() && !args.force {
        return Err("liftoff checklist already exists in ./liftoff/ (use --force to overwrite)".into());
    }

    let name = args.name.unwrap_or_else(|| {
        cwd.file_name()
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "Start-up Tasks".to_string())
    });

    fs::create_dir_all(&data_dir)?;
    fs::write(
        data_dir.join(phases_io::CONFIG_FILE),
        render_config_toml(&name),
    )?;
    fs::write(data_dir.join(phases_io::PHASES_FILE), PHASES_TEMPLATE)?;

    println!("Initialized liftoff checklist: {}", name);
    println!("  {}", data_dir.join(phases_io::PHASES_FILE).display());

    Ok(())
}
