use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{get_config_path, validate_config, Config, DraftConfig, KeeperConfig};
use crate::draft::DraftOrderKind;

/// Line-oriented prompts over any input/output pair.
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt user with a message and return their trimmed input.
    ///
    /// Fails once input is exhausted, so scripted answers cannot loop forever.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input ended before the config was complete");
        }
        Ok(line.trim().to_string())
    }

    /// Prompt user with a message and a default value. Returns default if input is empty.
    fn prompt_with_default(&mut self, message: &str, default: &str) -> Result<String> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Prompt user with a yes/no question. Returns bool based on input and default.
    fn prompt_yes_no(&mut self, message: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?.to_lowercase();
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(input == "y" || input == "yes")
        }
    }

    /// Re-prompt until the answer parses and lies within `min..=max`.
    fn prompt_number(&mut self, message: &str, default: usize, min: usize, max: usize) -> Result<usize> {
        loop {
            let input = self.prompt_with_default(message, &default.to_string())?;
            match usize::from_str(&input) {
                Ok(v) if (min..=max).contains(&v) => return Ok(v),
                _ => writeln!(self.output, "  Invalid: enter a number from {} to {}. Try again.", min, max)?,
            }
        }
    }

    fn prompt_order(&mut self) -> Result<DraftOrderKind> {
        loop {
            let input = self.prompt_with_default("Draft order (snake/linear)", "snake")?;
            match input.to_lowercase().as_str() {
                "snake" => return Ok(DraftOrderKind::Snake),
                "linear" => return Ok(DraftOrderKind::Linear),
                _ => writeln!(self.output, "  Invalid: choose 'snake' or 'linear'. Try again.")?,
            }
        }
    }

    fn prompt_keepers(&mut self, team_count: usize, rounds: usize) -> Result<Vec<KeeperConfig>> {
        let mut keepers = Vec::new();
        let mut add = self.prompt_yes_no("Add a keeper?", false)?;
        while add {
            let round = self.prompt_number("  Round", 1, 1, rounds)?;
            let team = self.prompt_number("  Team number", 1, 1, team_count)?;
            let player = loop {
                let p = self.prompt("  Player name: ")?;
                if !p.is_empty() {
                    break p;
                }
                writeln!(self.output, "  Player name is required.")?;
            };
            keepers.push(KeeperConfig {
                round,
                team,
                player,
            });
            add = self.prompt_yes_no("  Add another keeper?", false)?;
        }
        Ok(keepers)
    }

    fn build_config(&mut self) -> Result<Config> {
        let defaults = DraftConfig::default();

        writeln!(self.output)?;
        writeln!(self.output, "League Office Configuration")?;
        writeln!(self.output, "===========================")?;
        writeln!(self.output)?;

        let team_count = self.prompt_number("Number of teams", defaults.team_count, 1, 64)?;
        let rounds = self.prompt_number("Number of rounds", defaults.rounds, 1, 64)?;
        let draft_position = self.prompt_number(
            "Your draft position",
            defaults.draft_position.min(team_count),
            1,
            team_count,
        )?;
        let order = self.prompt_order()?;
        let player_list = self.prompt_with_default(
            "Player list CSV",
            &defaults.player_list.display().to_string(),
        )?;

        writeln!(self.output)?;
        let keepers = if self.prompt_yes_no("Use the League of Goons 2023 keepers?", false)? {
            defaults.keepers.clone()
        } else {
            self.prompt_keepers(team_count, rounds)?
        };

        Ok(Config {
            draft: DraftConfig {
                team_count,
                rounds,
                draft_position,
                order,
                player_list: PathBuf::from(player_list),
                keepers,
                ..defaults
            },
            ..Config::default()
        })
    }
}

/// Write `config` as YAML to `path` atomically, creating parent directories.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    run_wizard(stdin.lock(), std::io::stdout(), default_path)
}

fn run_wizard<R: BufRead, W: Write>(input: R, output: W, default_path: Option<PathBuf>) -> Result<()> {
    let mut prompter = Prompter { input, output };
    let config = prompter.build_config()?;

    if let Err(errors) = validate_config(&config) {
        anyhow::bail!("Generated config is invalid: {}", errors.join("; "));
    }

    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    writeln!(prompter.output)?;
    let path_str = prompter.prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompter.prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            writeln!(prompter.output, "Aborted.")?;
            return Ok(());
        }
    }

    write_config(&config_path, &config)?;

    writeln!(prompter.output)?;
    writeln!(prompter.output, "Config written to {}", config_path.display())?;
    writeln!(prompter.output, "Run `league-office draft` or `league-office tiers` to get started.")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use std::io::Cursor;

    #[test]
    fn test_wizard_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        // teams, rounds, position, order, player list, goons keepers?,
        // add keeper?, round, team, player, another?, save path
        let answers = format!(
            "10\n14\n3\nlinear\n\nn\ny\n2\n4\nBreece Hall\nn\n{}\n",
            path.display()
        );
        let mut output = Vec::new();
        run_wizard(Cursor::new(answers), &mut output, None).unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.draft.team_count, 10);
        assert_eq!(config.draft.rounds, 14);
        assert_eq!(config.draft.draft_position, 3);
        assert_eq!(config.draft.order, DraftOrderKind::Linear);
        assert_eq!(config.draft.player_list, PathBuf::from("player_list.csv"));
        assert_eq!(
            config.draft.keepers,
            vec![KeeperConfig {
                round: 2,
                team: 4,
                player: "Breece Hall".to_string()
            }]
        );
    }

    #[test]
    fn test_wizard_defaults_and_reprompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        // Out-of-range position is rejected once, then accepted.
        let answers = "\n\n99\n6\n\n\ny\n\n";
        let mut output = Vec::new();
        run_wizard(Cursor::new(answers), &mut output, Some(path.clone())).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Invalid: enter a number from 1 to 12"));

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.draft, DraftConfig::default());
    }

    #[test]
    fn test_wizard_keeps_existing_file_when_declined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "draft:\n  team_count: 4\n").unwrap();

        let answers = "\n\n\n\n\ny\n\nn\n";
        let mut output = Vec::new();
        run_wizard(Cursor::new(answers), &mut output, Some(path.clone())).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "draft:\n  team_count: 4\n");
    }

    #[test]
    fn test_wizard_overwrites_existing_file_when_confirmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "draft:\n  team_count: 4\n").unwrap();

        let answers = "8\n\n\n\n\nn\nn\n\ny\n";
        let mut output = Vec::new();
        run_wizard(Cursor::new(answers), &mut output, Some(path.clone())).unwrap();

        let config = load_config(Some(path)).unwrap();
        assert_eq!(config.draft.team_count, 8);
        assert_eq!(config.draft.draft_position, 6);
        assert!(config.draft.keepers.is_empty());
    }

    #[test]
    fn test_write_config_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "not: [valid yaml for this config\n").unwrap();

        let config = Config::default();
        write_config(&path, &config).unwrap();

        assert_eq!(load_config(Some(path)).unwrap(), config);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_wizard_fails_when_input_runs_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        // Answers stop right before the keeper's player name.
        let answers = "\n\n\n\n\nn\ny\n1\n1\n";
        let mut output = Vec::new();
        let err = run_wizard(Cursor::new(answers), &mut output, Some(path.clone())).unwrap_err();

        assert!(err.to_string().contains("Input ended"));
        assert!(!path.exists());
    }
}
