//! Shell command definitions using clap.
//!
//! Each line typed in the shell is split into words by [`split_line`] and
//! parsed with [`ShellCommand`]. Argument structs stay free of domain logic:
//! they only carry what the user typed, and the session feeds it through the
//! same editors a form would use so input is validated in one place.

use std::{fmt, str::FromStr};

use clap::{Args, Parser, Subcommand};
use jiff::civil::Date;

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(
    name = "tareas",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellCommand {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a task
    #[command(name = "nueva", alias = "n")]
    Create(TaskArgs),
    /// Edit an existing task
    #[command(name = "editar", alias = "e")]
    Edit(EditArgs),
    /// Toggle a task between Completa and Pendiente
    #[command(name = "estado")]
    Toggle(IdArgs),
    /// Filter the list by status; no status lists everything
    #[command(name = "buscar", alias = "b")]
    Search(SearchArgs),
    /// List every task
    #[command(name = "listar", aliases = ["l", "ls"])]
    List,
    /// Show one task
    #[command(name = "ver", alias = "v")]
    Show(IdArgs),
    /// Delete a task
    #[command(name = "eliminar", alias = "rm")]
    Delete(IdArgs),
    /// Show this help
    #[command(name = "ayuda", alias = "?")]
    Help,
    /// Leave the shell
    #[command(name = "salir", aliases = ["q", "exit"])]
    Quit,
}

#[derive(Args, Debug)]
pub struct TaskArgs {
    #[arg(long, help = "Task name")]
    pub nombre: Option<String>,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    pub fecha: Option<Date>,
    #[arg(
        long,
        value_name = "NOMBRE:EDAD:HABILIDADES",
        help = "Person to assign, e.g. \"Ana López:30:rust,sql\"; repeatable"
    )]
    pub persona: Vec<PersonSpec>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    #[arg(help = "Id of the task to edit")]
    pub id: u64,
    #[command(flatten)]
    pub task: TaskArgs,
    #[arg(
        long = "quitar-persona",
        value_name = "INDICE",
        help = "0-based index of a person to remove; repeatable"
    )]
    pub quitar_persona: Vec<usize>,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    #[arg(help = "Task id")]
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    #[arg(help = "Completa or Pendiente")]
    pub estado: Option<String>,
}

/// Person as typed on the command line: `name:age:skill1,skill2`.
///
/// Only the shape is checked here; age and skill rules are the person
/// editor's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSpec {
    pub full_name: String,
    pub age: i64,
    pub skills: Vec<String>,
}

impl FromStr for PersonSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(name), Some(age), Some(skills)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected NOMBRE:EDAD:HABILIDADES, got '{s}'"));
        };
        let age = age
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid age '{}'", age.trim()))?;

        Ok(Self {
            full_name: name.trim().to_string(),
            age,
            skills: skills.split(',').map(|s| s.trim().to_string()).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedQuote;

impl fmt::Display for UnterminatedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unterminated quote")
    }
}

impl std::error::Error for UnterminatedQuote {}

/// Split a line into words, honoring single and double quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, UnterminatedQuote> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(UnterminatedQuote);
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_split_line_quotes() {
        assert_eq!(
            split_line(r#"nueva --nombre "Informe final" --persona 'Ana López:30:rust'"#).unwrap(),
            vec!["nueva", "--nombre", "Informe final", "--persona", "Ana López:30:rust"]
        );
        assert_eq!(split_line("  listar  ").unwrap(), vec!["listar"]);
        assert_eq!(split_line(r#"--nombre """#).unwrap(), vec!["--nombre", ""]);
        assert!(split_line(r#"nueva --nombre "abc"#).is_err());
    }

    #[test]
    fn test_person_spec() {
        let spec: PersonSpec = "Ana López: 30 :rust, sql".parse().unwrap();
        assert_eq!(spec.full_name, "Ana López");
        assert_eq!(spec.age, 30);
        assert_eq!(spec.skills, vec!["rust", "sql"]);

        assert!("Ana:treinta:rust".parse::<PersonSpec>().is_err());
        assert!("Ana:30".parse::<PersonSpec>().is_err());
    }

    #[test]
    fn test_parse_create() {
        let parsed = ShellCommand::try_parse_from([
            "nueva",
            "--nombre",
            "Informe",
            "--fecha",
            "2026-11-30",
            "--persona",
            "Ana:30:rust",
            "--persona",
            "Luis:40:sql",
        ])
        .unwrap();

        let Command::Create(args) = parsed.command else {
            panic!("expected nueva");
        };
        assert_eq!(args.nombre.as_deref(), Some("Informe"));
        assert_eq!(args.fecha, Some(date(2026, 11, 30)));
        assert_eq!(args.persona.len(), 2);
    }

    #[test]
    fn test_parse_edit_with_removals() {
        let parsed =
            ShellCommand::try_parse_from(["editar", "3", "--quitar-persona", "0"]).unwrap();

        let Command::Edit(args) = parsed.command else {
            panic!("expected editar");
        };
        assert_eq!(args.id, 3);
        assert_eq!(args.quitar_persona, vec![0]);
        assert!(args.task.nombre.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(ShellCommand::try_parse_from(["volar"]).is_err());
        assert!(ShellCommand::try_parse_from(["ver", "abc"]).is_err());
        assert!(ShellCommand::try_parse_from(["nueva", "--fecha", "mañana"]).is_err());
    }
}
