use colored::Colorize;
use dialoguer::{Confirm, Input};
use std::io::BufRead;

use springcli_core::model::is_reserved;
use springcli_core::{Attribute, DeclarationSet, Relation, RelationKind, ATTRIBUTE_TYPES};

/// Property name that switches the field loop into the relation loop.
pub const RELATIONS_KEYWORD: &str = "relations";

/// Source of answers for the interactive entity builder.
pub trait Prompter {
    /// Ask for one line of text. An empty answer ends the current loop.
    fn ask(&mut self, prompt: &str) -> Result<String, Box<dyn std::error::Error>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool, Box<dyn std::error::Error>>;

    /// Display an informational message.
    fn show(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

/// Answers taken in order from a sequence, such as the lines of stdin when
/// it is not a terminal. Once exhausted every question gets an empty answer
/// (and every confirmation a "no"), which ends all loops.
pub struct ScriptedPrompter {
    answers: Box<dyn Iterator<Item = String>>,
    shown: Vec<String>,
    echo: bool,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let answers: Vec<String> = answers.into_iter().map(Into::into).collect();
        Self {
            answers: Box::new(answers.into_iter()),
            shown: Vec::new(),
            echo: false,
        }
    }

    /// One answer per line of `reader`, read on demand. Messages are printed
    /// as well as recorded.
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            answers: Box::new(reader.lines().map_while(Result::ok)),
            shown: Vec::new(),
            echo: true,
        }
    }

    /// Messages displayed so far.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    fn next_answer(&mut self) -> String {
        self.answers
            .next()
            .map(|a| a.trim().to_string())
            .unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.next_answer())
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
        let answer = self.next_answer().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    fn show(&mut self, message: &str) {
        if self.echo {
            println!("{message}");
        }
        self.shown.push(message.to_string());
    }
}

/// Ask for properties until an empty name is given.
///
/// Typing `relations` as a property name opens the relation loop; `?` as a
/// type lists the known type tokens. Invalid entries are reported and
/// skipped.
pub fn gather_declarations(
    prompter: &mut dyn Prompter,
) -> Result<DeclarationSet, Box<dyn std::error::Error>> {
    let mut set = DeclarationSet::new();

    prompter.show(&format!(
        "{} Type '{}' as a property name to configure JPA relations",
        "->".blue(),
        RELATIONS_KEYWORD
    ));

    loop {
        let name = prompter.ask("Property name (leave empty to finish)")?;
        if name.is_empty() {
            break;
        }
        if name == RELATIONS_KEYWORD {
            gather_relations(prompter, &mut set)?;
            continue;
        }

        let type_token = loop {
            let answer = prompter.ask("Field type ('?' to list types)")?;
            if answer == "?" {
                prompter.show(&type_list());
                continue;
            }
            break answer;
        };

        if is_reserved(&name) {
            prompter.show(&format!(
                "{} '{}' is the identity field and is always generated",
                "!".yellow(),
                name
            ));
            continue;
        }

        match Attribute::from_token(name, &type_token) {
            Ok(attribute) => {
                prompter.show(&format!(
                    "{} Field added: {} ({})",
                    "✓".green(),
                    attribute.name.cyan(),
                    attribute.ty
                ));
                set.upsert_attribute(attribute);
            }
            Err(e) => prompter.show(&format!("{} {e}", "!".yellow())),
        }
    }

    Ok(set)
}

fn gather_relations(
    prompter: &mut dyn Prompter,
    set: &mut DeclarationSet,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let name = prompter.ask("Relation name (leave empty to finish)")?;
        if name.is_empty() {
            return Ok(());
        }

        prompter.show(&kind_table());
        let kind = prompter.ask("Relation type")?;
        let target = prompter.ask("Target class")?;

        if is_reserved(&name) {
            prompter.show(&format!(
                "{} '{}' is the identity field and cannot be a relation",
                "!".yellow(),
                name
            ));
            continue;
        }

        match Relation::from_token(name, &kind, target) {
            Ok(relation) => {
                prompter.show(&format!(
                    "{} Relation added: {} ({} -> {})",
                    "✓".green(),
                    relation.name.cyan(),
                    relation.kind,
                    relation.target
                ));
                set.upsert_relation(relation);
            }
            Err(e) => prompter.show(&format!("{} {e}", "!".yellow())),
        }
    }
}

fn type_list() -> String {
    let mut out = String::from("Available types:");
    for (token, java) in ATTRIBUTE_TYPES {
        out.push_str(&format!("\n  {:<15} {}", token, java.dimmed()));
    }
    out.push_str(&format!(
        "\n  {}",
        "any other name is used as a class reference".dimmed()
    ));
    out
}

fn kind_table() -> String {
    let mut out = String::from("Relation types:");
    for kind in RelationKind::KNOWN {
        out.push_str(&format!("\n  {:<12} {}", kind.name(), kind.description().dimmed()));
    }
    out
}
