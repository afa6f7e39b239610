use crate::cli_style::{
    get_styles, print_category_buttons, print_command_echo, print_error, print_help,
    print_products, print_status, print_user_tabs,
};
use catalog_browser::browse::{BrowserState, FilterAction, SortField, UserSelection};
use clap::{CommandFactory, Parser, Subcommand};
use rustyline::{completion::Completer, highlight::Highlighter, validate::Validator, Helper};

#[derive(Parser)]
#[command(styles=get_styles(), name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Lists the owners, marking the active one.
    Users,

    /// Shows only the products owned by the given user, "All" shows every
    /// owner.
    User { name: String },

    /// Shows the products of every owner.
    AllUsers,

    /// Shows only products whose name contains the given text, ignoring case.
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Removes the search text.
    ClearSearch,

    /// Lists the categories, marking the selected ones.
    Categories,

    /// Adds the category to the selection, or removes it if already selected.
    Category { title: String },

    /// Clears the category selection.
    AllCategories,

    /// Sorts the table ascending by ID, Product, Category or User.
    Sort { column: SortField },

    /// Resets every filter and the sort column.
    Reset,

    /// Shows the table.
    Show,

    /// Shows the current filters.
    Status,

    /// Close this program.
    Exit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

pub struct CommandHelp {
    pub name: &'static str,
    pub args: &'static str,
    pub description: &'static str,
}

pub const COMMANDS_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "users",
        args: "",
        description: "List the owners",
    },
    CommandHelp {
        name: "user",
        args: "<name>",
        description: "Show one owner's products (\"All\" for everyone)",
    },
    CommandHelp {
        name: "all-users",
        args: "",
        description: "Show every owner's products",
    },
    CommandHelp {
        name: "search",
        args: "<text>",
        description: "Filter by product name, ignoring case",
    },
    CommandHelp {
        name: "clear-search",
        args: "",
        description: "Remove the search text",
    },
    CommandHelp {
        name: "categories",
        args: "",
        description: "List the categories",
    },
    CommandHelp {
        name: "category",
        args: "<title>",
        description: "Toggle a category in the selection",
    },
    CommandHelp {
        name: "all-categories",
        args: "",
        description: "Clear the category selection",
    },
    CommandHelp {
        name: "sort",
        args: "<ID|Product|Category|User>",
        description: "Sort the table by a column",
    },
    CommandHelp {
        name: "show",
        args: "",
        description: "Show the table",
    },
    CommandHelp {
        name: "status",
        args: "",
        description: "Show the current filters",
    },
    CommandHelp {
        name: "reset",
        args: "",
        description: "Reset all filters",
    },
    CommandHelp {
        name: "help",
        args: "",
        description: "Show this help",
    },
    CommandHelp {
        name: "exit",
        args: "",
        description: "Close this program",
    },
];

fn dispatch(state: &mut BrowserState, action: FilterAction) -> CommandExecutionResult {
    match state.dispatch(action) {
        Ok(products) => {
            print_products(&products);
            CommandExecutionResult::Ok
        }
        Err(err) => CommandExecutionResult::Error(err.to_string()),
    }
}

/// A single quoted argument loses its quotes, anything else is kept as typed.
fn search_text(rest: &str) -> String {
    match shlex::split(rest) {
        Some(mut words) if words.len() == 1 => words.remove(0),
        _ => rest.to_owned(),
    }
}

fn search_action(query: String) -> FilterAction {
    if query.is_empty() {
        FilterAction::ClearQuery
    } else {
        FilterAction::SetQuery(query)
    }
}

pub fn execute_command(line: &str, state: &mut BrowserState) -> CommandExecutionResult {
    let line = line.trim();
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }
    if line == "help" {
        print_help(COMMANDS_HELP);
        return CommandExecutionResult::Ok;
    }
    // the search text is taken verbatim, dashes and inner spaces included
    if let Some(rest) = line.strip_prefix("search") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            print_command_echo(line);
            return dispatch(state, search_action(search_text(rest.trim())));
        }
    }

    let args =
        shlex::split(line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    match cli {
        Ok(cli) => {
            print_command_echo(line);
            match cli.command {
                InnerCommand::Users => print_user_tabs(state),
                InnerCommand::User { name } => {
                    return dispatch(state, FilterAction::SelectUser(UserSelection::from_name(&name)))
                }
                InnerCommand::AllUsers => {
                    return dispatch(state, FilterAction::SelectUser(UserSelection::All))
                }
                InnerCommand::Search { text } => {
                    return dispatch(state, search_action(text.join(" ")))
                }
                InnerCommand::ClearSearch => return dispatch(state, FilterAction::ClearQuery),
                InnerCommand::Categories => print_category_buttons(state),
                InnerCommand::Category { title } => {
                    return dispatch(state, FilterAction::ToggleCategory(title))
                }
                InnerCommand::AllCategories => {
                    return dispatch(state, FilterAction::ClearCategories)
                }
                InnerCommand::Sort { column } => {
                    return dispatch(state, FilterAction::SortBy(column))
                }
                InnerCommand::Reset => print_products(&state.reset_all()),
                InnerCommand::Show => print_products(&state.visible()),
                InnerCommand::Status => print_status(state),
                InnerCommand::Exit => return CommandExecutionResult::Exit,
            }
        }

        Err(e) => {
            if e.print().is_err() {
                print_error(&e.to_string());
            }
        }
    }
    CommandExecutionResult::Ok
}

#[derive(rustyline_derive::Hinter)]
pub struct BrowserHelper {
    commands_names: Vec<String>,
}

impl BrowserHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .chain(std::iter::once("help".to_string()))
            .collect();

        BrowserHelper { commands_names }
    }
}

impl Completer for BrowserHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for BrowserHelper {}
impl Validator for BrowserHelper {}
impl Helper for BrowserHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_browser::catalog::{Catalog, SeedData};

    fn state() -> BrowserState {
        let catalog = Catalog::build(SeedData::builtin().unwrap())
            .catalog
            .unwrap();
        BrowserState::new(catalog)
    }

    #[test]
    fn commands_update_the_filters() {
        let mut state = state();

        assert_eq!(
            execute_command("user Anna", &mut state),
            CommandExecutionResult::Ok
        );
        assert_eq!(state.config().selected_user.as_str(), "Anna");

        assert_eq!(
            execute_command("search \"sau sage\"", &mut state),
            CommandExecutionResult::Ok
        );
        assert_eq!(state.config().query_name, "sau sage");

        execute_command("search milk bread", &mut state);
        assert_eq!(state.config().query_name, "milk bread");

        execute_command("category Fruits", &mut state);
        execute_command("category Grocery", &mut state);
        execute_command("category Fruits", &mut state);
        assert_eq!(state.config().selected_categories.len(), 1);
        assert!(state.config().selected_categories.contains("Grocery"));

        execute_command("sort product", &mut state);
        assert_eq!(state.config().sort_field, SortField::Product);

        execute_command("reset", &mut state);
        assert!(state.config().is_neutral());
    }

    #[test]
    fn clear_commands() {
        let mut state = state();
        execute_command("search milk", &mut state);
        execute_command("category Drinks", &mut state);
        execute_command("user Roma", &mut state);

        execute_command("clear-search", &mut state);
        execute_command("all-categories", &mut state);
        execute_command("all-users", &mut state);
        assert!(state.config().is_neutral());
    }

    #[test]
    fn search_text_may_start_with_a_dash() {
        let mut state = state();
        assert_eq!(
            execute_command("search -pack", &mut state),
            CommandExecutionResult::Ok
        );
        assert_eq!(state.config().query_name, "-pack");

        execute_command("search --x milk", &mut state);
        assert_eq!(state.config().query_name, "--x milk");

        execute_command("search \"two  spaces\"", &mut state);
        assert_eq!(state.config().query_name, "two  spaces");

        execute_command("search milk   bread", &mut state);
        assert_eq!(state.config().query_name, "milk   bread");

        execute_command("search", &mut state);
        assert_eq!(state.config().query_name, "");
    }

    #[test]
    fn unknown_names_are_errors() {
        let mut state = state();
        assert_eq!(
            execute_command("user Nobody", &mut state),
            CommandExecutionResult::Error("No user named \"Nobody\"".to_string())
        );
        assert!(matches!(
            execute_command("category Toys", &mut state),
            CommandExecutionResult::Error(_)
        ));
    }

    #[test]
    fn bad_input_leaves_state_alone() {
        let mut state = state();
        assert_eq!(
            execute_command("sort Price", &mut state),
            CommandExecutionResult::Ok
        );
        assert_eq!(
            execute_command("frobnicate", &mut state),
            CommandExecutionResult::Ok
        );
        assert!(state.config().is_neutral());
    }

    #[test]
    fn exit_and_help() {
        let mut state = state();
        assert_eq!(execute_command("", &mut state), CommandExecutionResult::Ok);
        assert_eq!(execute_command("help", &mut state), CommandExecutionResult::Ok);
        assert_eq!(execute_command("exit", &mut state), CommandExecutionResult::Exit);
    }

    #[test]
    fn completes_command_names() {
        let helper = BrowserHelper::new();
        assert!(helper.commands_names.contains(&"all-categories".to_string()));
        assert!(helper.commands_names.contains(&"clear-search".to_string()));
        assert!(helper.commands_names.contains(&"help".to_string()));
    }
}
