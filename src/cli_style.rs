use crate::repl::CommandHelp;
use catalog_browser::browse::BrowserState;
use catalog_browser::catalog::{EnrichedProduct, Sex};
use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Attribute, Color as CtColor, Stylize};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .invalid(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const CYAN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 255,
    };
    pub const PURPLE: Color = Color::Rgb {
        r: 180,
        g: 100,
        b: 255,
    };
    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    /// Owner names of male users, the link color of the product table.
    pub const BLUE: Color = Color::Rgb {
        r: 100,
        g: 149,
        b: 237,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Box Drawing Characters
// ═══════════════════════════════════════════════════════════════════════════════

pub mod box_chars {
    pub const SINGLE_HORIZONTAL: &str = "─";
    pub const SINGLE_VERTICAL: &str = "│";

    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
    pub const ROUND_BOTTOM_LEFT: &str = "╰";
    pub const ROUND_BOTTOM_RIGHT: &str = "╯";

    pub const T_LEFT: &str = "├";
    pub const T_RIGHT: &str = "┤";
    pub const T_TOP: &str = "┬";
    pub const T_BOTTOM: &str = "┴";
    pub const CROSS: &str = "┼";

    pub const BULLET: &str = "●";
    pub const BULLET_EMPTY: &str = "○";
    pub const DIAMOND: &str = "◆";
    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
}

// ═══════════════════════════════════════════════════════════════════════════════
// Banner
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_banner() {
    let banner = r#"
     ██████╗ █████╗ ████████╗ █████╗ ██╗      ██████╗  ██████╗
    ██╔════╝██╔══██╗╚══██╔══╝██╔══██╗██║     ██╔═══██╗██╔════╝
    ██║     ███████║   ██║   ███████║██║     ██║   ██║██║  ███╗
    ██║     ██╔══██║   ██║   ██╔══██║██║     ██║   ██║██║   ██║
    ╚██████╗██║  ██║   ██║   ██║  ██║███████╗╚██████╔╝╚██████╔╝
     ╚═════╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚══════╝ ╚═════╝  ╚═════╝
"#;

    let gradient_colors = [
        colors::CYAN,
        colors::CYAN,
        colors::BLUE,
        colors::BLUE,
        colors::PURPLE,
        colors::PURPLE,
        colors::PURPLE,
    ];

    for (i, line) in banner.lines().enumerate() {
        let color = gradient_colors.get(i).unwrap_or(&colors::CYAN);
        println!("{}", line.with(*color).bold());
    }

    let subtitle = "  ═════════════════  PRODUCT CATEGORIES BROWSER  ═════════════════";
    println!("{}", subtitle.with(colors::DIM));
    println!();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Indicators
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_success(message: &str) {
    println!(
        " {} {}",
        box_chars::CHECK.to_string().with(colors::GREEN).bold(),
        message.with(colors::GREEN)
    );
}

pub fn print_error(message: &str) {
    println!(
        " {} {}",
        box_chars::CROSS_MARK.to_string().with(colors::RED).bold(),
        message.with(colors::RED)
    );
}

pub fn print_warning(message: &str) {
    println!(
        " {} {}",
        "⚠".with(colors::ORANGE).bold(),
        message.with(colors::ORANGE)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Section Headers
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_section_header(title: &str) {
    let width: usize = 60;
    let title_len = title.width();
    let padding = width.saturating_sub(title_len + 4) / 2;

    println!();
    print!("{}", box_chars::ROUND_TOP_LEFT.with(colors::CYAN));
    print!(
        "{}",
        box_chars::SINGLE_HORIZONTAL
            .repeat(padding)
            .with(colors::CYAN)
    );
    print!(
        " {} ",
        title.with(colors::CYAN).bold().attribute(Attribute::Italic)
    );
    print!(
        "{}",
        box_chars::SINGLE_HORIZONTAL
            .repeat(width.saturating_sub(title_len + 4 + padding))
            .with(colors::CYAN)
    );
    println!("{}", box_chars::ROUND_TOP_RIGHT.with(colors::CYAN));
}

pub fn print_section_footer() {
    let width = 60;
    print!("{}", box_chars::ROUND_BOTTOM_LEFT.with(colors::CYAN));
    print!(
        "{}",
        box_chars::SINGLE_HORIZONTAL
            .repeat(width)
            .with(colors::CYAN)
    );
    println!("{}", box_chars::ROUND_BOTTOM_RIGHT.with(colors::CYAN));
    println!();
}

pub fn print_key_value(key: &str, value: &str) {
    println!(
        "  {} {} {}",
        box_chars::BULLET.with(colors::PURPLE),
        format!("{}:", key).with(colors::DIM),
        value.with(colors::WHITE)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Filter Panel
// ═══════════════════════════════════════════════════════════════════════════════

fn print_toggle(label: &str, active: bool) {
    if active {
        println!(
            "  {} {}",
            box_chars::BULLET.with(colors::GREEN),
            label.with(colors::GREEN).bold()
        );
    } else {
        println!(
            "  {} {}",
            box_chars::BULLET_EMPTY.with(colors::DIM),
            label.with(colors::WHITE)
        );
    }
}

pub fn print_user_tabs(state: &BrowserState) {
    print_section_header("Users");
    for (name, active) in state.user_tabs() {
        print_toggle(name, active);
    }
    print_section_footer();
}

pub fn print_category_buttons(state: &BrowserState) {
    print_section_header("Categories");
    let buttons = state.category_buttons();
    print_toggle("All", buttons.iter().all(|(_, selected)| !selected));
    for (category, selected) in buttons {
        print_toggle(&category.label(), selected);
    }
    print_section_footer();
}

pub fn print_status(state: &BrowserState) {
    let config = state.config();
    let categories = if config.selected_categories.is_empty() {
        "All".to_string()
    } else {
        config
            .selected_categories
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let query = if config.query_name.is_empty() {
        "(none)".to_string()
    } else {
        format!("\"{}\"", config.query_name)
    };
    let sort = if config.sort_field.column_name().is_empty() {
        "(none)"
    } else {
        config.sort_field.column_name()
    };

    print_section_header("Filters");
    print_key_value("User", config.selected_user.as_str());
    print_key_value("Search", &query);
    print_key_value("Categories", &categories);
    print_key_value("Sort", sort);
    print_section_footer();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Table Display
// ═══════════════════════════════════════════════════════════════════════════════

pub struct Cell {
    text: String,
    color: CtColor,
    bold: bool,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            color: colors::WHITE,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: CtColor) -> Self {
        Cell {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
    col_widths: Vec<usize>,
}

impl TableBuilder {
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
        TableBuilder {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
            col_widths,
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(cell.text.width());
            }
        }
        self.rows.push(row);
    }

    fn border(&self, out: &mut String, left: &str, junction: &str, right: &str) {
        let _ = write!(out, "{}", left.with(colors::CYAN));
        for (i, width) in self.col_widths.iter().enumerate() {
            let _ = write!(
                out,
                "{}",
                box_chars::SINGLE_HORIZONTAL
                    .repeat(width + 2)
                    .with(colors::CYAN)
            );
            if i < self.col_widths.len() - 1 {
                let _ = write!(out, "{}", junction.with(colors::CYAN));
            }
        }
        let _ = writeln!(out, "{}", right.with(colors::CYAN));
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        self.border(
            &mut out,
            box_chars::ROUND_TOP_LEFT,
            box_chars::T_TOP,
            box_chars::ROUND_TOP_RIGHT,
        );

        let _ = write!(out, "{}", box_chars::SINGLE_VERTICAL.with(colors::CYAN));
        for (i, header) in self.headers.iter().enumerate() {
            let padding = self.col_widths[i] - header.width();
            let _ = write!(
                out,
                " {}{} {}",
                header.clone().with(colors::CYAN).bold(),
                " ".repeat(padding),
                box_chars::SINGLE_VERTICAL.with(colors::CYAN)
            );
        }
        out.push('\n');

        self.border(
            &mut out,
            box_chars::T_LEFT,
            box_chars::CROSS,
            box_chars::T_RIGHT,
        );

        for row in &self.rows {
            let _ = write!(out, "{}", box_chars::SINGLE_VERTICAL.with(colors::CYAN));
            for (i, cell) in row.iter().enumerate() {
                let width = self.col_widths.get(i).unwrap_or(&0);
                let padding = width.saturating_sub(cell.text.width());
                let styled = cell.text.clone().with(cell.color);
                let styled = if cell.bold { styled.bold() } else { styled };
                let _ = write!(
                    out,
                    " {}{} {}",
                    styled,
                    " ".repeat(padding),
                    box_chars::SINGLE_VERTICAL.with(colors::CYAN)
                );
            }
            out.push('\n');
        }

        self.border(
            &mut out,
            box_chars::ROUND_BOTTOM_LEFT,
            box_chars::T_BOTTOM,
            box_chars::ROUND_BOTTOM_RIGHT,
        );
        out
    }
}

/// Builds the product table: owners are highlighted by sex the same way the
/// filter panel tabs are.
pub fn products_table(products: &[&EnrichedProduct]) -> TableBuilder {
    let mut table = TableBuilder::new(vec!["ID", "Product", "Category", "User"]);
    for product in products {
        let owner_color = match product.user.sex {
            Sex::F => colors::RED,
            Sex::M => colors::BLUE,
        };
        table.add_row(vec![
            Cell::plain(product.id.to_string()).bold(),
            Cell::plain(product.name.clone()),
            Cell::plain(product.category.label()),
            Cell::colored(product.user.name.clone(), owner_color),
        ]);
    }
    table
}

/// The product table, or a single `No results` line when nothing matches.
pub fn render_products(products: &[&EnrichedProduct]) -> String {
    if products.is_empty() {
        return format!(
            "  {} {}\n",
            box_chars::BULLET_EMPTY.with(colors::DIM),
            "No results".with(colors::DIM).attribute(Attribute::Italic)
        );
    }
    products_table(products).render()
}

pub fn print_products(products: &[&EnrichedProduct]) {
    print!("{}", render_products(products));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Prompt Styling
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_prompt() -> String {
    format!(
        "{}{} ",
        "❯".with(colors::CYAN).bold(),
        "❯".with(colors::PURPLE).bold(),
    )
}

pub fn print_command_echo(command: &str) {
    println!(
        "{}{}  {}",
        "❯".with(colors::CYAN).bold(),
        "❯".with(colors::PURPLE).bold(),
        command.with(colors::GREEN).bold()
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Welcome Message
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_welcome(source: &str, state: &BrowserState) {
    print_banner();

    let catalog = state.catalog();
    let version = format!("{}-{}", env!("APP_VERSION"), env!("GIT_HASH"));
    let counts = format!(
        "{} users, {} categories, {} products",
        catalog.get_users_count(),
        catalog.get_categories_count(),
        catalog.get_products_count()
    );

    print_section_header("Catalog");
    print_key_value("Source", source);
    print_key_value("Contents", &counts);
    print_key_value("Version", &version);
    println!();
    println!("  {}", "Type 'help' for available commands".with(colors::DIM));
    print_section_footer();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Help Display
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_help(commands: &[CommandHelp]) {
    println!();
    print_section_header("Available Commands");
    println!();

    fn group<'a>(commands: &'a [CommandHelp], names: &[&str]) -> Vec<&'a CommandHelp> {
        commands.iter().filter(|c| names.contains(&c.name)).collect()
    }

    fn print_command_group(title: &str, commands: &[&CommandHelp], color: CtColor) {
        println!(
            "  {} {}",
            box_chars::DIAMOND.with(color),
            title.with(color).bold()
        );
        for cmd in commands {
            println!(
                "      {} {}  {}",
                cmd.name.with(colors::GREEN).bold(),
                cmd.args.with(colors::DIM),
                cmd.description.with(colors::WHITE)
            );
        }
        println!();
    }

    print_command_group(
        "Owners",
        &group(commands, &["users", "user", "all-users"]),
        colors::CYAN,
    );
    print_command_group(
        "Search",
        &group(commands, &["search", "clear-search"]),
        colors::BLUE,
    );
    print_command_group(
        "Categories",
        &group(commands, &["categories", "category", "all-categories"]),
        colors::PURPLE,
    );
    print_command_group(
        "Table",
        &group(commands, &["sort", "show", "status", "reset"]),
        colors::GREEN,
    );
    print_command_group(
        "System",
        &group(commands, &["help", "exit"]),
        colors::ORANGE,
    );

    print_section_footer();
}

pub fn print_goodbye() {
    println!();
    println!(
        "  {} {}",
        "👋".with(colors::CYAN),
        "Goodbye! Thanks for browsing the catalog"
            .with(colors::PURPLE)
            .bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_browser::catalog::{Category, User};

    fn product(id: u32, name: &str, sex: Sex) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_string(),
            category: Category {
                id: 10,
                title: "Fruits".to_string(),
                icon: "🍎".to_string(),
                owner_id: 1,
            },
            user: User {
                id: 1,
                name: "Anna".to_string(),
                sex,
            },
        }
    }

    #[test]
    fn table_shows_category_with_icon() {
        let apple = product(100, "apple", Sex::F);
        let rendered = products_table(&[&apple]).render();
        assert!(rendered.contains("apple"));
        assert!(rendered.contains("🍎 - Fruits"));
        assert!(rendered.contains("Anna"));
        assert!(rendered.contains("Category"));
    }

    #[test]
    fn table_has_one_line_per_row_plus_frame() {
        let apple = product(100, "apple", Sex::F);
        let banana = product(101, "Banana", Sex::M);
        let rendered = products_table(&[&apple, &banana]).render();
        // top border, header, separator, two rows, bottom border
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn owners_are_colored_by_sex() {
        let apple = product(100, "apple", Sex::F);
        let banana = product(101, "Banana", Sex::M);
        let table = products_table(&[&apple, &banana]);
        assert_eq!(table.rows[0][3].color, colors::RED);
        assert_eq!(table.rows[1][3].color, colors::BLUE);
        assert_eq!(table.rows[0][1].color, table.rows[1][1].color);
    }

    #[test]
    fn empty_result_renders_no_results() {
        let rendered = render_products(&[]);
        assert!(rendered.contains("No results"));
        assert_eq!(rendered.lines().count(), 1);

        let apple = product(100, "apple", Sex::F);
        let rendered = render_products(&[&apple]);
        assert!(!rendered.contains("No results"));
        assert!(rendered.contains("apple"));
    }

    #[test]
    fn column_width_follows_widest_cell() {
        let mut table = TableBuilder::new(vec!["ID"]);
        table.add_row(vec![Cell::plain("12345")]);
        assert_eq!(table.col_widths, vec![5]);
    }
}
